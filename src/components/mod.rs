//! UI Components
//!
//! Leptos components for the search page.

mod search_form;
mod status_banner;
mod report_table;
mod vote_section;
mod contribution_modal;

pub use search_form::SearchForm;
pub use status_banner::StatusBanner;
pub use report_table::ReportTable;
pub use vote_section::VoteSection;
pub use contribution_modal::ContributionModal;
