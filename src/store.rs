//! Report State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{SearchOutcome, StatusMessage};
use crate::models::ReportItem;

/// State of the results area
#[derive(Clone, Debug, Default, Store)]
pub struct ReportState {
    /// Items of the last completed search
    pub items: Vec<ReportItem>,
    /// Banner above the table
    pub status: Option<StatusMessage>,
    /// A search is in flight: loading indicator on, submit button off
    pub loading: bool,
}

pub type ReportStore = Store<ReportState>;

pub fn use_report_store() -> ReportStore {
    expect_context::<ReportStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Clear old results and show the loading indicator
pub fn store_begin_search(store: &ReportStore) {
    store.items().set(Vec::new());
    store.status().set(None);
    store.loading().set(true);
}

/// Apply a search outcome and leave the form interactive again
pub fn store_finish_search(store: &ReportStore, outcome: SearchOutcome) {
    store.status().set(outcome.status_message());
    store.items().set(outcome.into_items());
    store.loading().set(false);
}

/// Show `message` unless the last search already left one
pub fn store_show_status_if_clear(store: &ReportStore, message: StatusMessage) {
    if store.status().with_untracked(|s| s.is_none()) {
        store.status().set(Some(message));
    }
}
