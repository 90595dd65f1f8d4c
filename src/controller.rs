//! Search and Contribution Workflows
//!
//! Framework-free async flows behind the filter form and the vote modal.
//! Components own the UI state; these functions only talk to a [`ReportApi`]
//! and report what should be shown.

use std::future::Future;

use leptos::logging::{error, log};

use crate::api::{ReportApi, SearchFilter};
use crate::error::{ApiError, ContributionError};
use crate::modal::VoteDraft;
use crate::models::ReportItem;

pub const EMPTY_RESULT_MESSAGE: &str = "Nenhum item encontrado para este período.";
pub const THANKS_MESSAGE: &str = "Obrigado pela sua contribuição!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
        }
    }
}

/// Banner shown above the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<ReportItem>),
    Empty,
    Failed(ApiError),
}

impl SearchOutcome {
    /// Items to render; empty for both `Empty` and `Failed`
    pub fn into_items(self) -> Vec<ReportItem> {
        match self {
            SearchOutcome::Found(items) => items,
            SearchOutcome::Empty | SearchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn status_message(&self) -> Option<StatusMessage> {
        match self {
            SearchOutcome::Found(_) => None,
            SearchOutcome::Empty => Some(StatusMessage::success(EMPTY_RESULT_MESSAGE)),
            SearchOutcome::Failed(err) => Some(StatusMessage::error(format!("Erro: {}", err))),
        }
    }
}

/// Fetch the report for `filter`. Never fails: errors become an outcome.
pub async fn run_search<A: ReportApi>(api: &A, filter: &SearchFilter) -> SearchOutcome {
    match api.fetch_report(filter).await {
        Ok(items) if items.is_empty() => SearchOutcome::Empty,
        Ok(items) => {
            log!("[SEARCH] {} items", items.len());
            SearchOutcome::Found(items)
        }
        Err(err) => {
            error!("[SEARCH] fetch failed: {:?}", err);
            SearchOutcome::Failed(err)
        }
    }
}

/// Tickets for in-flight searches; only the latest one may touch the UI
#[derive(Debug, Default)]
pub struct RequestFence {
    issued: u64,
}

impl RequestFence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

/// Validate and send a vote
pub async fn submit_vote<A: ReportApi>(
    api: &A,
    draft: &VoteDraft,
    authenticated: bool,
) -> Result<(), ContributionError> {
    if !authenticated {
        return Err(ContributionError::NotAuthenticated);
    }
    let request = draft.to_request()?;
    api.contribute(&request).await?;
    log!("[VOTE] registered {} for {}", request.status.as_str(), request.item_key);
    Ok(())
}

/// Send a vote. Only if it was accepted, call `on_accepted` (the modal
/// closes there) and then run `refresh` once so the tallies come from the
/// server.
pub async fn submit_and_refresh<A, G, F, Fut>(
    api: &A,
    draft: &VoteDraft,
    authenticated: bool,
    on_accepted: G,
    refresh: F,
) -> Result<(), ContributionError>
where
    A: ReportApi,
    G: FnOnce(),
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    submit_vote(api, draft, authenticated).await?;
    on_accepted();
    refresh().await;
    Ok(())
}
