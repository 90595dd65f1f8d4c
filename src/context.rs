//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::api::{HttpApi, SearchFilter};
use crate::config::PageConfig;
use crate::controller::{self, RequestFence};
use crate::store::{store_begin_search, store_finish_search, ReportStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page settings, read once at start
    config: StoredValue<PageConfig>,
    /// Current contents of the filter form
    pub filter: RwSignal<SearchFilter>,
    /// Latest search ticket
    fence: StoredValue<RequestFence>,
    store: ReportStore,
}

impl AppContext {
    pub fn new(config: PageConfig, store: ReportStore) -> Self {
        Self {
            config: StoredValue::new(config),
            filter: RwSignal::new(SearchFilter::default()),
            fence: StoredValue::new(RequestFence::default()),
            store,
        }
    }

    pub fn authenticated(&self) -> bool {
        self.config.with_value(|c| c.authenticated)
    }

    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config.get_value())
    }

    /// Run a search with the current filter and publish the result.
    /// A response is dropped when a newer search was started meanwhile.
    pub async fn refresh(self) {
        let mut ticket = 0;
        self.fence.update_value(|fence| ticket = fence.issue());
        store_begin_search(&self.store);

        let filter = self.filter.get_untracked();
        let outcome = controller::run_search(&self.api(), &filter).await;

        if !self.fence.with_value(|fence| fence.is_current(ticket)) {
            warn!("[SEARCH] dropping stale response #{}", ticket);
            return;
        }
        store_finish_search(&self.store, outcome);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
