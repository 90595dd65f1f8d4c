//! Status Banner Component

use leptos::prelude::*;

use crate::store::{use_report_store, ReportStateStoreFields};

/// Success/error message of the last action
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_report_store();

    view! {
        <div
            id="status-message"
            class=move || store.status().with(|s| s.as_ref().map(|m| m.kind.css_class()).unwrap_or(""))
        >
            {move || store.status().with(|s| s.as_ref().map(|m| m.text.clone()))}
        </div>
    }
}
