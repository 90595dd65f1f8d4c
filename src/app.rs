//! Licitação Report App
//!
//! Search form, results table and contribution modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContributionModal, ReportTable, SearchForm, StatusBanner};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::dialog::alert;
use crate::modal::ModalState;
use crate::render::VoteTarget;
use crate::store::ReportState;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    // State
    let store = Store::new(ReportState::default());
    let ctx = AppContext::new(config, store);
    let modal = RwSignal::new(ModalState::Closed);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Vote buttons only render for signed-in users, but the modal checks again
    let open_vote = move |target: VoteTarget| match modal.get_untracked().open(target, ctx.authenticated()) {
        Ok(next) => modal.set(next),
        Err(err) => alert(&err.to_string()),
    };

    view! {
        <main class="app-layout">
            <h1>"Relatório de Licitações"</h1>

            <SearchForm />
            <StatusBanner />
            <ReportTable on_vote=open_vote />
            <ContributionModal state=modal />
        </main>
    }
}
