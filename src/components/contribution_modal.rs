//! Contribution Modal Component
//!
//! Dialog collecting a reference link and comment for a price vote.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::controller::{self, StatusMessage, THANKS_MESSAGE};
use crate::dialog::alert;
use crate::modal::{ModalEvent, ModalState, VoteDraft};
use crate::store::{store_show_status_if_clear, use_report_store};

fn dispatch(state: RwSignal<ModalState>, event: ModalEvent) {
    state.update(|s| *s = std::mem::take(s).apply(event));
}

fn textarea_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

/// Reactive read of one draft field, empty while closed
fn draft_field(state: RwSignal<ModalState>, f: fn(&VoteDraft) -> String) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.draft().map(f).unwrap_or_default())
}

/// Vote modal; visible whenever `state` is not `Closed`
#[component]
pub fn ContributionModal(state: RwSignal<ModalState>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_report_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = state.with_untracked(|s| match s {
            ModalState::Open(draft) => Some(draft.clone()),
            _ => None,
        }) else {
            return;
        };
        if let Err(err) = draft.to_request() {
            alert(&err.to_string());
            return;
        }

        dispatch(state, ModalEvent::SubmitStarted);
        spawn_local(async move {
            let api = ctx.api();
            let result = controller::submit_and_refresh(
                &api,
                &draft,
                ctx.authenticated(),
                move || dispatch(state, ModalEvent::SubmitSucceeded),
                move || ctx.refresh(),
            )
            .await;

            match result {
                Ok(()) => store_show_status_if_clear(&store, StatusMessage::success(THANKS_MESSAGE)),
                Err(err) => {
                    warn!("[VOTE] submit failed: {:?}", err);
                    dispatch(state, ModalEvent::SubmitFailed);
                    alert(&err.to_string());
                }
            }
        });
    };

    view! {
        <div
            id="contribution-modal"
            class="modal-backdrop"
            class:hidden=move || !state.with(|s| s.is_visible())
            on:click=move |_| dispatch(state, ModalEvent::Dismissed)
        >
            <div class="modal-content" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <button
                    type="button"
                    class="modal-close-btn"
                    on:click=move |_| dispatch(state, ModalEvent::Dismissed)
                >
                    "✕"
                </button>
                <h2>"Contribuir com avaliação de preço"</h2>
                <p id="modal-item-descricao">{draft_field(state, |d| d.item_desc.clone())}</p>

                <form id="contribution-form" on:submit=on_submit>
                    <input type="hidden" id="modal-item-key" prop:value=draft_field(state, |d| d.item_key.clone()) />
                    <input
                        type="hidden"
                        id="modal-item-status"
                        prop:value=draft_field(state, |d| d.status.as_str().to_string())
                    />

                    <label>
                        "Link de referência (obrigatório)"
                        <input
                            type="url"
                            id="modal-link"
                            placeholder="https://..."
                            prop:value=draft_field(state, |d| d.link.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.edit(|d| d.link = value));
                            }
                        />
                    </label>

                    <label>
                        "Comentário (opcional)"
                        <textarea
                            id="modal-comment"
                            rows="3"
                            prop:value=draft_field(state, |d| d.comment.clone())
                            on:input=move |ev| {
                                let value = textarea_value(&ev);
                                state.update(|s| s.edit(|d| d.comment = value));
                            }
                        ></textarea>
                    </label>

                    <button
                        type="submit"
                        id="modal-submit"
                        prop:disabled=move || state.with(|s| s.is_submitting())
                    >
                        {move || state.with(|s| s.submit_label())}
                    </button>
                </form>
            </div>
        </div>
    }
}
