//! Vote Section Component
//!
//! Tally of registered votes and, for signed-in users, the vote buttons.

use leptos::prelude::*;

use crate::models::VoteStatus;
use crate::render::{VoteTally, VoteTarget};

/// Vote counts plus one button per votable status.
///
/// Buttons carry their target in `data-*` attributes; clicks are handled by
/// the delegated listener on the results container.
#[component]
pub fn VoteSection(tally: VoteTally, buttons: Vec<VoteTarget>) -> impl IntoView {
    let counts = VoteStatus::VOTABLE
        .into_iter()
        .map(|status| view! { <span>{status.icon()} " " {tally.get(status)}</span> })
        .collect_view();

    let buttons = (!buttons.is_empty()).then(move || {
        view! {
            <div class="vote-buttons">
                {buttons.into_iter().map(|b| {
                    let label = b.status.button_label();
                    view! {
                        <button
                            type="button"
                            class="btn-vote"
                            data-item-key=b.item_key
                            data-vote-status=b.status.as_str()
                            data-item-desc=b.item_desc
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        }
    });

    view! {
        <div class="vote-section">
            <div class="vote-counts">{counts}</div>
            {buttons}
        </div>
    }
}
