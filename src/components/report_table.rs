//! Report Table Component
//!
//! Renders the row view-models of the current search.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::VoteSection;
use crate::context::use_app_context;
use crate::render::{build_rows, ReportRow, SubItemRow, VoteTarget};
use crate::store::{use_report_store, ReportStateStoreFields};

/// Actions reachable from inside the results container
enum RowAction {
    Vote(VoteTarget),
}

impl RowAction {
    /// Resolve a click to the action of the nearest tagged ancestor
    fn from_event(ev: &web_sys::MouseEvent) -> Option<Self> {
        let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
        let button = target.closest(".btn-vote").ok()??;
        let button = button.dyn_into::<web_sys::HtmlElement>().ok()?;
        let data = button.dataset();
        VoteTarget::from_data(data.get("itemKey"), data.get("voteStatus"), data.get("itemDesc"))
            .map(RowAction::Vote)
    }
}

/// Results table with a single delegated click listener
#[component]
pub fn ReportTable(#[prop(into)] on_vote: Callback<VoteTarget>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_report_store();

    let rows = Memo::new(move |_| store.items().with(|items| build_rows(items, ctx.authenticated())));

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(RowAction::Vote(target)) = RowAction::from_event(&ev) {
            on_vote.run(target);
        }
    };

    view! {
        <div id="resultados-container" on:click=on_click>
            <Show when=move || rows.with(|r| !r.is_empty())>
                <table>
                    <thead>
                        <tr>
                            <th>"Descrição do Item"</th>
                            <th>"Qtd."</th>
                            <th>"Valor Unitário"</th>
                            <th>"Modalidade"</th>
                            <th>"Link (Edital)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| view! { <ReportRowView row=row /> }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn ReportRowView(row: ReportRow) -> impl IntoView {
    let class = row.row_class();
    let notice = row.notice();
    let ReportRow {
        item_key,
        description,
        quantity,
        unit_price,
        modality,
        edital_url,
        tally,
        vote_buttons,
        sub_items,
        title,
        ..
    } = row;

    let description = match notice {
        Some(notice) => view! {
            "⚠️ "
            <strong>{description}</strong>
            <br />
            <small>{notice}</small>
        }
        .into_any(),
        None => view! { {description} }.into_any(),
    };

    view! {
        <tr class=class title=title data-item-key=item_key>
            <td>
                {description}
                <SubItemList items=sub_items />
                <VoteSection tally=tally buttons=vote_buttons />
            </td>
            <td>{quantity}</td>
            <td>{unit_price}</td>
            <td>{modality}</td>
            <td>
                <a href=edital_url target="_blank" rel="noopener noreferrer" class="link-pncp">
                    "Ver Edital"
                </a>
            </td>
        </tr>
    }
}

/// Contributed breakdown of a lot, if any
#[component]
fn SubItemList(items: Vec<SubItemRow>) -> impl IntoView {
    (!items.is_empty()).then(move || {
        view! {
            <ul class="sub-itens">
                {items.into_iter().map(|sub| view! {
                    <li>{sub.description} " · " {sub.quantity} " × " {sub.unit_price}</li>
                }).collect_view()}
            </ul>
        }
    })
}
