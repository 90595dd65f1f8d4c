//! Search Form Component
//!
//! Filter inputs (CNPJ, period) and the loading indicator.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_report_store, ReportStateStoreFields};

/// Filter form driving report searches
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_report_store();
    let filter = ctx.filter;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(ctx.refresh());
    };

    view! {
        <form id="filtro-form" class="filter-form" on:submit=on_submit>
            <label>
                "CNPJ do órgão"
                <input
                    type="text"
                    name="cnpj"
                    placeholder="00.000.000/0000-00"
                    required=true
                    prop:value=move || filter.with(|f| f.cnpj.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.cnpj = value);
                    }
                />
            </label>
            <label>
                "Data inicial"
                <input
                    type="date"
                    name="data_inicio"
                    required=true
                    prop:value=move || filter.with(|f| f.data_inicio.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.data_inicio = value);
                    }
                />
            </label>
            <label>
                "Data final"
                <input
                    type="date"
                    name="data_fim"
                    required=true
                    prop:value=move || filter.with(|f| f.data_fim.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.data_fim = value);
                    }
                />
            </label>
            <button id="btn-buscar" type="submit" prop:disabled=move || store.loading().get()>
                "Buscar"
            </button>
        </form>

        <div id="loading" class="loading" class:hidden=move || !store.loading().get()>
            "Buscando..."
        </div>
    }
}
