//! Filter Select Component
//!
//! Dropdown with the three view filters. Changing it only re-renders the
//! list; the task list itself is untouched.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use ticklist_core::Filter;

use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Filter options in display order
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Completed, "Completed"),
    (Filter::Incomplete, "Incomplete"),
];

/// Dropdown selecting the active view filter
#[component]
pub fn FilterSelect() -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="filter-select"
            on:change=move |ev| {
                let target = ev.target().unwrap();
                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                store_set_filter(&store, Filter::from_str(&select.value()));
            }
        >
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                view! {
                    <option
                        value=filter.as_str()
                        selected=move || store.filter().get() == filter
                    >
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
