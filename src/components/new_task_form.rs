//! New Task Form Component
//!
//! Text input plus add button. Empty input is rejected with a blocking
//! notice and no state change; the input keeps its content.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_task, use_app_store};

/// Form for adding a task
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_task(&store, &new_text.get()) {
            Ok(()) => set_new_text.set(String::new()),
            Err(err) => {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(&err.to_string());
                }
            }
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
