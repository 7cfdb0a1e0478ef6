//! Task Row Component
//!
//! A single visible task. Clicking the row toggles completion; the delete
//! button removes the task without also triggering the row toggle.

use leptos::prelude::*;

use ticklist_core::Task;

use crate::store::{store_remove_task, store_toggle_task, use_app_store};

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let text = task.text.clone();

    view! {
        <div
            class=move || if completed { "task-row completed" } else { "task-row" }
            on:click=move |_| store_toggle_task(&store, id)
        >
            <span class="task-text">{text}</span>

            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_remove_task(&store, id);
                }
            >
                "×"
            </button>
        </div>
    }
}
