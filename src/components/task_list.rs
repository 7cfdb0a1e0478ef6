//! Task List View Component
//!
//! Renders the filtered view of the task list, one row per visible task.

use leptos::prelude::*;

use ticklist_core::ops;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The visible (filtered) task list
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let visible = move || ops::filtered(&store.tasks().get(), store.filter().get());

    view! {
        <div class="task-list">
            <For
                each=visible
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| {
                    view! { <TaskRow task=task /> }
                }
            />
        </div>
    }
}
