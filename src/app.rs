//! Ticklist Frontend App
//!
//! Root component: restores persisted tasks, owns the store, lays out the
//! page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterSelect, NewTaskForm, TaskListView};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Load once at startup; every later mutation saves immediately
    let state = AppState::load();
    web_sys::console::log_1(&format!("[APP] Restored {} tasks", state.tasks.len()).into());

    let store: AppStore = Store::new(state);
    provide_context(store);

    view! {
        <main class="app-layout">
            <h1>"Ticklist"</h1>

            <NewTaskForm />

            <FilterSelect />

            <TaskListView />

            <p class="task-count">
                {move || {
                    let tasks = store.tasks().get();
                    let done = tasks.iter().filter(|task| task.completed).count();
                    format!("{} tasks, {} done", tasks.len(), done)
                }}
            </p>
        </main>
    }
}
