//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutations go
//! through the helpers here: compute the new list with the pure ops,
//! persist it, then write it into the store.

use leptos::prelude::*;
use reactive_stores::Store;

use ticklist_core::{ops, Filter, Task, TaskId, TaskResult};

use crate::storage;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current task list, insertion order is display order
    pub tasks: Vec<Task>,
    /// Active view filter (UI-only, never persisted)
    pub filter: Filter,
    /// Next task id to allocate
    pub next_id: TaskId,
}

impl AppState {
    /// Restore state from the persistence slot
    pub fn load() -> Self {
        let tasks = storage::load();
        Self {
            next_id: tasks.len() as TaskId,
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Persist the new task list and make it current
fn store_commit(store: &AppStore, tasks: Vec<Task>) {
    storage::save(&tasks);
    store.tasks().set(tasks);
}

/// Add a task from raw input text; allocates the next id on success
pub fn store_add_task(store: &AppStore, text: &str) -> TaskResult<()> {
    let id = store.next_id().get_untracked();
    let next = ops::add(&store.tasks().get_untracked(), id, text)?;
    store.next_id().set(id + 1);
    store_commit(store, next);
    Ok(())
}

/// Remove a task from the store by id
pub fn store_remove_task(store: &AppStore, id: TaskId) {
    let next = ops::remove(&store.tasks().get_untracked(), id);
    store_commit(store, next);
}

/// Toggle a task's completion in the store by id
pub fn store_toggle_task(store: &AppStore, id: TaskId) {
    let next = ops::toggle(&store.tasks().get_untracked(), id);
    store_commit(store, next);
}

/// Switch the view filter; the task list and storage are untouched
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}
