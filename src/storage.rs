//! Persistence Adapter
//!
//! One localStorage slot holds the serialized task list. Reads fall back
//! to an empty list when the slot is absent or does not parse; writes
//! overwrite the whole slot.

use gloo_storage::{LocalStorage, Storage};

use ticklist_core::{from_records, to_records, Task, TaskRecord};

/// localStorage key for the serialized task list
const STORAGE_KEY: &str = "tasks";

/// Load tasks from the storage slot.
///
/// Absent or malformed content reads as an empty list, never an error.
pub fn load() -> Vec<Task> {
    let records: Vec<TaskRecord> = LocalStorage::get(STORAGE_KEY).unwrap_or_default();
    from_records(records)
}

/// Save the full task list, overwriting prior content.
///
/// Write failures (quota, serialization) are dropped; the in-memory list
/// stays authoritative for the session.
pub fn save(tasks: &[Task]) {
    let _ = LocalStorage::set(STORAGE_KEY, to_records(tasks));
}
