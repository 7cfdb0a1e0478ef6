//! Persisted Task Records
//!
//! The storage slot holds a JSON array of `{ text, completed }` objects.
//! There is no id field and no version field: ids are session-scoped and
//! reassigned sequentially on load, so the next id to allocate after a
//! load is simply the list length.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

/// Stored shape of a single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    pub completed: bool,
}

/// Project a task list into its persisted form
pub fn to_records(tasks: &[Task]) -> Vec<TaskRecord> {
    tasks
        .iter()
        .map(|task| TaskRecord {
            text: task.text.clone(),
            completed: task.completed,
        })
        .collect()
}

/// Rebuild a task list from persisted records, assigning fresh ids
pub fn from_records(records: Vec<TaskRecord>) -> Vec<Task> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| Task {
            id: i as TaskId,
            text: record.text,
            completed: record.completed,
        })
        .collect()
}
