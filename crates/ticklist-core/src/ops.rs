//! Pure Task List Operations
//!
//! Copy-on-write: every operation takes the current list as a slice and
//! returns a new list, leaving the input untouched. The UI store applies
//! the result and persists it; nothing here touches storage or the DOM.

use crate::error::{TaskError, TaskResult};
use crate::filter::Filter;
use crate::task::{Task, TaskId};

/// Append a new incomplete task with the given id.
///
/// The text is trimmed first; text that trims to nothing is rejected so
/// the caller can keep its current list unchanged.
pub fn add(tasks: &[Task], id: TaskId, text: &str) -> TaskResult<Vec<Task>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    let mut next = tasks.to_vec();
    next.push(Task::new(id, trimmed));
    Ok(next)
}

/// Remove the task with the given id, preserving the order of the rest.
///
/// Unknown id is a no-op.
pub fn remove(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Flip the completion flag of the task with the given id.
///
/// All other tasks are unchanged by value. Unknown id is a no-op.
pub fn toggle(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// The order-preserving subsequence visible under `filter`.
///
/// This is a view: the underlying list is never replaced by its result.
pub fn filtered(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task.completed))
        .cloned()
        .collect()
}
