//! Task Entity
//!
//! A single to-do item: short text plus a completion flag.

/// Stable task identifier, assigned when the task is created.
///
/// Identity is the id, not the position in the list: rows reference tasks
/// by id, so a filtered view can never misaddress a task.
pub type TaskId = u32;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier (session-scoped, never persisted)
    pub id: TaskId,
    /// Task text content (non-empty, trimmed at creation)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(1, "Test task");
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Test task");
        assert!(!task.completed);
    }
}
