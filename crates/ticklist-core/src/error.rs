//! Core error type for task operations.

/// Common result type for task operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors produced by task list operations
///
/// Nothing here is fatal: validation failures surface as a user-facing
/// notice and leave the list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task text was empty after trimming
    EmptyText,
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskError::EmptyText => write!(f, "Task text must not be empty"),
        }
    }
}

impl std::error::Error for TaskError {}
