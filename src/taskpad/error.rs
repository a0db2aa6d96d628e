use thiserror::Error;

/// Validation errors for store operations.
///
/// All variants are non-fatal: a failed operation leaves the collection
/// untouched and the caller decides how to surface the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskpadError {
    #[error("task text is empty")]
    EmptyTask,

    #[error("a task with the same text already exists")]
    DuplicateTask,

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("todo not found: {0}")]
    NotFound(u64),
}

pub type Result<T> = std::result::Result<T, TaskpadError>;
