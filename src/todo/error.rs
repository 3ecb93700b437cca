use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The task named `{0}` doesn't exist")]
    NotFound(String),

    #[error("Todo capacity reached ({0} tasks)")]
    CapacityExceeded(usize),

    #[error("Task name `{name}` is too long (at most {max} bytes)")]
    NameTooLong { name: String, max: usize },

    #[error("Invalid task name: {0}")]
    InvalidName(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
