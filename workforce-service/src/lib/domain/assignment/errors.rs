use thiserror::Error;

/// Error for assignment operations
#[derive(Debug, Clone, Error)]
pub enum AssignmentError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
