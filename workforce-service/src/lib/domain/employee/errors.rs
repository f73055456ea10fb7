use thiserror::Error;

/// Error for employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
