use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown {field}")]
    ConstraintViolation { field: String },
    #[error("Internal error: {0}")]
    Internal(String),
}
