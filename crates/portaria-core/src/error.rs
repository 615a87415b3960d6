use thiserror::Error;

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
