use thiserror::Error;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {kind} {id}")]
    RecordNotFound { kind: &'static str, id: uuid::Uuid },

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error(transparent)]
    CoreError(#[from] portaria_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
