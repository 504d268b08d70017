use thiserror::Error;

/// Errors surfaced by the domain services
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was missing or blank
    #[error("{0}")]
    Validation(String),

    /// The referenced record or selection does not exist
    #[error("{0}")]
    NotFound(String),

    /// A bulk import failed part way and was rolled back
    #[error("Import failed")]
    ImportFailed(anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
