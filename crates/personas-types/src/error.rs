use thiserror::Error;

/// Rejected client input: required fields absent or of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid request body: {0}")]
    Malformed(String),
}

/// Errors related to company operations.
#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("company not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to persona operations.
#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("persona not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to message operations.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in personas-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("conflict: {0}")]
    Conflict(String),
}
