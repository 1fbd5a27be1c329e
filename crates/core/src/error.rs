//! Domain and persistence error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by repositories and message logs.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// preconditions). Storage failures are reported as [`PersistenceError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was called with input it does not accept
    /// (e.g. a singleton operation invoked on several records).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Failure reported by a storage collaborator (create / search / write).
///
/// These are surfaced to callers unmodified; nothing in the domain layer
/// retries or compensates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The referenced record does not exist.
    #[error("{model} record {id} not found")]
    NotFound { model: &'static str, id: String },

    /// A required field was left unset.
    #[error("{model}: required field '{field}' is not set")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    /// A unique constraint rejected the write.
    #[error("{model}: a record with {field} = {value} already exists")]
    UniqueViolation {
        model: &'static str,
        field: &'static str,
        value: String,
    },

    /// The acting principal lacks the permission for this access.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The storage backend could not serve the request.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    pub fn not_found(model: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            model,
            id: id.to_string(),
        }
    }

    pub fn missing_field(model: &'static str, field: &'static str) -> Self {
        Self::MissingField { model, field }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
