use thiserror::Error;

use fieldservice_core::{DomainError, PersistenceError};

pub type RecurringResult<T> = Result<T, RecurringError>;

/// Failure of a linker operation. Both kinds are passed through unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurringError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
