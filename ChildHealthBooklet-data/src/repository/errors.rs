use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Filesystem error while writing an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
