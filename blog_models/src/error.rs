use thiserror::Error as ThisError;

use crate::validation::ValidationError;

/// Result type that uses [`crate::Error`].
pub type Result<T> = std::result::Result<T, crate::Error>;

/// Errors returned by blog record operations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A field assignment was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The database layer failed.
    #[error("Database error {0}")]
    Database(#[from] butane::Error),
}

impl Error {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            Error::Database(_) => None,
        }
    }
}
