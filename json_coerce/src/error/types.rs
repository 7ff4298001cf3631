//! Primary error enum for option loading.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while loading coercion options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoerceError {
    /// Error while extracting options from figment providers.
    #[error("Failed to gather coercion options: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// An options blob had the wrong shape.
    #[error("Invalid coercion options: {message}")]
    InvalidOptions {
        /// Human-readable explanation of the problem.
        message: String,
    },
}

impl CoerceError {
    /// Build an [`CoerceError::InvalidOptions`] from any message.
    #[must_use]
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}

/// Result alias used by the option loaders.
pub type CoerceResult<T> = Result<T, CoerceError>;
