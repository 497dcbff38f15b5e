use thiserror::Error;

use super::{HttpError, SourceError, ValidationError};

/// Exit status for usage, validation and startup failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status when the target list cannot be read.
pub const EXIT_SOURCE_READ: u8 = 2;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Target source error: {0}")]
    Source(#[from] SourceError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    /// Process exit status for this error.
    ///
    /// A target list that cannot be read gets its own status so callers can
    /// tell it apart from a usage mistake.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            AppError::Source(_) => EXIT_SOURCE_READ,
            AppError::Io { .. }
            | AppError::Clap { .. }
            | AppError::Validation(_)
            | AppError::Http(_) => EXIT_FAILURE,
        }
    }
}
