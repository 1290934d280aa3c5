use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a calendar document from its source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Calendar file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to download calendar: {0}")]
    Http(#[from] reqwest::Error),
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    FetchError(#[from] FetchError),

    #[error(transparent)]
    RfcError(#[from] calfile_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] calfile_core::error::CoreError),

    #[error("Failed to serialize calendar: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to render calendar: {0}")]
    RenderError(#[from] std::fmt::Error),
}

impl From<calfile_rfc::rfc::ical::parse::ParseError> for AppError {
    fn from(e: calfile_rfc::rfc::ical::parse::ParseError) -> Self {
        Self::RfcError(e.into())
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
