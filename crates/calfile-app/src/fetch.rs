//! Reading calendar documents from local files or HTTP(S) URLs.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AppResult, FetchError};

/// Returns `true` when `source` should be downloaded rather than read from disk.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// ## Summary
/// Loads the text of a calendar document.
///
/// HTTP(S) sources are downloaded. Anything else is a file path, resolved
/// against `base_path` unless it is already absolute.
///
/// ## Errors
/// - `FetchError::NotFound` if the file does not exist.
/// - `FetchError::Io` if the file cannot be read as UTF-8 text.
/// - `FetchError::Http` on transport failures or a non-success status.
#[tracing::instrument(skip(base_path), fields(base_path = %base_path.display()))]
pub async fn fetch(source: &str, base_path: &Path) -> AppResult<String> {
    let text = if is_remote(source) {
        fetch_remote(source.trim()).await?
    } else {
        fetch_local(source, base_path).await?
    };

    tracing::debug!(bytes = text.len(), "Calendar source loaded");
    Ok(text)
}

async fn fetch_remote(url: &str) -> Result<String, FetchError> {
    tracing::debug!(url, "Downloading calendar");

    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}

async fn fetch_local(source: &str, base_path: &Path) -> Result<String, FetchError> {
    // `join` replaces the base when `source` is absolute.
    let path = base_path.join(source);
    tracing::debug!(path = %path.display(), "Reading calendar file");

    tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound(path.clone()),
            _ => FetchError::Io {
                path: path.clone(),
                source: e,
            },
        })
}
