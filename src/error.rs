//! Error type shared by the preview core and the browser bridge

use thiserror::Error;

/// Errors produced while loading the catalog or talking to the host page.
///
/// None of these are fatal: the worst outcome is an editor without a loaded
/// webfont, so callers log them and carry on.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The catalog request could not be issued or returned a bad status
    #[error("failed to fetch font catalog: {0}")]
    CatalogFetch(String),

    /// A JSON document (catalog, config, stored flag) did not parse
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Durable key/value storage was unavailable or rejected a write
    #[error("storage error: {0}")]
    Storage(String),

    /// A DOM call on the host page failed
    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, PreviewError>;
