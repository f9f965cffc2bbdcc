// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// The one failure the viewer handles explicitly: the listing source could
/// not be fetched. Parsing never fails; bad rows degrade to empty fields.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Used by in-memory sources (tests, scripted demos).
    #[error("{0}")]
    Other(String),
}
