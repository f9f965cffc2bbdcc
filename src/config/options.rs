// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Where listings come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Published sheet (or any CSV endpoint) fetched over HTTP.
    Url(String),
    /// Local CSV file, re-read on every refresh.
    File(PathBuf),
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Url(s!(SHEET_CSV_URL))
    }
}

impl SourceKind {
    /// Human-readable label for status lines and logs.
    pub fn describe(&self) -> String {
        match self {
            SourceKind::Url(url) => url.clone(),
            SourceKind::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceKind,
    pub refresh_interval: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            refresh_interval: Duration::from_millis(AUTO_REFRESH_MS),
        }
    }
}

impl AppOptions {
    /// Fold command-line overrides into the defaults.
    /// A file wins over a URL when both are given.
    pub fn with_overrides(
        mut self,
        url: Option<String>,
        file: Option<PathBuf>,
        refresh_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = url {
            self.source = SourceKind::Url(url);
        }
        if let Some(path) = file {
            self.source = SourceKind::File(path);
        }
        if let Some(secs) = refresh_secs {
            // zero would spin the loader every frame
            self.refresh_interval = Duration::from_secs(secs.max(1));
        }
        self
    }
}
