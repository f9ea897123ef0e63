use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("duplicate project title '{title}'")]
    DuplicateTitle { title: String },
    #[error("project '{title}' has an invalid url '{url}': {source}")]
    InvalidUrl {
        title: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to read catalog file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported catalog format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raised when user-facing text does not name a known tag, sort order or view mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
