//! Error types for listcascade.

use std::path::PathBuf;

/// Result type alias for listcascade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while refreshing a downstream component.
///
/// These are fail-stale errors: the component that hits one keeps its
/// previous key list or render and reports the failure instead of clearing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    /// The upstream-selected category is absent from the catalog.
    #[error("Category '{key}' is missing from the catalog")]
    MissingCategory { key: String },

    /// The upstream-selected item is absent from the catalog.
    #[error("Item '{key}' is missing from the catalog")]
    MissingItem { key: String },
}

impl RefreshError {
    /// The key whose lookup failed.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingCategory { key } | Self::MissingItem { key } => key,
        }
    }
}

/// Errors that can occur in listcascade.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector was asked to select a key it does not list.
    #[error("Unknown key selected: '{key}'")]
    UnknownKeySelected { key: String },

    /// A downstream refresh failed.
    #[error(transparent)]
    Refresh(#[from] RefreshError),

    /// Two categories share a key.
    #[error("Duplicate category key '{key}'")]
    DuplicateCategory { key: String },

    /// Two items share a key.
    #[error("Duplicate item key '{key}'")]
    DuplicateItem { key: String },

    /// A fixture or configuration document could not be parsed.
    #[error("Failed to parse {format}: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an unknown-key error.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKeySelected { key: key.into() }
    }

    /// Create a parse error.
    pub fn parse(format: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
