//! Error types for catalogue loading and configuration.
//!
//! Transport lookups never fail; these errors only come from reading
//! external inputs at startup.

use std::path::PathBuf;

/// Result type for fallible library operations.
pub type TransitResult<T> = Result<T, TransitError>;

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// A file could not be read.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON input or output failed, typically a malformed settlement catalogue.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML of the expected shape.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Parsed input violates a catalogue or configuration invariant.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TransitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
