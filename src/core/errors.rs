//! Shared error types for the dashboard

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cyberdash operations.
///
/// Derivations (aggregation, filtering, pagination) never produce one of
/// these; they degrade to sentinel values instead. Errors only come from
/// loading data, reading configuration, or rejected view events.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be read or is not a JSON array
    #[error("Dataset error{}: {message}", location_suffix(.path))]
    Dataset {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Page size outside the supported set
    #[error("Unsupported page size {requested}; expected one of {allowed:?}")]
    InvalidPageSize {
        requested: usize,
        allowed: &'static [usize],
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a dataset error without a source path
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
            path: None,
        }
    }

    /// Create a dataset error with path context
    pub fn dataset_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Dataset {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

fn location_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_display() {
        let err = Error::dataset_at("expected a JSON array", "data/book.json");
        assert_eq!(
            err.to_string(),
            "Dataset error in data/book.json: expected a JSON array"
        );
        assert_eq!(
            Error::dataset("empty document").to_string(),
            "Dataset error: empty document"
        );
    }

    #[test]
    fn test_with_context() {
        let result: Result<()> = Err(Error::Configuration("bad color".into()));
        let err = result.context("loading .cyberdash.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading .cyberdash.toml: Configuration error: bad color"
        );
    }

    #[test]
    fn test_invalid_page_size_display() {
        let err = Error::InvalidPageSize {
            requested: 7,
            allowed: &[5, 10, 20],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported page size 7; expected one of [5, 10, 20]"
        );
    }
}
