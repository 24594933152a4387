//! Error types for the tourscript library.
//!
//! Parsing itself never fails; every variant here comes from loading content
//! or from the command-line surface around the parser.

use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Error type for loading and exporting script content.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The content path does not resolve to an existing file
    #[error("Content file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but is not valid UTF-8
    #[error("Content file '{}' is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScriptError {
        ScriptError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScriptError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when the error means the content file is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait ResultExt<T> {
    /// Map an I/O error into [`ScriptError`], keeping the offending path.
    ///
    /// `NotFound` I/O errors become [`ScriptError::NotFound`]; everything
    /// else becomes [`ScriptError::FileSystem`].
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ScriptError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ScriptError::FileSystem {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}

/// Result type alias for tourscript operations
pub type Result<T> = std::result::Result<T, ScriptError>;
