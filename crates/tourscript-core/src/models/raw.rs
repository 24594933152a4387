//! Raw input content before parsing.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text read from a script file, untouched by the parser.
///
/// Only `text` flows into the pipeline; `path` is kept so callers can report
/// where a route came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RawContent {
    /// Path the content was loaded from, as given by the caller
    pub path: String,

    /// Full file contents
    pub text: String,
}

impl RawContent {
    /// Create raw content from a path and its text.
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}
