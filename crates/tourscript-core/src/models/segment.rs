//! Script segment model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest unit of a script, representing a paragraph or beat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScriptSegment {
    /// Paragraph text with outer whitespace trimmed
    pub text: String,

    /// Position of the segment within its day (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Who delivers the line; never set by the parser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,

    /// Free-form production notes; never set by the parser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ScriptSegment {
    /// Create a segment with the given text and order and no annotations.
    pub fn new(text: impl Into<String>, order: u32) -> Self {
        Self {
            text: text.into(),
            order: Some(order),
            speaker: None,
            notes: None,
        }
    }
}
