//! Day plan model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Highlight, ScriptSegment};

/// A day in the route containing a sequence of script segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DayPlan {
    /// Day number taken from the heading (1 when the text has no headings)
    pub day_index: u64,

    /// Heading text following the day number, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Segments in textual order
    #[serde(default)]
    pub segments: Vec<ScriptSegment>,

    /// Highlights attached by downstream tooling
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Highlight>,
}

impl DayPlan {
    /// Create an empty day with the given index and title.
    pub fn new(day_index: u64, title: Option<String>) -> Self {
        Self {
            day_index,
            title,
            segments: Vec::new(),
            highlights: Vec::new(),
        }
    }

    /// Find the segment whose `order` equals `order`.
    pub fn segment(&self, order: u32) -> Option<&ScriptSegment> {
        self.segments
            .iter()
            .find(|segment| segment.order == Some(order))
    }

    /// Number of segments in the day.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
