//! Highlight model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DayPlan, ScriptSegment};

/// Notable moment to emphasize in a video cut or thumbnail.
///
/// A highlight points at a segment by its `order` value rather than owning
/// it, so a stale `segment_order` simply resolves to nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Highlight {
    /// What makes the moment worth highlighting
    pub description: String,

    /// Position of the highlight among the day's highlights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// `order` of the segment this highlight refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_order: Option<u32>,
}

impl Highlight {
    /// Look up the referenced segment in `day`.
    pub fn resolve<'a>(&self, day: &'a DayPlan) -> Option<&'a ScriptSegment> {
        self.segment_order.and_then(|order| day.segment(order))
    }
}
