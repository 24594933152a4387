//! Route model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::DayPlan;

/// Structured itinerary script for a full tour video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Route {
    /// Display name of the route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Days in the order their headings appear in the source
    #[serde(default)]
    pub days: Vec<DayPlan>,

    /// The unmodified input the route was parsed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

impl Route {
    /// Return the route with its name set.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Total number of segments across all days.
    pub fn segment_count(&self) -> usize {
        self.days.iter().map(DayPlan::segment_count).sum()
    }

    /// First day whose `day_index` matches.
    pub fn day(&self, day_index: u64) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.day_index == day_index)
    }
}
