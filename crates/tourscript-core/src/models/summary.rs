//! Route summary types and functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DayPlan, Route};

/// Per-day counts for a route summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DaySummary {
    /// Day number from the heading
    pub day_index: u64,
    /// Heading title, if any
    pub title: Option<String>,
    /// Number of segments in the day
    pub segment_count: u32,
    /// Number of highlights in the day
    pub highlight_count: u32,
}

/// Summary information about a route with segment statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RouteSummary {
    /// Route name
    pub name: Option<String>,
    /// Total number of days
    pub total_days: u32,
    /// Total number of segments across all days
    pub total_segments: u32,
    /// One entry per day, in route order
    pub days: Vec<DaySummary>,
}

impl From<&DayPlan> for DaySummary {
    fn from(day: &DayPlan) -> Self {
        Self {
            day_index: day.day_index,
            title: day.title.clone(),
            segment_count: day.segments.len() as u32,
            highlight_count: day.highlights.len() as u32,
        }
    }
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        let days: Vec<DaySummary> = route.days.iter().map(DaySummary::from).collect();
        let total_segments = days.iter().map(|day| day.segment_count).sum();

        Self {
            name: route.name.clone(),
            total_days: days.len() as u32,
            total_segments,
            days,
        }
    }
}
