//! Data models for routes, days, and script segments.
//!
//! These are passive value types: the parser in [`crate::parser`] creates
//! them and nothing in this crate mutates them afterwards. Display
//! implementations live in [`crate::display::models`].
//!
//! ```text
//! Route
//! └── DayPlan (one per day heading)
//!     ├── ScriptSegment (one per blank-line-delimited paragraph)
//!     └── Highlight (points at a segment by its order)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tourscript_core::models::{DayPlan, Highlight, Route, ScriptSegment};
//!
//! let mut day = DayPlan::new(1, Some("Arrival".to_string()));
//! day.segments.push(ScriptSegment::new("Land and check-in.", 1));
//! day.highlights.push(Highlight {
//!     description: "First view of the harbour".to_string(),
//!     order: Some(1),
//!     segment_order: Some(1),
//! });
//!
//! let route = Route {
//!     days: vec![day],
//!     ..Route::default()
//! }
//! .with_name("Harbour Weekend");
//!
//! let highlight = &route.days[0].highlights[0];
//! assert_eq!(
//!     highlight.resolve(&route.days[0]).map(|s| s.text.as_str()),
//!     Some("Land and check-in.")
//! );
//! ```

pub mod day;
pub mod highlight;
pub mod raw;
pub mod route;
pub mod segment;
pub mod summary;


pub use day::DayPlan;
pub use highlight::Highlight;
pub use raw::RawContent;
pub use route::Route;
pub use segment::ScriptSegment;
pub use summary::{DaySummary, RouteSummary};
