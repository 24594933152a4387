//! Core library for turning itinerary scripts into structured routes.
//!
//! A tour-guide script is free text: day headings such as `Day 2: Old Town`
//! followed by paragraphs. This crate splits that text into a [`Route`] of
//! [`DayPlan`]s, each holding numbered [`ScriptSegment`]s.
//!
//! - [`parser`]: the pure text-to-route pipeline
//! - [`models`]: the route data model
//! - [`loader`]: reading script files from disk
//! - [`display`]: markdown formatting of routes and summaries
//! - [`error`]: errors raised while loading content
//!
//! # Quick Start
//!
//! ```rust
//! use tourscript_core::build_route_from_text;
//!
//! let script = "
//!     Day 1: Arrival
//!     Land and check-in.
//!
//!     Evening walk.
//!
//!     Day 2: City Tour
//!     Morning coffee stop.
//! ";
//!
//! let route = build_route_from_text(script);
//! assert_eq!(route.days.len(), 2);
//! assert_eq!(route.days[1].title.as_deref(), Some("City Tour"));
//! assert_eq!(route.source_text.as_deref(), Some(script));
//!
//! for day in &route.days {
//!     for segment in &day.segments {
//!         println!("Day {} #{:?}: {}", day.day_index, segment.order, segment.text);
//!     }
//! }
//! ```

pub mod display;
pub mod error;
pub mod loader;
pub mod models;
pub mod parser;

// Re-export commonly used types
pub use display::Days;
pub use error::{Result, ScriptError};
pub use loader::{load_content, parse_file};
pub use models::{DayPlan, DaySummary, Highlight, RawContent, Route, RouteSummary, ScriptSegment};
pub use parser::build_route_from_text;
