//! Markdown formatting for routes and summaries.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! [`collections`] adds newtype wrappers for groups of models. All output is
//! markdown so the CLI can render it richly or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Display impls  │    │    Markdown     │
//! │ (Route, DayPlan)│───▶│   & Wrappers    │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tourscript_core::{models::RouteSummary, parser::build_route_from_text};
//!
//! let route = build_route_from_text("Day 1: Arrival\nLand.\n\nWalk.")
//!     .with_name("Weekend");
//!
//! let output = format!("{}", route);
//! assert!(output.starts_with("# Weekend\n"));
//! assert!(output.contains("## Day 1: Arrival"));
//! assert!(output.contains("2. Walk."));
//!
//! let summary = RouteSummary::from(&route);
//! assert!(format!("{}", summary).contains("- Segments: 2"));
//! ```

pub mod collections;
pub mod models;

pub use collections::Days;
