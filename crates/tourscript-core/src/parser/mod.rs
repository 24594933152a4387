//! Parsing pipeline from free text to a [`Route`].
//!
//! The pipeline runs in three passes over the input:
//!
//! ```text
//! raw text ──normalize──▶ dedented, trimmed text
//!          ──split_days──▶ (day number, title, body) per heading
//!          ──split_segments──▶ numbered paragraphs per day
//! ```
//!
//! Every function here is pure and total: any string produces a route,
//! and text without headings falls back to a single day numbered 1.
//!
//! # Examples
//!
//! ```rust
//! use tourscript_core::parser::build_route_from_text;
//!
//! let route = build_route_from_text("Day 1: Arrival\nLand and check-in.\n\nEvening walk.");
//! assert_eq!(route.days.len(), 1);
//! assert_eq!(route.days[0].title.as_deref(), Some("Arrival"));
//! assert_eq!(route.days[0].segments[1].text, "Evening walk.");
//! ```

pub mod headings;
pub mod segments;


use log::debug;

pub use headings::{clean_title, split_days, DaySection};
pub use segments::split_segments;

use crate::models::{DayPlan, Route};

/// Parse raw itinerary text into a structured [`Route`].
///
/// Day headings look like `Day 3: Old Town` (case-insensitive). Without any
/// heading the whole text becomes day 1. Inside each day, blank lines
/// separate segments. The returned route keeps `text` verbatim in
/// `source_text` and has no name.
pub fn build_route_from_text(text: &str) -> Route {
    let normalized = normalize(text);

    let days: Vec<DayPlan> = split_days(&normalized)
        .into_iter()
        .map(|section| {
            let segments = split_segments(section.body);
            debug!(
                "Day {} has {} segment(s)",
                section.day_index,
                segments.len()
            );
            DayPlan {
                day_index: section.day_index,
                title: section.title,
                segments,
                highlights: Vec::new(),
            }
        })
        .collect();

    Route {
        name: None,
        days,
        source_text: Some(text.to_string()),
    }
}

/// Remove shared leading indentation from every line, then trim the result.
pub fn normalize(text: &str) -> String {
    dedent(text).trim().to_string()
}

/// Remove the longest run of leading spaces and tabs common to all
/// non-blank lines.
///
/// Lines holding only spaces and tabs are emptied and do not count towards
/// the margin.
pub fn dedent(text: &str) -> String {
    let margin = common_margin(text);

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                &line[margin.len()..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_margin(text: &str) -> &str {
    let mut margin: Option<&str> = None;

    for line in text.split('\n').filter(|line| !is_blank(line)) {
        let indent = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
        if margin == Some("") {
            break;
        }
    }

    margin.unwrap_or("")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    // Indentation is ASCII, so byte positions are char boundaries.
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}
