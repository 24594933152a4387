//! Day heading detection.
//!
//! A heading is a line starting with `day` (any case), whitespace, and a run
//! of decimal digits from any script (`Day 3`, `Day ３`). Whatever follows
//! the digits on that line is the raw title.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::{Captures, Regex};

/// Matches `Day <n><rest of line>` at the start of any line.
static DAY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^day\s+(\d+)(.*)$").expect("day heading pattern is valid")
});

/// A single Unicode decimal digit (general category Nd).
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("decimal digit pattern is valid"));

/// Characters stripped from the left edge of a raw title.
const TITLE_SEPARATORS: &[char] = &[':', '\u{ff1a}', '-'];

/// One day's worth of normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection<'a> {
    /// Day number parsed from the heading
    pub day_index: u64,
    /// Cleaned heading title
    pub title: Option<String>,
    /// Trimmed text between this heading and the next
    pub body: &'a str,
}

/// Split normalized text into one section per day heading.
///
/// Text without any heading becomes a single section for day 1 carrying the
/// whole text. Sections come back in the order the headings appear; day
/// numbers are neither sorted nor deduplicated.
pub fn split_days(text: &str) -> Vec<DaySection<'_>> {
    let headings: Vec<Captures<'_>> = DAY_HEADING.captures_iter(text).collect();

    if headings.is_empty() {
        debug!("No day headings found, treating text as a single day");
        return vec![DaySection {
            day_index: 1,
            title: None,
            body: text,
        }];
    }

    headings
        .iter()
        .enumerate()
        .map(|(idx, caps)| {
            let start = caps.get(0).map_or(0, |m| m.end());
            let end = headings
                .get(idx + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());

            DaySection {
                day_index: parse_day_number(caps.get(1).map_or("", |m| m.as_str())),
                title: clean_title(caps.get(2).map_or("", |m| m.as_str())),
                body: text[start..end].trim(),
            }
        })
        .collect()
}

/// Strip leading separators and whitespace from a raw heading title.
///
/// Returns `None` when nothing is left.
pub fn clean_title(raw: &str) -> Option<String> {
    let title = raw.trim_start_matches(TITLE_SEPARATORS).trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

fn parse_day_number(digits: &str) -> u64 {
    let parsed = digits.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c))
    });

    parsed.unwrap_or_else(|| {
        warn!("Day number {digits} does not fit in u64, clamping to {}", u64::MAX);
        u64::MAX
    })
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Numeric value of a decimal digit from any script.
///
/// Nd characters come in contiguous runs of ten starting at zero, and
/// adjacent runs are back to back, so the value is the offset from the
/// start of the enclosing digit block modulo ten.
fn digit_value(c: char) -> u64 {
    if let Some(value) = c.to_digit(10) {
        return u64::from(value);
    }

    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    u64::from((u32::from(c) - start) % 10)
}
