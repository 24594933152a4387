//! Blank-line segment splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ScriptSegment;

/// A newline, any run of whitespace, and another newline: one or more blank
/// lines between paragraphs.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// Split a day's body into segments numbered from 1.
///
/// Chunks are trimmed and empty chunks are skipped, so the orders stay
/// contiguous.
pub fn split_segments(body: &str) -> Vec<ScriptSegment> {
    BLANK_LINES
        .split(body)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .zip(1..)
        .map(|(chunk, order)| ScriptSegment::new(chunk, order))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[ScriptSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_body_has_no_segments() {
        assert!(split_segments("").is_empty());
        assert!(split_segments("  \n\n \t\n").is_empty());
    }

    #[test]
    fn test_single_newlines_stay_in_one_segment() {
        let segments = split_segments("Line one\nline two");
        assert_eq!(texts(&segments), vec!["Line one\nline two"]);
    }

    #[test]
    fn test_runs_of_blank_lines_split_once() {
        let segments = split_segments("First\n\n\n   \n\t\nSecond");
        assert_eq!(texts(&segments), vec!["First", "Second"]);
        assert_eq!(segments[1].order, Some(2));
    }

    #[test]
    fn test_orders_are_contiguous() {
        let segments = split_segments("\n\nA\n\n\n\nB\n\nC\n\n");
        let orders: Vec<Option<u32>> = segments.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_crlf_blank_lines_split() {
        let segments = split_segments("First\r\n\r\nSecond");
        assert_eq!(texts(&segments), vec!["First", "Second"]);
    }

    #[test]
    fn test_segments_carry_no_annotations() {
        let segments = split_segments("Hello there.");
        assert_eq!(segments[0].speaker, None);
        assert_eq!(segments[0].notes, None);
    }
}
