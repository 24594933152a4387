//! Display implementations for domain models.
//!
//! Every model renders as markdown so the CLI can hand the output straight
//! to the terminal renderer.

use std::fmt;

use crate::models::{DayPlan, DaySummary, Highlight, Route, RouteSummary, ScriptSegment};

/// Indent for continuation lines under a numbered list item.
const LIST_INDENT: &str = "   ";

/// `Day 3` or `Day 3: Old Town`.
fn write_day_label(
    f: &mut fmt::Formatter<'_>,
    day_index: u64,
    title: Option<&str>,
) -> fmt::Result {
    match title {
        Some(title) => write!(f, "Day {day_index}: {title}"),
        None => write!(f, "Day {day_index}"),
    }
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

impl fmt::Display for ScriptSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            Some(order) => write!(f, "{order}. ")?,
            None => write!(f, "- ")?,
        }
        if let Some(speaker) = &self.speaker {
            write!(f, "**{speaker}:** ")?;
        }

        let mut lines = self.text.lines();
        writeln!(f, "{}", lines.next().unwrap_or_default())?;
        for line in lines {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "{LIST_INDENT}{line}")?;
            }
        }

        if let Some(notes) = &self.notes {
            for line in notes.lines() {
                writeln!(f, "{LIST_INDENT}> {line}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.description)?;
        if let Some(segment_order) = self.segment_order {
            write!(f, " (segment {segment_order})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## ")?;
        write_day_label(f, self.day_index, self.title.as_deref())?;
        writeln!(f)?;
        writeln!(f)?;

        if self.segments.is_empty() {
            writeln!(f, "No segments for this day.")?;
        } else {
            for segment in &self.segments {
                write!(f, "{segment}")?;
            }
        }

        if !self.highlights.is_empty() {
            writeln!(f, "\n### Highlights")?;
            writeln!(f)?;
            for highlight in &self.highlights {
                write!(f, "{highlight}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name.as_deref().unwrap_or("Route"))?;
        writeln!(f)?;

        if self.days.is_empty() {
            return writeln!(f, "No days in this route.");
        }

        for (idx, day) in self.days.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{day}")?;
        }

        Ok(())
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- ")?;
        write_day_label(f, self.day_index, self.title.as_deref())?;
        write!(f, " ({}", plural(self.segment_count, "segment"))?;
        if self.highlight_count > 0 {
            write!(f, ", {}", plural(self.highlight_count, "highlight"))?;
        }
        writeln!(f, ")")
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name.as_deref().unwrap_or("Route"))?;
        writeln!(f)?;
        writeln!(f, "- Days: {}", self.total_days)?;
        writeln!(f, "- Segments: {}", self.total_segments)?;

        if !self.days.is_empty() {
            writeln!(f, "\n## Days")?;
            writeln!(f)?;
            for day in &self.days {
                write!(f, "{day}")?;
            }
        }

        Ok(())
    }
}
