//! Terminal output for routes and summaries.
//!
//! `tourscript-core` formats everything as markdown. Numbered segments put
//! their continuation lines and notes under a three-space list indent, which
//! termimad would print as code blocks, so the rich path lifts those lines
//! back to paragraph text and quotes before handing the whole document to
//! termimad.

use anyhow::Result;
use termimad::{crossterm::style::Color, terminal_size, Alignment, FmtText, MadSkin, StyledChar};

/// Indent used by numbered segments for their continuation lines.
const SEGMENT_INDENT: &str = "   ";

/// Prints markdown either styled through termimad or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        for header in &mut skin.headers {
            header.align = Alignment::Left;
        }
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.quote_mark = StyledChar::from_fg_char(Color::DarkGrey, '│');

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            let (width, _) = terminal_size();
            print!("{}", self.format_rich(markdown, usize::from(width)));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Style markdown for a terminal `width` columns wide.
    pub fn format_rich(&self, markdown: &str, width: usize) -> String {
        let source = lift_segment_lines(markdown);
        FmtText::from(&self.skin, &source, Some(width)).to_string()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Rewrite indented segment lines so termimad does not treat them as code.
///
/// `   > note` becomes a quote line and any other indented continuation line
/// loses its indent.
fn lift_segment_lines(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| match line.strip_prefix(SEGMENT_INDENT) {
            Some(rest) => rest.trim_start(),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
