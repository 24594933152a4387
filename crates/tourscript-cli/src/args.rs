//! Command-line interface definitions using clap.
//!
//! Argument structs stay in this crate; they convert into [`ScriptSource`]
//! and plain values before anything reaches `tourscript-core`.

use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Turn tour-guide scripts into structured day-by-day routes
///
/// Tourscript reads free-form itinerary text, finds `Day N` headings, and
/// splits each day into numbered paragraphs. Text without headings is
/// treated as a single day. Set RUST_LOG=debug to see parsing decisions.
#[derive(Parser)]
#[command(version, about, name = "tourscript")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tourscript CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a script and print the route
    #[command(alias = "p")]
    Parse(ParseArgs),
    /// Print day and segment counts for a script
    #[command(alias = "s")]
    Summary(SummaryArgs),
    /// Print the JSON Schema of the route format
    Schema,
}

/// Where script text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Read from standard input
    Stdin,
    /// Read from a file on disk
    File(PathBuf),
}

impl ScriptSource {
    /// Default route name: the file stem, or nothing for stdin.
    pub fn default_name(&self) -> Option<String> {
        match self {
            ScriptSource::Stdin => None,
            ScriptSource::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned()),
        }
    }
}

impl From<PathBuf> for ScriptSource {
    fn from(path: PathBuf) -> Self {
        if path == Path::new("-") {
            ScriptSource::Stdin
        } else {
            ScriptSource::File(path)
        }
    }
}

/// Parse a script and print the route
///
/// Prints the route as markdown by default, or as pretty-printed JSON with
/// --json. The route is named after the file stem unless --name is given.
/// With --day, only the matching days are printed, without the route header.
#[derive(ClapArgs)]
pub struct ParseArgs {
    /// Script file to parse, or `-` for standard input
    #[arg(help = "Path to a Markdown or plain-text script, or - for stdin")]
    pub file: PathBuf,
    /// Print the route as JSON instead of markdown
    #[arg(long, help = "Print the route as pretty-printed JSON")]
    pub json: bool,
    /// Name for the route
    #[arg(short, long, help = "Name for the route (defaults to the file stem)")]
    pub name: Option<String>,
    /// Only print these days
    #[arg(
        long = "day",
        value_name = "N",
        help = "Only print days with this number (repeatable)"
    )]
    pub days: Vec<u64>,
}

/// Print day and segment counts for a script
#[derive(ClapArgs)]
pub struct SummaryArgs {
    /// Script file to summarize, or `-` for standard input
    #[arg(help = "Path to a Markdown or plain-text script, or - for stdin")]
    pub file: PathBuf,
}
