//! Command handlers for the Tourscript CLI.

use std::io::{self, Read};

use anyhow::{Context, Result};
use log::debug;
use tourscript_core::{
    build_route_from_text, load_content, Days, RawContent, Route, RouteSummary, ScriptError,
};

use crate::{
    args::{ParseArgs, ScriptSource, SummaryArgs},
    renderer::TerminalRenderer,
};

/// Runs CLI commands and prints their output through the renderer.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Parse a script and print the route as markdown or JSON.
    pub fn handle_parse(&self, args: ParseArgs) -> Result<()> {
        let ParseArgs {
            file,
            json,
            name,
            days,
        } = args;
        let source = ScriptSource::from(file);

        let name = match name {
            Some(name) if name.trim().is_empty() => {
                return Err(ScriptError::invalid_input("name")
                    .with_reason("must not be empty")
                    .into());
            }
            Some(name) => Some(name),
            None => source.default_name(),
        };

        let route = name_route(parse_source(&source)?, name);

        if days.is_empty() {
            return if json {
                print_json(&route)
            } else {
                self.renderer.render(&route.to_string())
            };
        }

        let selected = select_days(route, &days);
        debug!("Selected {} of the requested day(s)", selected.len());
        if json {
            print_json(&selected.0)
        } else {
            self.renderer.render(&selected.to_string())
        }
    }

    /// Print day and segment counts for a script.
    pub fn handle_summary(&self, args: SummaryArgs) -> Result<()> {
        let source = ScriptSource::from(args.file);
        let name = source.default_name();
        let route = name_route(parse_source(&source)?, name);

        self.renderer.render(&RouteSummary::from(&route).to_string())
    }

    /// Print the JSON Schema describing serialized routes.
    pub fn print_schema(&self) -> Result<()> {
        print_json(&schemars::schema_for!(Route))
    }
}

fn select_days(route: Route, wanted: &[u64]) -> Days {
    Days(
        route
            .days
            .into_iter()
            .filter(|day| wanted.contains(&day.day_index))
            .collect(),
    )
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)
        .map_err(ScriptError::from)
        .context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}

fn name_route(route: Route, name: Option<String>) -> Route {
    match name {
        Some(name) => route.with_name(name),
        None => route,
    }
}

fn parse_source(source: &ScriptSource) -> Result<Route> {
    let raw = read_source(source)?;
    debug!("Parsing {} ({} bytes)", raw.path, raw.text.len());
    Ok(build_route_from_text(&raw.text))
}

fn read_source(source: &ScriptSource) -> Result<RawContent> {
    match source {
        ScriptSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(RawContent::new("-", text))
        }
        ScriptSource::File(path) => Ok(load_content(path)?),
    }
}
