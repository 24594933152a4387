//! Tourscript CLI Application
//!
//! Command-line interface for turning itinerary scripts into routes.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::{CommandFactory, Parser};
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Tourscript started");

    match command {
        Some(Parse(args)) => cli.handle_parse(args),
        Some(Summary(args)) => cli.handle_summary(args),
        Some(Schema) => cli.print_schema(),
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
