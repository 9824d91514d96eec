//! Hurghada excursions CLI
//!
//! Command-line interface for trip availability summaries and listings.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use hurghada_core::AvailabilityFormatter;
use log::info;
use mcp::{run_stdio_server, ExcursionsMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        locale,
        max_shown,
        no_color,
        command,
    } = Args::parse();

    let formatter = AvailabilityFormatter::builder()
        .with_locale(&locale)
        .with_max_shown(max_shown)
        .build();
    let renderer = TerminalRenderer::new(!no_color);

    info!("hx started (locale {})", formatter.locale());

    match command {
        Dates(args) => Cli::new(formatter, renderer).dates(&args.into_params()),
        Summary(input) => Cli::new(formatter, renderer).summary(&input),
        Ranges(input) => Cli::new(formatter, renderer).ranges(&input),
        List(args) => Cli::new(formatter, renderer).list(&args),
        Serve => {
            info!("Starting MCP server");
            run_stdio_server(ExcursionsMcpServer::new(formatter))
                .await
                .context("MCP server failed")
        }
    }
}
