use clap::{Parser, Subcommand};
use hurghada_core::{availability::DEFAULT_MAX_SHOWN, locale::DEFAULT_LOCALE};

use crate::cli::{DatesArgs, InputArgs, ListArgs};

/// Trip availability and listing tool for Hurghada excursions
///
/// Reads trip records as returned by the booking backend (files or stdin)
/// and renders availability summaries, full range lists and paginated
/// listings. Can also run as an MCP server so assistants can format trip
/// availability on demand.
#[derive(Parser)]
#[command(version, about, name = "hx")]
pub struct Args {
    /// Locale code for month names (e.g. en-US, de-DE, ru)
    #[arg(long, global = true, env = "HX_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Ranges listed in a summary before the rest is collapsed into "+N more"
    #[arg(long, global = true, env = "HX_MAX_SHOWN", default_value_t = DEFAULT_MAX_SHOWN)]
    pub max_shown: usize,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
///
/// - `dates`: summarize raw date tokens given on the command line
/// - `summary` / `ranges`: availability of a single trip record
/// - `list`: a sorted, paginated page of trips
/// - `serve`: start the MCP server
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize raw date tokens
    #[command(alias = "d")]
    Dates(DatesArgs),
    /// Show the availability summary of a trip
    #[command(alias = "s")]
    Summary(InputArgs),
    /// List every availability range of a trip
    #[command(alias = "r")]
    Ranges(InputArgs),
    /// Show a page of trips
    #[command(alias = "l")]
    List(ListArgs),
    /// Start the MCP server
    Serve,
}
