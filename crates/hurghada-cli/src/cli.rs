//! Command-line argument wrappers and command handlers.
//!
//! Argument structs carry the clap-specific attributes and convert into the
//! interface-agnostic parameter types of `hurghada_core::params`, so the
//! core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Formatter / Listing
//! ```

use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use hurghada_core::{
    params::{ListTrips, Summarize},
    AvailabilityFormatter, AvailabilityRanges, SortOrder, Trip, TripListing, TripPayload,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Summarize raw date tokens
///
/// Tokens may be ISO-8601 dates or datetimes, or month-first numeric dates
/// such as 8/20/2025. Unparseable tokens are ignored. Prints nothing when no
/// token is usable.
#[derive(Args)]
pub struct DatesArgs {
    /// Raw date tokens
    #[arg(required = true, help = "Date tokens, e.g. 2025-08-20 8/21/2025")]
    pub tokens: Vec<String>,
}

impl DatesArgs {
    pub fn into_params(self) -> Summarize {
        Summarize {
            tokens: self.tokens,
            ..Summarize::default()
        }
    }
}

/// Read a trip payload from a file or stdin
#[derive(Args)]
pub struct InputArgs {
    /// JSON file with the trip record; reads stdin when omitted or "-"
    #[arg(help = "Path to a trip JSON file, or - for stdin")]
    pub file: Option<PathBuf>,
}

/// Show a page of trips
///
/// Trips are sorted client-side and cut into pages. Page numbers past the
/// end land on the last page.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1, help = "Page number, starting at 1")]
    pub page: usize,
    /// Trips per page
    #[arg(long, default_value_t = hurghada_core::listing::DEFAULT_PER_PAGE)]
    pub per_page: usize,
    /// Sort order
    #[arg(short, long, value_enum, default_value_t = SortArg::Recommended)]
    pub sort: SortArg,
}

impl From<&ListArgs> for ListTrips {
    fn from(val: &ListArgs) -> Self {
        ListTrips {
            page: val.page,
            per_page: val.per_page,
            sort: val.sort.into(),
        }
    }
}

/// CLI-friendly sort order values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SortArg {
    /// Backend order
    Recommended,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Best rated first
    Rating,
    /// Alphabetical
    Title,
}

impl From<SortArg> for SortOrder {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Recommended => SortOrder::Recommended,
            SortArg::PriceAsc => SortOrder::PriceAsc,
            SortArg::PriceDesc => SortOrder::PriceDesc,
            SortArg::Rating => SortOrder::Rating,
            SortArg::Title => SortOrder::Title,
        }
    }
}

/// Executes commands against a configured formatter and renderer.
pub struct Cli {
    formatter: AvailabilityFormatter,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(formatter: AvailabilityFormatter, renderer: TerminalRenderer) -> Self {
        Self {
            formatter,
            renderer,
        }
    }

    /// Prints the summary line for raw tokens.
    pub fn dates(&self, params: &Summarize) -> Result<()> {
        debug!("dates: {} tokens", params.tokens.len());
        let summary = params
            .formatter_over(&self.formatter)
            .summarize(&params.tokens);
        self.print_line(&summary)
    }

    /// Prints the summary line of a single trip.
    pub fn summary(&self, input: &InputArgs) -> Result<()> {
        let trip = read_single_trip(input)?;
        let summary = trip.availability(&self.formatter).summary();
        self.print_line(&summary)
    }

    /// Prints every availability range of a single trip.
    pub fn ranges(&self, input: &InputArgs) -> Result<()> {
        let trip = read_single_trip(input)?;
        let availability = trip.availability(&self.formatter);
        let output = format!("# {}\n\n{}", trip.title, AvailabilityRanges(&availability));
        self.renderer.render(&output)
    }

    /// Prints one page of trips.
    pub fn list(&self, args: &ListArgs) -> Result<()> {
        let state = ListTrips::from(args)
            .state()
            .context("Invalid listing options")?;
        let trips = read_payload(&args.input)?.into_trips();
        let page = state.apply(trips);

        let title = if page.is_empty() {
            "No trips"
        } else {
            "Trips"
        };
        let output = format!(
            "# {title}\n\n{}",
            TripListing::new(&page, &self.formatter)
        );
        self.renderer.render(&output)
    }

    fn print_line(&self, line: &str) -> Result<()> {
        if line.is_empty() {
            debug!("No availability information");
            return Ok(());
        }
        self.renderer.summary(line)
    }
}

fn read_payload(input: &InputArgs) -> Result<TripPayload> {
    match input.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => TripPayload::from_path(path)
            .with_context(|| format!("Failed to load trips from {}", path.display())),
        _ => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read stdin")?;
            TripPayload::from_json(&json).context("Failed to parse trips from stdin")
        }
    }
}

fn read_single_trip(input: &InputArgs) -> Result<Trip> {
    read_payload(input)?
        .into_single()
        .context("Expected a single trip record")
}
