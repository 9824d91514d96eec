//! MCP server implementation
//!
//! Exposes availability formatting and trip listings as Model Context
//! Protocol tools, so assistants can turn raw backend trip data into the same
//! text the website shows.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use hurghada_core::AvailabilityFormatter;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{McpHandlers, RenderListing, Summarize};

pub type McpResult = Result<CallToolResult, McpError>;

/// MCP server for trip availability
#[derive(Clone)]
pub struct ExcursionsMcpServer {
    formatter: Arc<AvailabilityFormatter>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ExcursionsMcpServer {
    /// Create a new MCP server; `formatter` supplies the listing locale.
    pub fn new(formatter: AvailabilityFormatter) -> Self {
        Self {
            formatter: Arc::new(formatter),
            tool_router: Self::tool_router(),
        }
    }

    fn text(result: Result<String, McpError>) -> McpResult {
        result.map(|text| CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "summarize_availability",
        description = "Summarize a trip's raw availability dates (the tripDates field) as one short line, e.g. 'Aug 20–21, 2025 • Aug 23, 2025 • +2 more'. Accepts ISO dates/datetimes and month-first dates like 8/20/2025; unparseable values are ignored. Optional locale controls month names and max_shown how many ranges are listed; both default to the server's settings."
    )]
    async fn summarize_availability(&self, Parameters(params): Parameters<Summarize>) -> McpResult {
        Self::text(McpHandlers::new(&self.formatter).summarize_availability(&params))
    }

    #[tool(
        name = "availability_ranges",
        description = "List every consecutive-day availability range for a set of raw trip dates, without truncation. Optional locale defaults to the server's locale. Useful for calendars or detail pages."
    )]
    async fn availability_ranges(&self, Parameters(params): Parameters<Summarize>) -> McpResult {
        Self::text(McpHandlers::new(&self.formatter).availability_ranges(&params))
    }

    #[tool(
        name = "render_listing",
        description = "Render one page of a trip listing as markdown. Provide the trip records, optional page (1-based), per_page and sort ('recommended', 'price-asc', 'price-desc', 'rating', 'title'). Each card shows price, rating and an availability line."
    )]
    async fn render_listing(&self, Parameters(params): Parameters<RenderListing>) -> McpResult {
        Self::text(McpHandlers::new(&self.formatter).render_listing(params))
    }
}

#[tool_handler]
impl ServerHandler for ExcursionsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(r#"Formats availability and listings for Hurghada excursion trips.

## Tools
- `summarize_availability`: short availability line for a trip's tripDates
- `availability_ranges`: every availability range, one per line
- `render_listing`: a sorted, paginated page of trip cards

Dates are grouped into runs of consecutive days. Ambiguous numeric dates are read month-first (03/04/2025 is March 4th)."#.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ExcursionsMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
