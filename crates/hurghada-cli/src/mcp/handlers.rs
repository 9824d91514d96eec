//! MCP tool handlers implementation

use hurghada_core::{
    params, AvailabilityFormatter, AvailabilityRanges, Trip, TripListing,
};
use log::debug;
use rmcp::ErrorData;
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types are wrapped in a transparent serde container that adds
// the MCP-specific derives (Deserialize, JsonSchema) while the core types stay
// free of framework concerns.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Summarize = McpParams<params::Summarize>;

/// Trips plus listing options for the `render_listing` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RenderListing {
    /// Trip records as returned by the backend
    pub trips: Vec<Trip>,
    #[serde(flatten)]
    pub listing: params::ListTrips,
}

/// Text produced by the MCP tools.
pub struct McpHandlers<'a> {
    formatter: &'a AvailabilityFormatter,
}

impl<'a> McpHandlers<'a> {
    pub fn new(formatter: &'a AvailabilityFormatter) -> Self {
        Self { formatter }
    }

    pub fn summarize_availability(&self, params: &Summarize) -> Result<String, ErrorData> {
        let params = params.as_ref();
        debug!("summarize_availability: {} tokens", params.tokens.len());

        let summary = params
            .formatter_over(self.formatter)
            .summarize(&params.tokens);
        if summary.is_empty() {
            Ok("No availability information.".to_string())
        } else {
            Ok(summary)
        }
    }

    pub fn availability_ranges(&self, params: &Summarize) -> Result<String, ErrorData> {
        let params = params.as_ref();
        debug!("availability_ranges: {} tokens", params.tokens.len());

        let formatter = params.formatter_over(self.formatter);
        let availability = formatter.availability(&params.tokens);
        Ok(format!(
            "# Availability ({} ranges)\n\n{}",
            availability.len(),
            AvailabilityRanges(&availability)
        ))
    }

    pub fn render_listing(&self, params: RenderListing) -> Result<String, ErrorData> {
        debug!(
            "render_listing: {} trips, {:?}",
            params.trips.len(),
            params.listing
        );

        let state = params
            .listing
            .state()
            .map_err(|e| to_mcp_error("Invalid listing options", &e))?;
        let page = state.apply(params.trips);
        Ok(format!(
            "# Trips\n\n{}",
            TripListing::new(&page, self.formatter)
        ))
    }
}
