//! Parameter structures shared by the CLI and the MCP server.
//!
//! These types carry no interface-specific attributes beyond optional JSON
//! schema derives (feature `schema`). The CLI builds them from clap
//! arguments; the MCP server deserializes them through a transparent
//! wrapper.
//!
//! ```text
//! CLI args (clap) ──┐
//!                   ├──▶ core params ──▶ AvailabilityFormatter / ListingState
//! MCP JSON (serde) ─┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    availability::AvailabilityFormatter,
    error::Result,
    listing::{ListingState, DEFAULT_PER_PAGE},
    models::SortOrder,
};

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

/// Parameters for summarizing raw availability tokens.
///
/// `locale` and `max_shown` override the caller's configured formatter; when
/// absent the configured values apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Summarize {
    /// Raw date strings, e.g. the `tripDates` of a trip record
    pub tokens: Vec<String>,
    /// Locale code for month names (defaults to the configured locale)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Ranges listed before the rest is collapsed into "+N more"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shown: Option<usize>,
}

impl Summarize {
    /// Formatter built from `base` with these parameters' overrides applied.
    pub fn formatter_over(&self, base: &AvailabilityFormatter) -> AvailabilityFormatter {
        let locale = self.locale.as_deref().unwrap_or(base.locale().tag());
        AvailabilityFormatter::builder()
            .with_locale(locale)
            .with_max_shown(self.max_shown.unwrap_or(base.max_shown()))
            .with_separator(base.separator())
            .build()
    }
}

/// Parameters for rendering a page of trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTrips {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: usize,
    /// Trips per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    /// Sort order
    #[serde(default)]
    pub sort: SortOrder,
}

impl ListTrips {
    /// Validated listing state for these parameters.
    ///
    /// # Errors
    ///
    /// Returns `ExcursionError::InvalidInput` for a zero page or page size.
    pub fn state(&self) -> Result<ListingState> {
        ListingState::new(self.page, self.per_page, self.sort)
    }
}

impl Default for ListTrips {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            sort: SortOrder::default(),
        }
    }
}
