//! Trip record as delivered by the backend.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    availability::{Availability, AvailabilityFormatter},
    error::Result,
};

/// Currency assumed when a trip record does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A bookable excursion.
///
/// Field names follow the backend's camelCase JSON. Only the fields the
/// presentation layer reads are modelled; anything else in the record is
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Raw availability tokens, format not guaranteed.
    #[serde(default)]
    pub trip_dates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: u32,
}

impl Trip {
    /// Parses a single trip record.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Availability ranges for this trip's `tripDates`.
    pub fn availability<'a>(&self, formatter: &'a AvailabilityFormatter) -> Availability<'a> {
        formatter.availability(&self.trip_dates)
    }

    /// Currency code for display.
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// First image, used as the listing thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
