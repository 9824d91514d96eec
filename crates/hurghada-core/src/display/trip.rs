//! Trip card rendering.

use std::fmt;

use crate::{availability::AvailabilityFormatter, models::Trip};

/// Wrapper rendering a trip as a markdown card.
///
/// The availability line is omitted entirely when the trip has no usable
/// dates.
///
/// # Examples
///
/// ```rust
/// use hurghada_core::{display::TripCard, models::Trip, AvailabilityFormatter};
///
/// let trip = Trip::from_json(r#"{
///     "id": "7",
///     "title": "Dolphin House",
///     "price": 45,
///     "tripDates": ["2025-09-01", "2025-09-02"]
/// }"#).unwrap();
/// let formatter = AvailabilityFormatter::default();
///
/// let card = TripCard::new(&trip, &formatter).to_string();
/// assert!(card.starts_with("## Dolphin House"));
/// assert!(card.contains("- **Price**: 45 USD"));
/// assert!(card.contains("- **Available**: Sep 1\u{2013}2, 2025"));
/// ```
pub struct TripCard<'a> {
    trip: &'a Trip,
    formatter: &'a AvailabilityFormatter,
}

impl<'a> TripCard<'a> {
    pub fn new(trip: &'a Trip, formatter: &'a AvailabilityFormatter) -> Self {
        Self { trip, formatter }
    }
}

impl fmt::Display for TripCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trip = self.trip;
        writeln!(f, "## {} (ID: {})", trip.title, trip.id)?;
        writeln!(f)?;

        if let Some(location) = &trip.location {
            writeln!(f, "- **Location**: {location}")?;
        }
        if let Some(price) = trip.price {
            writeln!(f, "- **Price**: {} {}", Amount(price), trip.currency())?;
        }
        if let Some(duration) = &trip.duration {
            writeln!(f, "- **Duration**: {duration}")?;
        }
        if let Some(rating) = trip.average_rating {
            writeln!(
                f,
                "- **Rating**: {rating:.1} ({} reviews)",
                trip.reviews_count
            )?;
        }

        let summary = trip.availability(self.formatter).summary();
        if !summary.is_empty() {
            writeln!(f, "- **Available**: {summary}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

/// Prices print without decimals when whole.
struct Amount(f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}
