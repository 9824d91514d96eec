//! Core library for the Hurghada excursions presentation layer.
//!
//! The centrepiece is the [`availability`] module, which turns a trip's raw
//! `tripDates` into a short locale-aware line such as
//! `Aug 20–21, 2025 • Aug 23, 2025 • +2 more`. Around it sit the pieces a
//! renderer needs: the backend [`models`], explicit [`listing`] state for
//! sorting and pagination, and [`display`] wrappers producing markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use hurghada_core::{availability::summarize, AvailabilityFormatter};
//!
//! // One-off summary
//! let line = summarize(["2025-08-31", "9/1/2025", "2025-09-02T10:00:00Z"], "en-US", 3);
//! assert_eq!(line, "Aug 31 \u{2013} Sep 2, 2025");
//!
//! // Shared settings for a whole render pass
//! let formatter = AvailabilityFormatter::builder().with_locale("ru-RU").build();
//! let availability = formatter.availability(["2025-08-20", "2025-08-21"]);
//! assert_eq!(availability.summary(), "авг. 20\u{2013}21, 2025");
//! assert_eq!(availability.dates().len(), 2);
//! ```

pub mod availability;
pub mod display;
pub mod error;
pub mod listing;
pub mod locale;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use availability::{
    format_range, group_consecutive, normalize, parse_date_token, summarize, Availability,
    AvailabilityFormatter, AvailabilityFormatterBuilder, DateRange,
};
pub use display::{AvailabilityRanges, TripCard, TripListing};
pub use error::{ExcursionError, Result};
pub use listing::{ListingPage, ListingState, PageInfo};
pub use locale::{Language, Locale};
pub use models::{SortOrder, Trip, TripPayload};
pub use params::{ListTrips, Summarize};
