//! Listing and range-list wrappers.

use std::fmt;

use super::TripCard;
use crate::{
    availability::{Availability, AvailabilityFormatter},
    listing::{ListingPage, PageInfo},
};

/// Page links shown in a listing footer.
pub const PAGE_LINKS: usize = 5;

/// Newtype-style wrapper for displaying one page of trips.
///
/// Renders each trip as a [`TripCard`], followed by a pagination footer when
/// the listing spans more than one page. Handles empty pages gracefully.
pub struct TripListing<'a> {
    page: &'a ListingPage,
    formatter: &'a AvailabilityFormatter,
}

impl<'a> TripListing<'a> {
    pub fn new(page: &'a ListingPage, formatter: &'a AvailabilityFormatter) -> Self {
        Self { page, formatter }
    }
}

impl fmt::Display for TripListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.page.is_empty() {
            return writeln!(f, "No trips found.");
        }

        for trip in &self.page.trips {
            write!(f, "{}", TripCard::new(trip, self.formatter))?;
        }

        if self.page.info.total_pages > 1 {
            write!(f, "{}", Pager(&self.page.info))?;
        }
        Ok(())
    }
}

/// `Page 2 of 7: 1 [2] 3 4 5`
struct Pager<'a>(&'a PageInfo);

impl fmt::Display for Pager<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.0;
        let links: Vec<String> = info
            .window(PAGE_LINKS)
            .into_iter()
            .map(|n| {
                if n == info.page {
                    format!("[{n}]")
                } else {
                    n.to_string()
                }
            })
            .collect();
        writeln!(
            f,
            "Page {} of {}: {}",
            info.page,
            info.total_pages,
            links.join(" ")
        )
    }
}

/// Wrapper listing every availability range of a trip, one per line.
///
/// Used where the full list matters (calendars, detail pages) rather than
/// the truncated summary.
///
/// ```rust
/// use hurghada_core::{display::AvailabilityRanges, AvailabilityFormatter};
///
/// let formatter = AvailabilityFormatter::default();
/// let availability = formatter.availability(["2025-08-20", "2025-08-22"]);
/// assert_eq!(
///     AvailabilityRanges(&availability).to_string(),
///     "- Aug 20, 2025\n- Aug 22, 2025\n"
/// );
/// ```
pub struct AvailabilityRanges<'a, 'f>(pub &'a Availability<'f>);

impl fmt::Display for AvailabilityRanges<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No availability information.");
        }
        for range in self.0.formatted_ranges() {
            writeln!(f, "- {range}")?;
        }
        Ok(())
    }
}
