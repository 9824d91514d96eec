//! Display wrappers for trips, listings and availability.
//!
//! Domain models stay free of presentation logic; these wrappers pair them
//! with the context needed to render them (mainly the
//! [`AvailabilityFormatter`](crate::AvailabilityFormatter) carrying the
//! locale) and produce markdown for the terminal renderer and MCP clients.
//!
//! - [`TripCard`]: a single trip
//! - [`TripListing`]: a page of trips with a pagination footer
//! - [`AvailabilityRanges`]: every range of one trip

pub mod listing;
pub mod trip;

pub use listing::{AvailabilityRanges, TripListing, PAGE_LINKS};
pub use trip::TripCard;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        listing::ListingState,
        models::{SortOrder, Trip},
        AvailabilityFormatter,
    };

    fn trips(count: usize) -> Vec<Trip> {
        (1..=count)
            .map(|i| Trip {
                id: i.to_string(),
                title: format!("Trip {i}"),
                location: None,
                price: None,
                currency: None,
                duration: None,
                images: vec![],
                trip_dates: vec![format!("2025-08-{:02}", i)],
                average_rating: None,
                reviews_count: 0,
            })
            .collect()
    }

    #[test]
    fn test_listing_empty() {
        let formatter = AvailabilityFormatter::default();
        let page = ListingState::default().apply(vec![]);
        assert_eq!(
            TripListing::new(&page, &formatter).to_string(),
            "No trips found.\n"
        );
    }

    #[test]
    fn test_listing_single_page_has_no_footer() {
        let formatter = AvailabilityFormatter::default();
        let page = ListingState::default().apply(trips(3));
        let output = TripListing::new(&page, &formatter).to_string();
        assert!(output.contains("## Trip 1"));
        assert!(output.contains("## Trip 3"));
        assert!(!output.contains("Page 1 of"));
    }

    #[test]
    fn test_listing_footer_marks_current_page() {
        let formatter = AvailabilityFormatter::default();
        let state = ListingState::new(3, 2, SortOrder::Recommended).unwrap();
        let page = state.apply(trips(12));
        let output = TripListing::new(&page, &formatter).to_string();
        assert!(output.contains("## Trip 5"));
        assert!(output.contains("- **Available**: Aug 6, 2025"));
        assert!(output.ends_with("Page 3 of 6: 1 2 [3] 4 5\n"));
    }

    #[test]
    fn test_ranges_empty() {
        let formatter = AvailabilityFormatter::default();
        let availability = formatter.availability(["?"]);
        assert_eq!(
            AvailabilityRanges(&availability).to_string(),
            "No availability information.\n"
        );
    }
}
