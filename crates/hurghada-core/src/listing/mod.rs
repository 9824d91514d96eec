//! Trip listing state: sort order and pagination.
//!
//! The listing page keeps its current page, page size and sort order in a
//! [`ListingState`] value that is passed into rendering rather than held in
//! shared mutable state. Applying a state to the trips fetched from the
//! backend yields a [`ListingPage`]: the trips to show plus the resolved
//! [`PageInfo`].
//!
//! ```rust
//! use hurghada_core::{listing::ListingState, models::{SortOrder, Trip}};
//!
//! let trips: Vec<Trip> = (1..=5)
//!     .map(|i| Trip::from_json(&format!(r#"{{"id": "{i}", "title": "Trip {i}", "price": {}}}"#, 60 - i * 10)).unwrap())
//!     .collect();
//!
//! let state = ListingState::new(2, 2, SortOrder::PriceAsc).unwrap();
//! let page = state.apply(trips);
//! assert_eq!(page.info.total_pages, 3);
//! assert_eq!(page.trips[0].title, "Trip 3");
//! ```

pub mod pagination;
pub mod sort;

use log::debug;
use serde::Serialize;

pub use pagination::PageInfo;
pub use sort::sort_trips;

use crate::{
    error::{ExcursionError, Result},
    models::{SortOrder, Trip},
};

/// Trips shown per page when no page size is configured.
pub const DEFAULT_PER_PAGE: usize = 9;

/// Explicit listing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingState {
    pub page: usize,
    pub per_page: usize,
    pub sort: SortOrder,
}

impl ListingState {
    /// Creates a validated listing state.
    ///
    /// # Errors
    ///
    /// Returns `ExcursionError::InvalidInput` if `page` or `per_page` is zero.
    pub fn new(page: usize, per_page: usize, sort: SortOrder) -> Result<Self> {
        if page == 0 {
            return Err(ExcursionError::invalid_input("page").with_reason("pages start at 1"));
        }
        if per_page == 0 {
            return Err(ExcursionError::invalid_input("per_page").with_reason("must be at least 1"));
        }
        Ok(Self {
            page,
            per_page,
            sort,
        })
    }

    /// Same state on another page.
    pub fn with_page(self, page: usize) -> Result<Self> {
        Self::new(page, self.per_page, self.sort)
    }

    /// Same state with another sort order, back on the first page.
    pub fn with_sort(self, sort: SortOrder) -> Self {
        Self {
            page: 1,
            sort,
            ..self
        }
    }

    /// Sorts `trips` and cuts out the current page.
    pub fn apply(&self, mut trips: Vec<Trip>) -> ListingPage {
        sort_trips(&mut trips, self.sort);
        let info = PageInfo::new(trips.len(), self.per_page, self.page);
        debug!(
            "Listing page {}/{} ({} trips, sort {})",
            info.page, info.total_pages, info.total_items, self.sort
        );

        let range = info.item_range();
        let trips = trips.drain(range).collect();
        ListingPage { trips, info }
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            sort: SortOrder::Recommended,
        }
    }
}

/// One page of a sorted listing.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub trips: Vec<Trip>,
    pub info: PageInfo,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
