//! Client-side ordering of trips.

use std::cmp::Ordering;

use crate::models::{SortOrder, Trip};

/// Sorts trips in place. The sort is stable, so ties keep backend order.
///
/// Trips without a price sort last in both price orders, and unrated trips
/// sort last when ordering by rating.
pub fn sort_trips(trips: &mut [Trip], order: SortOrder) {
    match order {
        SortOrder::Recommended => {}
        SortOrder::PriceAsc => trips.sort_by(|a, b| missing_last(a.price, b.price, f64::total_cmp)),
        SortOrder::PriceDesc => {
            trips.sort_by(|a, b| missing_last(a.price, b.price, |x, y| y.total_cmp(x)))
        }
        SortOrder::Rating => trips.sort_by(|a, b| {
            missing_last(a.average_rating, b.average_rating, |x, y| y.total_cmp(x))
                .then_with(|| b.reviews_count.cmp(&a.reviews_count))
        }),
        SortOrder::Title => trips.sort_by_cached_key(|trip| trip.title.to_lowercase()),
    }
}

fn missing_last<F>(a: Option<f64>, b: Option<f64>, cmp: F) -> Ordering
where
    F: FnOnce(&f64, &f64) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
