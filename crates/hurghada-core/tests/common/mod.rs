use hurghada_core::Trip;

/// Builds a trip with the given pricing, rating and availability tokens.
pub fn sample_trip(id: &str, title: &str, price: Option<f64>, rating: Option<f64>, dates: &[&str]) -> Trip {
    Trip {
        id: id.to_string(),
        title: title.to_string(),
        location: Some("Hurghada".to_string()),
        price,
        currency: None,
        duration: None,
        images: vec![],
        trip_dates: dates.iter().map(|d| d.to_string()).collect(),
        average_rating: rating,
        reviews_count: 0,
    }
}

/// A small catalogue in backend order.
#[allow(dead_code)]
pub fn catalogue() -> Vec<Trip> {
    vec![
        sample_trip("a1", "Orange Bay", Some(40.0), Some(4.8), &["2025-08-20", "2025-08-21"]),
        sample_trip("b2", "Desert Safari", Some(25.0), None, &["8/22/2025"]),
        sample_trip("c3", "Luxor Day Trip", Some(89.0), Some(4.5), &[]),
        sample_trip("d4", "Glass Boat", None, Some(4.9), &["bad"]),
        sample_trip("e5", "dolphin house", Some(45.0), Some(4.5), &["2025-09-01"]),
    ]
}
