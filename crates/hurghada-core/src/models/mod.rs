//! Data models for trips and listings.
//!
//! These types mirror the backend's JSON. Display implementations live in
//! [`crate::display`] so that the same record can be rendered as a card, a
//! listing row or a range list depending on context.
//!
//! # Examples
//!
//! ```rust
//! use hurghada_core::{models::Trip, AvailabilityFormatter};
//!
//! let trip = Trip::from_json(r#"{
//!     "_id": "64f0c2",
//!     "title": "Giftun Island Snorkeling",
//!     "price": 35,
//!     "tripDates": ["2025-08-20", "2025-08-21", "8/23/2025"]
//! }"#).unwrap();
//!
//! let formatter = AvailabilityFormatter::default();
//! assert_eq!(
//!     trip.availability(&formatter).summary(),
//!     "Aug 20\u{2013}21, 2025 \u{2022} Aug 23, 2025"
//! );
//! ```

pub mod payload;
pub mod sort;
pub mod trip;


pub use payload::{TripEnvelope, TripPayload};
pub use sort::SortOrder;
pub use trip::{Trip, DEFAULT_CURRENCY};
