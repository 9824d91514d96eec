//! Backend response shapes carrying trips.

use std::path::Path;

use serde::Deserialize;

use super::Trip;
use crate::error::{ExcursionError, Result};

/// A JSON document holding one or more trips.
///
/// The backend answers detail requests with a bare trip object and list
/// requests with either a bare array or an envelope object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TripPayload {
    List(Vec<Trip>),
    Envelope(TripEnvelope),
    Single(Box<Trip>),
}

/// List envelope; the array is found under `trips` or `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripEnvelope {
    #[serde(alias = "data")]
    pub trips: Vec<Trip>,
}

impl TripPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a payload file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|e| ExcursionError::file_system(path, e))?;
        Self::from_json(&json)
    }

    /// Flattens the payload into its trips, preserving backend order.
    pub fn into_trips(self) -> Vec<Trip> {
        match self {
            TripPayload::List(trips) => trips,
            TripPayload::Envelope(envelope) => envelope.trips,
            TripPayload::Single(trip) => vec![*trip],
        }
    }

    /// The payload's only trip, or an error when it holds zero or several.
    pub fn into_single(self) -> Result<Trip> {
        let mut trips = self.into_trips();
        if trips.len() != 1 {
            return Err(ExcursionError::invalid_input("trip")
                .with_reason(format!("expected exactly one trip, found {}", trips.len())));
        }
        Ok(trips.remove(0))
    }
}
