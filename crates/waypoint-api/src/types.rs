use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An immutable catalog entry describing a point of interest.
///
/// Created by the catalog source and never mutated client-side. The serde
/// field names match the wire format of the places API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub image_path: String,
    pub description: String,
    pub coordinates: Coordinate,
}

/// Error value held by a [`FetchState`] after a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    /// Build the presentation-facing error from a failure, falling back to a
    /// generic message when the failure carries none.
    pub fn from_error(err: &SyncError, fallback: &str) -> Self {
        let message = err.to_string();
        Self {
            message: if message.is_empty() {
                fallback.to_string()
            } else {
                message
            },
        }
    }
}

/// Observable state of one logical data source.
///
/// `data` holds the initial value until the first resolution and retains its
/// last known value when a later load fails; after settlement exactly one of
/// `data` or `error` is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub is_fetching: bool,
    pub error: Option<FetchError>,
}

impl<T> FetchState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            is_fetching: false,
            error: None,
        }
    }

    /// True once a load has settled (neither in flight nor never started is
    /// distinguished here; callers track triggering).
    pub fn is_settled(&self) -> bool {
        !self.is_fetching
    }
}
