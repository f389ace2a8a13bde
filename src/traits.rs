//! Core seams for the trip planner.
//!
//! The scheduler only reaches the outside world through these traits.
//! `geoapify` implements the two network providers and `store` the record
//! store; tests plug in fixed-answer doubles.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, StoreResult};
use crate::polyline::GeoPoint;

/// Resolves free-text addresses to coordinates.
pub trait Geocoder: Send + Sync {
    /// Best-match coordinate for `address`, `None` when the provider has no
    /// candidate at all.
    fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, ProviderError>;
}

/// Computes a driving route through an ordered list of waypoints.
pub trait RouteProvider: Send + Sync {
    fn route(&self, waypoints: &[GeoPoint]) -> Result<DrivingRoute, ProviderError>;
}

/// Raw driving route as returned by a router.
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingRoute {
    /// Per-segment point lists in the provider's `[lng, lat]` order.
    pub segments: Vec<Vec<[f64; 2]>>,
    /// Total distance in meters.
    pub distance_meters: f64,
    /// Total travel time in seconds.
    pub duration_seconds: f64,
}

/// The four caller-supplied fields of a trip, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: f64,
}

/// A persisted trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: u64,
    #[serde(flatten)]
    pub trip: TripDraft,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPatch {
    pub current_location: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub current_cycle_used: Option<f64>,
}

impl TripPatch {
    pub fn apply(self, trip: &mut TripDraft) {
        if let Some(value) = self.current_location {
            trip.current_location = value;
        }
        if let Some(value) = self.pickup_location {
            trip.pickup_location = value;
        }
        if let Some(value) = self.dropoff_location {
            trip.dropoff_location = value;
        }
        if let Some(value) = self.current_cycle_used {
            trip.current_cycle_used = value;
        }
    }
}

/// Owner of persisted trip records.
pub trait TripStore: Send + Sync {
    fn list(&self) -> StoreResult<Vec<TripRecord>>;

    fn create(&self, trip: TripDraft) -> StoreResult<TripRecord>;

    fn get(&self, id: u64) -> StoreResult<TripRecord>;

    /// Replaces every field of an existing record.
    fn update(&self, id: u64, trip: TripDraft) -> StoreResult<TripRecord>;

    fn patch(&self, id: u64, patch: TripPatch) -> StoreResult<TripRecord>;

    fn delete(&self, id: u64) -> StoreResult<()>;
}
