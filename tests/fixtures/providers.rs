//! Provider doubles with fixed answers.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use trip_planner::error::{ProviderError, StoreError, StoreResult};
use trip_planner::planner::{RouteScheduler, TripRequest};
use trip_planner::polyline::GeoPoint;
use trip_planner::schedule::{METERS_PER_MILE, SECONDS_PER_HOUR};
use trip_planner::store::InMemoryTripStore;
use trip_planner::traits::{
    DrivingRoute, Geocoder, RouteProvider, TripDraft, TripPatch, TripRecord, TripStore,
};

use super::us_locations::{HUBS, Location};

/// Resolves the names in its table, nothing else.
#[derive(Debug, Default)]
pub struct MockGeocoder {
    table: HashMap<String, GeoPoint>,
    failures: HashMap<String, fn() -> ProviderError>,
    pub calls: AtomicUsize,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hubs() -> Self {
        HUBS.iter().fold(Self::new(), |geocoder, hub| geocoder.location(hub))
    }

    pub fn address(mut self, name: &str, lat: f64, lng: f64) -> Self {
        self.table.insert(name.to_string(), GeoPoint::new(lat, lng));
        self
    }

    pub fn location(self, location: &Location) -> Self {
        self.address(location.name, location.lat, location.lng)
    }

    pub fn failing(mut self, name: &str, err: fn() -> ProviderError) -> Self {
        self.failures.insert(name.to_string(), err);
        self
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failures.get(address) {
            return Err(err());
        }
        Ok(self.table.get(address).copied())
    }
}

/// Answers every address with the same point after a fixed delay, and keeps
/// the highest number of lookups seen in flight at once.
pub struct SlowGeocoder {
    delay: Duration,
    in_flight: AtomicUsize,
    pub peak: AtomicUsize,
}

impl SlowGeocoder {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }
}

impl Geocoder for SlowGeocoder {
    fn geocode(&self, _address: &str) -> Result<Option<GeoPoint>, ProviderError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(Some(GeoPoint::new(41.8755616, -87.6244212)))
    }
}

/// Returns a canned route, or a canned failure.
pub struct MockRouter {
    outcome: Result<DrivingRoute, fn() -> ProviderError>,
    pub calls: AtomicUsize,
}

impl MockRouter {
    pub fn returning(route: DrivingRoute) -> Self {
        Self {
            outcome: Ok(route),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: fn() -> ProviderError) -> Self {
        Self {
            outcome: Err(err),
            calls: AtomicUsize::new(0),
        }
    }
}

impl RouteProvider for MockRouter {
    fn route(&self, _waypoints: &[GeoPoint]) -> Result<DrivingRoute, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(route) => Ok(route.clone()),
            Err(make) => Err(make()),
        }
    }
}

/// A straight route along `points` of the given length and duration.
pub fn straight_route(points: &[Location], miles: f64, hours: f64) -> DrivingRoute {
    DrivingRoute {
        segments: points
            .windows(2)
            .map(|pair| vec![pair[0].lng_lat(), pair[1].lng_lat()])
            .collect(),
        distance_meters: miles * METERS_PER_MILE,
        duration_seconds: hours * SECONDS_PER_HOUR,
    }
}

/// A single-segment route with `count` evenly stepped points.
pub fn dense_route(count: usize, miles: f64, hours: f64) -> DrivingRoute {
    let segment = (0..count)
        .map(|i| [-87.0 - i as f64 * 0.01, 41.0 + i as f64 * 0.01])
        .collect();
    DrivingRoute {
        segments: vec![segment],
        distance_meters: miles * METERS_PER_MILE,
        duration_seconds: hours * SECONDS_PER_HOUR,
    }
}

/// Store that refuses every write.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl TripStore for BrokenStore {
    fn list(&self) -> StoreResult<Vec<TripRecord>> {
        Ok(Vec::new())
    }

    fn create(&self, _trip: TripDraft) -> StoreResult<TripRecord> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }

    fn get(&self, id: u64) -> StoreResult<TripRecord> {
        Err(StoreError::NotFound(id))
    }

    fn update(&self, id: u64, _trip: TripDraft) -> StoreResult<TripRecord> {
        Err(StoreError::NotFound(id))
    }

    fn patch(&self, id: u64, _patch: TripPatch) -> StoreResult<TripRecord> {
        Err(StoreError::NotFound(id))
    }

    fn delete(&self, id: u64) -> StoreResult<()> {
        Err(StoreError::NotFound(id))
    }
}

pub struct Harness {
    pub geocoder: Arc<MockGeocoder>,
    pub router: Arc<MockRouter>,
    pub store: Arc<InMemoryTripStore>,
}

impl Harness {
    pub fn new(geocoder: MockGeocoder, router: MockRouter) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            router: Arc::new(router),
            store: Arc::new(InMemoryTripStore::new()),
        }
    }

    pub fn scheduler(&self) -> RouteScheduler {
        RouteScheduler::new(self.geocoder.clone(), self.router.clone(), self.store.clone())
    }
}

pub fn trip(current: &str, pickup: &str, dropoff: &str, cycle_used: f64) -> TripRequest {
    TripRequest {
        current_location: current.to_string(),
        pickup_location: pickup.to_string(),
        dropoff_location: dropoff.to_string(),
        current_cycle_used: cycle_used,
    }
}
