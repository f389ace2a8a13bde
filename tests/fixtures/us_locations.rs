//! Real US freight hub locations for realistic test fixtures.
//!
//! City-centre coordinates sourced from OpenStreetMap.

use trip_planner::polyline::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Router-native `[lng, lat]` pair.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

pub const CHICAGO: Location = Location::new("Chicago, IL", 41.8755616, -87.6244212);
pub const KANSAS_CITY: Location = Location::new("Kansas City, MO", 39.1000, -94.5781);
pub const DENVER: Location = Location::new("Denver, CO", 39.7392364, -104.984862);
pub const DALLAS: Location = Location::new("Dallas, TX", 32.7762719, -96.7968559);
pub const ATLANTA: Location = Location::new("Atlanta, GA", 33.7489924, -84.3902644);
pub const LOS_ANGELES: Location = Location::new("Los Angeles, CA", 34.0536909, -118.242766);

pub const HUBS: &[Location] = &[CHICAGO, KANSAS_CITY, DENVER, DALLAS, ATLANTA, LOS_ANGELES];
