//! Polyline representation for route geometries.
//!
//! Providers hand back geometry as nested per-segment lists of `[lng, lat]`
//! pairs. This module flattens them into one ordered `(lat, lng)` sequence,
//! which is the order every outward-facing payload uses.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
///
/// Serializes as a two-element `[lat, lng]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from a provider's `[lng, lat]` pair.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }

    /// `lat,lng` with six decimals, the waypoint syntax routers expect.
    pub fn to_waypoint(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lng)
    }
}

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a new Polyline from points already in `(lat, lng)` order.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Flattens per-segment `[lng, lat]` lists into a single path,
    /// preserving segment order and point order within each segment.
    pub fn from_lng_lat_segments(segments: &[Vec<[f64; 2]>]) -> Self {
        let points = segments
            .iter()
            .flat_map(|segment| segment.iter().copied().map(GeoPoint::from_lng_lat))
            .collect();
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Picks `count` markers that split the path into `count + 1` equal
    /// index ranges, taking the point at or just before each internal
    /// boundary. Boundaries that fall past the end are skipped, so the
    /// result never holds more than `count` points.
    pub fn evenly_spaced(&self, count: usize) -> Vec<GeoPoint> {
        if count == 0 || self.points.is_empty() {
            return Vec::new();
        }

        let segment_length = self.points.len() as f64 / (count + 1) as f64;
        (1..=count)
            .map(|i| (i as f64 * segment_length).floor() as usize)
            .filter_map(|index| self.points.get(index).copied())
            .collect()
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}
