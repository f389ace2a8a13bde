//! Geoapify HTTP adapter for geocoding and driving routes.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::polyline::GeoPoint;
use crate::traits::{DrivingRoute, Geocoder, RouteProvider};

#[derive(Debug, Clone)]
pub struct GeoapifyConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl GeoapifyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for GeoapifyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.geoapify.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

/// Blocking client. Build it outside any async runtime and call it from
/// blocking threads only.
#[derive(Debug, Clone)]
pub struct GeoapifyClient {
    config: GeoapifyConfig,
    client: reqwest::blocking::Client,
}

impl GeoapifyClient {
    pub fn new(config: GeoapifyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()?
            .error_for_status()?;

        Ok(response.json::<T>()?)
    }
}

impl Geocoder for GeoapifyClient {
    fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, ProviderError> {
        let body: GeocodeResponse = self.get_json("/v1/geocode/search", &[("text", address)])?;

        let Some(feature) = body.features.into_iter().next() else {
            return Ok(None);
        };

        lng_lat(&feature.geometry.coordinates)
            .map(|pair| Some(GeoPoint::from_lng_lat(pair)))
    }
}

impl RouteProvider for GeoapifyClient {
    fn route(&self, waypoints: &[GeoPoint]) -> Result<DrivingRoute, ProviderError> {
        let waypoints = waypoints
            .iter()
            .map(GeoPoint::to_waypoint)
            .collect::<Vec<_>>()
            .join("|");

        let body: RouteResponse = self.get_json(
            "/v1/routing",
            &[("waypoints", waypoints.as_str()), ("mode", "drive")],
        )?;

        let feature = body
            .features
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("no route feature".to_string()))?;

        let segments = feature
            .geometry
            .coordinates
            .iter()
            .map(|segment| segment.iter().map(|point| lng_lat(point)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        let distance_meters = feature
            .properties
            .distance
            .ok_or_else(|| ProviderError::Malformed("route has no distance".to_string()))?;
        let duration_seconds = feature
            .properties
            .time
            .ok_or_else(|| ProviderError::Malformed("route has no time".to_string()))?;

        Ok(DrivingRoute {
            segments,
            distance_meters,
            duration_seconds,
        })
    }
}

fn lng_lat(values: &[f64]) -> Result<[f64; 2], ProviderError> {
    match values {
        [lng, lat, ..] => Ok([*lng, *lat]),
        _ => Err(ProviderError::Malformed(format!(
            "coordinate has {} components",
            values.len()
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    features: Vec<RouteFeature>,
}

#[derive(Debug, Deserialize)]
struct RouteFeature {
    geometry: LineGeometry,
    #[serde(default)]
    properties: RouteProperties,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Default, Deserialize)]
struct RouteProperties {
    distance: Option<f64>,
    time: Option<f64>,
}
