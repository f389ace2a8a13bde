//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::planner::TripRequest;

/// Body of `POST /calculate_route/`. Every field is optional here so a
/// missing one can be reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRouteRequest {
    pub current_location: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub current_cycle_used: Option<f64>,
}

impl CalculateRouteRequest {
    /// Checks field presence in declaration order. Blank addresses count as
    /// missing.
    pub fn validate(self) -> Result<TripRequest, PlanError> {
        Ok(TripRequest {
            current_location: required_text("current_location", self.current_location)?,
            pickup_location: required_text("pickup_location", self.pickup_location)?,
            dropoff_location: required_text("dropoff_location", self.dropoff_location)?,
            current_cycle_used: self
                .current_cycle_used
                .ok_or_else(|| PlanError::missing_field("current_cycle_used"))?,
        })
    }
}

fn required_text(name: &str, value: Option<String>) -> Result<String, PlanError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| PlanError::missing_field(name))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
