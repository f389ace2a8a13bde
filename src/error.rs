//! Error types shared across the planner.

use thiserror::Error;

/// Failure talking to an external geocoding or routing provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (DNS, connect, reset).
    #[error("{0}")]
    Transport(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("provider responded with status {0}")]
    Status(u16),
    /// The response parsed but did not have the expected shape.
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::Status(status.as_u16())
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Terminal outcome of a route calculation.
///
/// `Display` is the user-facing message; the `detail` fields only go to logs.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("{0}")]
    Validation(String),
    #[error("Failed to geocode one or more locations")]
    Geocoding { detail: String },
    #[error("Failed to calculate route")]
    Routing { detail: String },
    #[error("Geoapify API error: {0}")]
    Transport(String),
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl PlanError {
    pub fn missing_field(name: &str) -> Self {
        PlanError::Validation(format!("Missing field: {name}"))
    }

    /// Classifies a geocoder failure. Connectivity problems stay transport
    /// errors, everything else is a geocoding failure.
    pub fn from_geocoder(address: &str, err: ProviderError) -> Self {
        match err {
            ProviderError::Transport(msg) => PlanError::Transport(msg),
            other => PlanError::Geocoding {
                detail: format!("{address}: {other}"),
            },
        }
    }

    pub fn from_router(err: ProviderError) -> Self {
        match err {
            ProviderError::Transport(msg) => PlanError::Transport(msg),
            other => PlanError::Routing {
                detail: other.to_string(),
            },
        }
    }
}

/// Record store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("trip {0} not found")]
    NotFound(u64),
    #[error("trip store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
