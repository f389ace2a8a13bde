//! trip-planner core
//!
//! Turns current, pickup and dropoff addresses into a driving route plus a
//! simplified Hours-of-Service duty schedule, and records each planned trip.

pub mod config;
pub mod error;
pub mod geoapify;
pub mod http;
pub mod planner;
pub mod polyline;
pub mod schedule;
pub mod store;
pub mod traits;
