//! Test fixtures for trip-planner.
//!
//! Provides:
//! - Real US freight hub locations (from OpenStreetMap)
//! - Fixed-answer geocoder, router and store doubles

#![allow(dead_code)]

pub mod us_locations;
pub mod providers;

pub use providers::*;
pub use us_locations::*;
