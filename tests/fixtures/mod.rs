//! Test fixtures for itinerary-router.
//!
//! Provides real Jeju island locations grouped by region, plus helpers to
//! turn them into waypoints.

pub mod jeju_locations;

pub use jeju_locations::*;
