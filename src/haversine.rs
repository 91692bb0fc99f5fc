//! Great-circle distance and straight-line travel time estimates.
//!
//! Ignores the road network entirely. Travel time is distance over an
//! assumed average speed, plus a fixed wait for public transit.

use serde::{Deserialize, Serialize};

use crate::itinerary::Coordinate;
use crate::traits::Located;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Stand-in for legs whose endpoints are not real coordinates: one full
/// circumference, farther than any real pair of points.
pub const UNREACHABLE_KM: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KM;

/// Average driving speed for a rental car.
const CAR_SPEED_KMH: f64 = 40.0;

/// Average door-to-door speed on buses.
const TRANSIT_SPEED_KMH: f64 = 25.0;

/// Fixed wait added to every transit leg.
const TRANSIT_WAIT_MINUTES: f64 = 10.0;

/// How the traveller moves between stops. Chosen once per trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Car,
    Transit,
}

impl TransportMode {
    /// Assumed average speed in km/h.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Car => CAR_SPEED_KMH,
            TransportMode::Transit => TRANSIT_SPEED_KMH,
        }
    }

    /// Minutes added to every leg regardless of distance.
    pub fn wait_minutes(self) -> f64 {
        match self {
            TransportMode::Car => 0.0,
            TransportMode::Transit => TRANSIT_WAIT_MINUTES,
        }
    }

    /// Car when the traveller has a rental car, transit otherwise.
    pub fn from_has_rentcar(has_rentcar: bool) -> Self {
        if has_rentcar {
            TransportMode::Car
        } else {
            TransportMode::Transit
        }
    }
}

/// Haversine distance between two coordinates in kilometers.
///
/// Symmetric and zero for identical inputs. Always finite: NaN, infinite or
/// out-of-range inputs that break the formula give [`UNREACHABLE_KM`].
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let km = EARTH_RADIUS_KM * c;
    if km.is_finite() { km } else { UNREACHABLE_KM }
}

/// Convert a distance in km to whole travel minutes for the given mode.
///
/// Rounds half up. Negative or NaN distances clamp to zero travel.
pub fn travel_time_minutes(distance_km: f64, mode: TransportMode) -> u32 {
    let minutes = distance_km / mode.speed_kmh() * 60.0 + mode.wait_minutes();
    if minutes.is_nan() || minutes <= 0.0 {
        return 0;
    }
    // `as` saturates, so absurd distances cannot wrap.
    minutes.round() as u32
}

/// Sum of consecutive leg distances along a path.
pub fn path_distance_km<P: Located>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_km(pair[0].coordinate(), pair[1].coordinate()))
        .sum()
}
