//! Itinerary data model shared with the planning service and the UI.
//!
//! Field names serialize in camelCase to match the JSON the trip
//! planner produces. Every operation in this crate takes these by shared
//! reference and returns new values; nothing is mutated in place.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::traits::Located;

/// Default stay at a place when the planner leaves it unspecified.
const DEFAULT_STAY_MINUTES: u32 = 60;

/// Latitude/longitude in degrees.
///
/// No range validation: out-of-range or NaN values are carried through and
/// degrade to meaningless but finite distances downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Kind of place. Display labels and icons belong to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sightseeing,
    Restaurant,
    Cafe,
    Lodging,
}

/// A single scheduled stop within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    #[serde(rename = "placeId")]
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default)]
    pub cost: u32,
    /// Stay duration in minutes.
    #[serde(default = "default_stay_minutes")]
    pub duration: u32,
    /// Scheduled arrival.
    pub time: ClockTime,
    /// Minutes to the next stop. `None` on the last stop of a day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<u32>,
}

fn default_stay_minutes() -> u32 {
    DEFAULT_STAY_MINUTES
}

impl Waypoint {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        coordinate: impl Into<Coordinate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            coordinate: coordinate.into(),
            cost: 0,
            duration: DEFAULT_STAY_MINUTES,
            time: ClockTime::default(),
            travel_time: None,
        }
    }

    pub fn cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn at(mut self, time: ClockTime) -> Self {
        self.time = time;
        self
    }

    pub fn travel_time(mut self, minutes: Option<u32>) -> Self {
        self.travel_time = minutes;
        self
    }
}

impl Located for Waypoint {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// One day of a trip. Position 0 is the anchor: its time is input, never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    /// Free-form label such as "Jan 15 (Mon)".
    pub date: String,
    #[serde(rename = "places")]
    pub waypoints: Vec<Waypoint>,
}

impl DayPlan {
    pub fn new(day: u32, date: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        Self {
            day,
            date: date.into(),
            waypoints,
        }
    }

    /// Same day and date with a replacement stop list.
    pub fn with_waypoints(&self, waypoints: Vec<Waypoint>) -> Self {
        Self {
            day: self.day,
            date: self.date.clone(),
            waypoints,
        }
    }
}
