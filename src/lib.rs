//! itinerary-router core
//!
//! Orders the stops of a multi-day Jeju trip region by region, recomputes
//! visit times and scores how efficient each day's route is. Pure,
//! synchronous functions over immutable inputs.

pub mod traits;
pub mod haversine;
pub mod itinerary;
pub mod clock;
pub mod error;
pub mod regions;
pub mod sequencer;
pub mod solver;
pub mod schedule;
pub mod efficiency;
pub mod cost;
