//! Sequential schedule recomputation for an already-ordered day.
//!
//! Walks the stops in order and derives each arrival from the previous
//! arrival, stay and travel leg. Does NOT reorder anything.

use crate::haversine::{TransportMode, distance_km, travel_time_minutes};
use crate::itinerary::Waypoint;

/// Recompute arrival times and outgoing travel times.
///
/// The first stop keeps its time. Every following stop arrives at
/// `prev.time + prev.duration + travel`, with no rollover past midnight.
/// The last stop ends up with no outgoing travel time.
pub fn recalc_schedule(points: &[Waypoint], mode: TransportMode) -> Vec<Waypoint> {
    let mut scheduled = points.to_vec();

    for next in 1..scheduled.len() {
        let prev = next - 1;
        let km = distance_km(scheduled[prev].coordinate, scheduled[next].coordinate);
        let travel = travel_time_minutes(km, mode);

        scheduled[prev].travel_time = Some(travel);
        scheduled[next].time = scheduled[prev]
            .time
            .add_minutes(scheduled[prev].duration)
            .add_minutes(travel);
    }

    if let Some(last) = scheduled.last_mut() {
        last.travel_time = None;
    }

    scheduled
}
