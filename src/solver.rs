//! Route optimizer: nearest-neighbor construction plus bounded 2-opt,
//! applied per region and stitched together in macro region order.
//!
//! All entry points take their input by reference and return a new
//! sequence. Output depends only on input, so re-running after every edit
//! is idempotent.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::haversine::{TransportMode, distance_km, path_distance_km};
use crate::itinerary::{Coordinate, DayPlan};
use crate::regions::{classify_region, group_by_region};
use crate::schedule::recalc_schedule;
use crate::sequencer::optimal_region_order;
use crate::traits::Located;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerOptions {
    /// Minimum gain in km for a 2-opt move to be applied.
    pub improvement_threshold_km: f64,
    /// Hard cap on full 2-opt passes.
    pub max_two_opt_passes: usize,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            improvement_threshold_km: 0.1,
            max_two_opt_passes: 100,
        }
    }
}

/// Greedy tour from the first point, always moving to the closest
/// remaining point. Ties go to the earliest candidate.
///
/// Two points or fewer come back unchanged.
pub fn nearest_neighbor<P>(points: &[P]) -> Vec<P>
where
    P: Located + Clone,
{
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut tour = Vec::with_capacity(points.len());
    tour.push(points[0].clone());
    let mut remaining: Vec<&P> = points[1..].iter().collect();
    let mut current = points[0].coordinate();

    while !remaining.is_empty() {
        let next = remaining.remove(nearest_index(current, &remaining));
        current = next.coordinate();
        tour.push(next.clone());
    }

    tour
}

/// 2-opt local search with position 0 fixed.
///
/// Reverses `route[i..=j]` for `1 <= i < j <= n - 2` whenever that shortens
/// the path by more than `improvement_threshold_km`, and repeats full passes
/// until one finds no move or `max_two_opt_passes` is reached. The result is
/// never longer than the input.
pub fn two_opt<P>(points: &[P], options: &OptimizerOptions) -> Vec<P>
where
    P: Located + Clone,
{
    let mut route = points.to_vec();
    if route.len() <= 3 {
        return route;
    }

    let n = route.len();
    let mut passes = 0;
    let mut improved = true;

    while improved && passes < options.max_two_opt_passes {
        improved = false;
        passes += 1;

        for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                let current = leg_km(&route, i - 1, i) + leg_km(&route, j, j + 1);
                let candidate = leg_km(&route, i - 1, j) + leg_km(&route, i, j + 1);

                if candidate < current - options.improvement_threshold_km {
                    route[i..=j].reverse();
                    improved = true;
                    trace!(i, j, gain_km = current - candidate, "2-opt move");
                }
            }
        }
    }

    debug!(points = n, passes, converged = !improved, "2-opt finished");
    route
}

/// Nearest-neighbor followed by 2-opt. The first point stays first.
pub fn optimize_cluster<P>(points: &[P], options: &OptimizerOptions) -> Vec<P>
where
    P: Located + Clone,
{
    two_opt(&nearest_neighbor(points), options)
}

/// Reorder one day's stops.
///
/// Single-region days are optimized as one cluster. Multi-region days are
/// visited in [`optimal_region_order`] starting from the first stop's
/// region; each region after the first is re-rooted at the member closest
/// to the previous region's last stop before being optimized. That greedy
/// stitching keeps the jump between regions short but is not globally
/// optimal.
///
/// Days with two stops or fewer are returned unchanged.
pub fn optimize_day_route<P>(points: &[P], options: &OptimizerOptions) -> Vec<P>
where
    P: Located + Clone,
{
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut grouped = group_by_region(points);
    if grouped.len() <= 1 {
        return optimize_cluster(points, options);
    }

    let start = classify_region(points[0].coordinate());
    let regions: Vec<_> = grouped.keys().copied().collect();

    let mut route: Vec<P> = Vec::with_capacity(points.len());
    for region in optimal_region_order(start, &regions) {
        let Some(mut bucket) = grouped.remove(&region) else {
            continue;
        };
        if bucket.is_empty() {
            continue;
        }

        if let Some(last) = route.last() {
            let nearest = nearest_index(last.coordinate(), &bucket);
            let entry = bucket.remove(nearest);
            bucket.insert(0, entry);
        }

        route.extend(optimize_cluster(&bucket, options));
    }

    // Regions the macro order did not cover keep their input order.
    for (_, bucket) in grouped {
        route.extend(bucket);
    }

    route
}

/// Optimize every day and recompute its schedule.
///
/// Days are independent and processed in parallel; output order matches
/// input order.
pub fn optimize_trip(
    days: &[DayPlan],
    mode: TransportMode,
    options: &OptimizerOptions,
) -> Vec<DayPlan> {
    days.par_iter()
        .map(|day| {
            let ordered = optimize_day_route(&day.waypoints, options);
            let scheduled = recalc_schedule(&ordered, mode);

            debug!(
                day = day.day,
                stops = scheduled.len(),
                before_km = path_distance_km(&day.waypoints),
                after_km = path_distance_km(&scheduled),
                "optimized day"
            );

            day.with_waypoints(scheduled)
        })
        .collect()
}

/// Index of the candidate closest to `from`. First wins on ties.
fn nearest_index<P: Located>(from: Coordinate, candidates: &[P]) -> usize {
    let mut nearest = 0;
    let mut nearest_km = f64::INFINITY;

    for (index, candidate) in candidates.iter().enumerate() {
        let km = distance_km(from, candidate.coordinate());
        if km < nearest_km {
            nearest_km = km;
            nearest = index;
        }
    }

    nearest
}

fn leg_km<P: Located>(route: &[P], from: usize, to: usize) -> f64 {
    distance_km(route[from].coordinate(), route[to].coordinate())
}
