//! Route quality diagnostics: distance, travel time, region order,
//! backtracking and a composite 0-100 score.
//!
//! Purely derived from the input; safe to call before and after
//! optimization for comparison.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::haversine::{TransportMode, distance_km, path_distance_km};
use crate::itinerary::{DayPlan, Waypoint};
use crate::regions::{Region, region_sequence};
use crate::traits::Located;

const BACKTRACK_SCORE_PENALTY: i64 = 15;
const CHOPPY_CHANGE_PENALTY: i64 = 5;
/// Region changes allowed beyond the minimum before penalizing.
const CHANGE_TOLERANCE: usize = 2;

const BACKTRACK_EFFICIENCY_PENALTY: u32 = 10;
const MAX_BACKTRACK_EFFICIENCY_PENALTY: u32 = 30;

/// Path-to-direct distance ratio considered normal for a multi-stop day.
const ACCEPTABLE_DETOUR_RATIO: f64 = 2.0;
const DETOUR_PENALTY_PER_RATIO: f64 = 20.0;

const REGION_WEIGHT: f64 = 0.5;
const BACKTRACK_WEIGHT: f64 = 0.3;
const DISTANCE_WEIGHT: f64 = 0.2;

/// Summary of one day (or a whole trip).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyMetrics {
    /// Kilometers, rounded to one decimal.
    #[serde(rename = "totalDistance")]
    pub total_distance_km: f64,
    /// Minutes, summed from stored travel times.
    pub total_travel_time: u32,
    pub region_score: u32,
    pub backtrack_count: usize,
    pub efficiency_score: u32,
}

impl Default for EfficiencyMetrics {
    /// Neutral metrics for an empty route.
    fn default() -> Self {
        Self {
            total_distance_km: 0.0,
            total_travel_time: 0,
            region_score: 100,
            backtrack_count: 0,
            efficiency_score: 100,
        }
    }
}

/// Re-entry into a region that was left earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backtrack {
    pub from_index: usize,
    pub to_index: usize,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BacktrackReport {
    pub count: usize,
    pub details: Vec<Backtrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEfficiency {
    #[serde(rename = "days")]
    pub per_day: Vec<EfficiencyMetrics>,
    pub overall: EfficiencyMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Kilometers saved, rounded to one decimal. Negative if worse.
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Travel minutes saved. Negative if worse.
    #[serde(rename = "time")]
    pub travel_minutes: i64,
    /// Score gained (after minus before).
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub before: EfficiencyMetrics,
    pub after: EfficiencyMetrics,
    pub improvement: Improvement,
}

/// Find every point where the route re-enters a region it already left.
///
/// Staying in the same region is not a backtrack. Fewer than three points
/// can never backtrack.
pub fn detect_backtracking<P: Located>(points: &[P]) -> BacktrackReport {
    let details = backtracks_in(&region_sequence(points));
    BacktrackReport {
        count: details.len(),
        details,
    }
}

fn backtracks_in(regions: &[Region]) -> Vec<Backtrack> {
    let mut details = Vec::new();
    let Some((&first, rest)) = regions.split_first() else {
        return details;
    };
    if regions.len() < 3 {
        return details;
    }

    let mut visited = HashSet::from([first]);
    let mut last = first;

    for (offset, &region) in rest.iter().enumerate() {
        if region == last {
            continue;
        }
        let index = offset + 1;
        if visited.contains(&region) {
            details.push(Backtrack {
                from_index: index - 1,
                to_index: index,
                region,
            });
        }
        visited.insert(region);
        last = region;
    }

    details
}

/// 0-100 score of how cleanly a region sequence sweeps the island.
///
/// Loses 15 per return to an earlier region and 5 per region change beyond
/// the minimum plus two. Two entries or fewer score 100.
pub fn region_order_score(regions: &[Region]) -> u32 {
    if regions.len() <= 2 {
        return 100;
    }

    let mut visited = HashSet::new();
    let mut backtracks = 0i64;
    for (i, region) in regions.iter().enumerate() {
        if visited.contains(region) && !(i > 0 && regions[i - 1] == *region) {
            backtracks += 1;
        }
        visited.insert(*region);
    }

    let mut score = 100 - backtracks * BACKTRACK_SCORE_PENALTY;

    let changes = regions.windows(2).filter(|pair| pair[0] != pair[1]).count();
    let tolerated = visited.len() - 1 + CHANGE_TOLERANCE;
    if changes > tolerated {
        score -= (changes - tolerated) as i64 * CHOPPY_CHANGE_PENALTY;
    }

    score.clamp(0, 100) as u32
}

/// Metrics for one ordered day.
///
/// Travel time is read from the stops as stored, so `_mode` does not change
/// the result; reschedule first if stored times are stale.
pub fn efficiency(points: &[Waypoint], _mode: TransportMode) -> EfficiencyMetrics {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return EfficiencyMetrics::default();
    };

    let total_distance = path_distance_km(points);
    let total_travel_time = points
        .iter()
        .map(|point| point.travel_time.unwrap_or(0))
        .fold(0u32, u32::saturating_add);

    let regions = region_sequence(points);
    let region_score = region_order_score(&regions);
    let backtrack_count = backtracks_in(&regions).len();

    let backtrack_penalty = (backtrack_count as u32)
        .saturating_mul(BACKTRACK_EFFICIENCY_PENALTY)
        .min(MAX_BACKTRACK_EFFICIENCY_PENALTY);

    let mut distance_efficiency = 100.0;
    if points.len() >= 2 {
        let direct = distance_km(first.coordinate, last.coordinate);
        if direct > 0.0 {
            let ratio = total_distance / direct;
            let penalty = (ratio - ACCEPTABLE_DETOUR_RATIO).max(0.0) * DETOUR_PENALTY_PER_RATIO;
            distance_efficiency = (100.0 - penalty).max(0.0);
        }
    }

    let composite = f64::from(region_score) * REGION_WEIGHT
        + f64::from(100 - backtrack_penalty) * BACKTRACK_WEIGHT
        + distance_efficiency * DISTANCE_WEIGHT;

    EfficiencyMetrics {
        total_distance_km: round_tenth(total_distance),
        total_travel_time,
        region_score,
        backtrack_count,
        efficiency_score: composite.round().clamp(0.0, 100.0) as u32,
    }
}

/// Per-day metrics plus a trip-wide summary.
///
/// Overall distance, travel time and backtracks are sums; the two scores are
/// rounded means. An empty trip gets neutral metrics.
pub fn analyze_trip(days: &[DayPlan], mode: TransportMode) -> TripEfficiency {
    let per_day: Vec<EfficiencyMetrics> = days
        .par_iter()
        .map(|day| efficiency(&day.waypoints, mode))
        .collect();

    if per_day.is_empty() {
        return TripEfficiency {
            per_day,
            overall: EfficiencyMetrics::default(),
        };
    }

    let count = per_day.len() as f64;
    let mean = |score: fn(&EfficiencyMetrics) -> u32| {
        let sum: f64 = per_day.iter().map(|day| f64::from(score(day))).sum();
        (sum / count).round() as u32
    };

    let overall = EfficiencyMetrics {
        total_distance_km: per_day.iter().map(|day| day.total_distance_km).sum(),
        total_travel_time: per_day
            .iter()
            .map(|day| day.total_travel_time)
            .fold(0u32, u32::saturating_add),
        region_score: mean(|day| day.region_score),
        backtrack_count: per_day.iter().map(|day| day.backtrack_count).sum(),
        efficiency_score: mean(|day| day.efficiency_score),
    };

    TripEfficiency { per_day, overall }
}

/// Metrics before and after a change, and what the change bought.
pub fn compare_routes(
    before: &[Waypoint],
    after: &[Waypoint],
    mode: TransportMode,
) -> RouteComparison {
    let before = efficiency(before, mode);
    let after = efficiency(after, mode);

    RouteComparison {
        before,
        after,
        improvement: Improvement {
            distance_km: round_tenth(before.total_distance_km - after.total_distance_km),
            travel_minutes: i64::from(before.total_travel_time) - i64::from(after.total_travel_time),
            score: i64::from(after.efficiency_score) - i64::from(before.efficiency_score),
        },
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use Region::*;

    #[test]
    fn test_region_score_clean_sweep() {
        assert_eq!(region_order_score(&[JejuCity, JejuCity, East, East, Seogwipo]), 100);
    }

    #[test]
    fn test_region_score_short_sequences() {
        assert_eq!(region_order_score(&[]), 100);
        assert_eq!(region_order_score(&[East, West]), 100);
    }

    #[test]
    fn test_region_score_backtrack_penalty() {
        // One return to JejuCity: -15
        assert_eq!(region_order_score(&[JejuCity, East, JejuCity]), 85);
    }

    #[test]
    fn test_region_score_choppy_penalty() {
        // 2 distinct regions, 5 changes, tolerance 1 + 2 = 3 -> 2 excess (-10);
        // every entry after the second is a return -> 4 backtracks (-60)
        let regions = [JejuCity, East, JejuCity, East, JejuCity, East];
        assert_eq!(region_order_score(&regions), 100 - 60 - 10);
    }

    #[test]
    fn test_region_score_clamps_at_zero() {
        let regions = [JejuCity, East].repeat(10);
        assert_eq!(region_order_score(&regions), 0);
    }

    #[test]
    fn test_backtracks_in_reports_reentry_index() {
        let details = backtracks_in(&[East, East, East, West, East]);
        assert_eq!(
            details,
            vec![Backtrack {
                from_index: 3,
                to_index: 4,
                region: East,
            }]
        );
    }

    #[test]
    fn test_backtracks_need_three_points() {
        assert!(backtracks_in(&[East, West]).is_empty());
        assert!(backtracks_in(&[]).is_empty());
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(12.34), 12.3);
        assert_eq!(round_tenth(12.36), 12.4);
        assert_eq!(round_tenth(0.0), 0.0);
    }
}
