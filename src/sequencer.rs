//! Macro ordering of regions within a day.
//!
//! Each template is a cyclic tour of the island. Filtering a template down to
//! the regions a day actually touches yields an order that never leaves a
//! region and comes back to it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::regions::{Region, classify_region, group_by_region};
use crate::traits::Located;

/// Precomputed cyclic region orders, keyed by starting situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderTemplate {
    /// Start in Jeju City, head east first (clockwise).
    HubEastFirst,
    /// Start in Jeju City, head west first (counter-clockwise).
    HubWestFirst,
    /// Start on the east coast, clockwise.
    FromEast,
    /// Start on the west coast, counter-clockwise.
    FromWest,
}

impl OrderTemplate {
    pub fn regions(self) -> &'static [Region; 5] {
        use Region::*;

        match self {
            OrderTemplate::HubEastFirst => &[JejuCity, East, Seogwipo, Midlands, West],
            OrderTemplate::HubWestFirst => &[JejuCity, West, Midlands, Seogwipo, East],
            OrderTemplate::FromEast => &[East, Seogwipo, Midlands, West, JejuCity],
            OrderTemplate::FromWest => &[West, JejuCity, East, Seogwipo, Midlands],
        }
    }

    /// Pick the template for a day starting in `start`.
    ///
    /// From the hub, the direction with more entries in `targets` goes first;
    /// a tie goes east. Starting anywhere other than the hub or an edge
    /// region falls back to the hub's east-first order.
    pub fn select(start: Region, targets: &[Region]) -> Self {
        match start {
            Region::JejuCity => {
                let east = targets.iter().filter(|r| **r == Region::East).count();
                let west = targets.iter().filter(|r| **r == Region::West).count();
                if east >= west {
                    OrderTemplate::HubEastFirst
                } else {
                    OrderTemplate::HubWestFirst
                }
            }
            Region::East => OrderTemplate::FromEast,
            Region::West => OrderTemplate::FromWest,
            Region::Seogwipo | Region::Midlands => OrderTemplate::HubEastFirst,
        }
    }
}

/// Order in which to visit `targets` when the day starts in `start`.
///
/// Duplicates in `targets` collapse to one entry. A region missing from the
/// chosen template is appended in first-seen order, so nothing is dropped.
pub fn optimal_region_order(start: Region, targets: &[Region]) -> Vec<Region> {
    let template = OrderTemplate::select(start, targets);

    let mut order: Vec<Region> = template
        .regions()
        .iter()
        .copied()
        .filter(|region| targets.contains(region))
        .collect();

    for region in targets {
        if !order.contains(region) {
            order.push(*region);
        }
    }

    debug!(?start, ?template, ?order, "selected region order");
    order
}

/// Arrange points region by region without touching intra-region order.
///
/// `start` defaults to the region of the first point. With at most one point
/// or a single region the input comes back unchanged.
pub fn sort_by_region_order<P>(points: &[P], start: Option<Region>) -> Vec<P>
where
    P: Located + Clone,
{
    if points.len() <= 1 {
        return points.to_vec();
    }

    let mut grouped = group_by_region(points);
    if grouped.len() <= 1 {
        return points.to_vec();
    }

    let start = start.unwrap_or_else(|| classify_region(points[0].coordinate()));
    let regions: Vec<Region> = grouped.keys().copied().collect();

    let mut sorted = Vec::with_capacity(points.len());
    for region in optimal_region_order(start, &regions) {
        if let Some(bucket) = grouped.remove(&region) {
            sorted.extend(bucket);
        }
    }
    // Anything the order did not cover keeps its bucket order.
    for (_, bucket) in grouped {
        sorted.extend(bucket);
    }

    sorted
}
