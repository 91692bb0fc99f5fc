//! Trip cost totals by category.

use serde::{Deserialize, Serialize};

use crate::itinerary::{Category, DayPlan, Waypoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub accommodation: u64,
    pub food: u64,
    pub activity: u64,
    pub cafe: u64,
}

impl CostBreakdown {
    pub fn add(&mut self, waypoint: &Waypoint) {
        let cost = u64::from(waypoint.cost);
        let bucket = match waypoint.category {
            Category::Lodging => &mut self.accommodation,
            Category::Restaurant => &mut self.food,
            Category::Sightseeing => &mut self.activity,
            Category::Cafe => &mut self.cafe,
        };
        *bucket += cost;
    }

    pub fn total(&self) -> u64 {
        self.accommodation + self.food + self.activity + self.cafe
    }
}

/// Sum waypoint costs across every day of a trip.
pub fn cost_breakdown(days: &[DayPlan]) -> CostBreakdown {
    let mut breakdown = CostBreakdown::default();
    for waypoint in days.iter().flat_map(|day| &day.waypoints) {
        breakdown.add(waypoint);
    }
    breakdown
}
