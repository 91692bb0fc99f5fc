//! The five fixed regions of Jeju island and how points map onto them.
//!
//! Region definitions and pairwise travel times are compiled-in, read-only
//! tables. Classification is total: every coordinate, including NaN, maps to
//! exactly one region.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::itinerary::Coordinate;
use crate::traits::Located;

/// Average minutes between two regions when the table has no entry.
pub const DEFAULT_REGION_TRAVEL_MINUTES: u32 = 45;

/// A macro region of the island.
///
/// The declaration order is the fixed tie-break order for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Jeju City, the airport and port hub on the north coast.
    JejuCity,
    /// Seogwipo and Jungmun on the south coast.
    Seogwipo,
    /// Seongsan, Udo and the north-east coast.
    East,
    /// Aewol, Hallim and the west coast.
    West,
    /// Hallasan and the mid-mountain belt.
    Midlands,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::JejuCity,
        Region::Seogwipo,
        Region::East,
        Region::West,
        Region::Midlands,
    ];

    pub fn info(self) -> &'static RegionInfo {
        match self {
            Region::JejuCity => &REGIONS[0],
            Region::Seogwipo => &REGIONS[1],
            Region::East => &REGIONS[2],
            Region::West => &REGIONS[3],
            Region::Midlands => &REGIONS[4],
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static definition of a region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInfo {
    pub region: Region,
    pub name: &'static str,
    pub center: Coordinate,
    /// Containment radius in kilometers.
    pub radius_km: f64,
    pub subregions: &'static [&'static str],
    pub description: &'static str,
}

impl RegionInfo {
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        distance_km(coordinate, self.center) <= self.radius_km
    }
}

/// Region table, in tie-break order.
pub static REGIONS: [RegionInfo; 5] = [
    RegionInfo {
        region: Region::JejuCity,
        name: "Jeju City",
        center: Coordinate::new(33.5097, 126.5219),
        radius_km: 12.0,
        subregions: &["Jeju downtown", "Jocheon", "Gujwa", "Airport"],
        description: "Jeju airport, Dongmun market, Yongduam rock, Iho Tewoo beach",
    },
    RegionInfo {
        region: Region::Seogwipo,
        name: "Seogwipo",
        center: Coordinate::new(33.2541, 126.5601),
        radius_km: 15.0,
        subregions: &["Seogwipo downtown", "Jungmun", "Namwon", "Pyoseon"],
        description: "Cheonjiyeon and Jeongbang falls, Jungmun resort, Seogwipo harbor",
    },
    RegionInfo {
        region: Region::East,
        name: "East",
        center: Coordinate::new(33.4567, 126.9200),
        radius_km: 15.0,
        subregions: &["Seongsan", "Seopjikoji", "Udo", "Gimnyeong", "Woljeong-ri"],
        description: "Seongsan Ilchulbong, Seopjikoji, Udo island, Woljeong-ri beach",
    },
    RegionInfo {
        region: Region::West,
        name: "West",
        center: Coordinate::new(33.4012, 126.2500),
        radius_km: 15.0,
        subregions: &["Aewol", "Hallim", "Hyeopjae", "Hangyeong"],
        description: "Aewol cafe street, Hyeopjae beach, Hallim park, O'sulloc",
    },
    RegionInfo {
        region: Region::Midlands,
        name: "Midlands",
        center: Coordinate::new(33.3617, 126.5292),
        radius_km: 12.0,
        subregions: &["Hallasan", "1100 Highland", "Bijarim", "Sangumburi", "Ecoland"],
        description: "Hallasan, 1100 Highland, Sangumburi crater, Bijarim forest",
    },
];

/// Assign a coordinate to exactly one region.
///
/// Among regions whose radius contains the point, the one with the smallest
/// center distance wins. If none contains it, the globally nearest center
/// wins. Exact ties go to the earlier region in [`Region::ALL`]. An unusable
/// coordinate is equally far from every center, so it lands in
/// [`Region::JejuCity`].
pub fn classify_region(coordinate: Coordinate) -> Region {
    let mut containing: Option<(Region, f64)> = None;
    let mut nearest = (REGIONS[0].region, f64::INFINITY);

    for info in &REGIONS {
        let distance = distance_km(coordinate, info.center);

        if distance <= info.radius_km && containing.is_none_or(|(_, best)| distance < best) {
            containing = Some((info.region, distance));
        }
        if distance < nearest.1 {
            nearest = (info.region, distance);
        }
    }

    containing.unwrap_or(nearest).0
}

/// Partition points by region, preserving input order within each bucket.
pub fn group_by_region<P>(points: &[P]) -> BTreeMap<Region, Vec<P>>
where
    P: Located + Clone,
{
    let mut groups: BTreeMap<Region, Vec<P>> = BTreeMap::new();
    for point in points {
        groups
            .entry(classify_region(point.coordinate()))
            .or_default()
            .push(point.clone());
    }
    groups
}

/// Region of every point, in sequence.
pub fn region_sequence<P: Located>(points: &[P]) -> Vec<Region> {
    points
        .iter()
        .map(|point| classify_region(point.coordinate()))
        .collect()
}

/// Average driving minutes between two regions.
pub fn region_travel_minutes(a: Region, b: Region) -> u32 {
    use Region::*;

    if a == b {
        return 0;
    }

    match (a.min(b), a.max(b)) {
        (JejuCity, Seogwipo) => 50,
        (JejuCity, East) => 40,
        (JejuCity, West) => 35,
        (JejuCity, Midlands) => 30,
        (Seogwipo, East) => 45,
        (Seogwipo, West) => 40,
        (Seogwipo, Midlands) => 25,
        (East, West) => 70,
        (East, Midlands) => 35,
        (West, Midlands) => 30,
        _ => DEFAULT_REGION_TRAVEL_MINUTES,
    }
}

/// Sum of region-to-region minutes along a macro order.
pub fn macro_travel_minutes(order: &[Region]) -> u32 {
    order
        .windows(2)
        .map(|pair| region_travel_minutes(pair[0], pair[1]))
        .sum()
}
