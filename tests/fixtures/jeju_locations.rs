//! Real Jeju island locations for realistic test fixtures.
//!
//! Coordinates are approximate (OpenStreetMap, rounded to 4 decimals). Every
//! entry sits inside its region's radius so classification is unambiguous.

#![allow(dead_code)]

use itinerary_router::clock::ClockTime;
use itinerary_router::itinerary::{Category, Coordinate, Waypoint};

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Waypoint with a one-hour stay and no schedule yet.
    pub fn waypoint(&self, category: Category) -> Waypoint {
        Waypoint::new(self.name, self.name, category, self.coords())
    }
}

// ============================================================================
// Jeju City (north coast hub)
// ============================================================================

pub const JEJU_AIRPORT: Location = Location::new("Jeju International Airport", 33.5104, 126.4914);
pub const DONGMUN_MARKET: Location = Location::new("Dongmun Market", 33.5125, 126.5280);
pub const YONGDUAM: Location = Location::new("Yongduam Rock", 33.5163, 126.5120);
pub const IHO_TEWOO: Location = Location::new("Iho Tewoo Beach", 33.4977, 126.4531);
pub const SAMYANG_BEACH: Location = Location::new("Samyang Black Sand Beach", 33.5258, 126.5860);

// ============================================================================
// Seogwipo (south coast)
// ============================================================================

pub const CHEONJIYEON: Location = Location::new("Cheonjiyeon Falls", 33.2448, 126.5594);
pub const JEONGBANG: Location = Location::new("Jeongbang Falls", 33.2448, 126.5717);
pub const OLLE_MARKET: Location = Location::new("Seogwipo Maeil Olle Market", 33.2497, 126.5635);
pub const SOESOKKAK: Location = Location::new("Soesokkak Estuary", 33.2524, 126.6230);
pub const JUNGMUN_BEACH: Location = Location::new("Jungmun Saekdal Beach", 33.2446, 126.4104);

// ============================================================================
// East
// ============================================================================

pub const SEONGSAN: Location = Location::new("Seongsan Ilchulbong", 33.4581, 126.9425);
pub const SEOPJIKOJI: Location = Location::new("Seopjikoji", 33.4240, 126.9308);
pub const UDO: Location = Location::new("Udo Island", 33.5000, 126.9530);
pub const BIJARIM: Location = Location::new("Bijarim Forest", 33.4860, 126.8070);
pub const SEONGEUP: Location = Location::new("Seongeup Folk Village", 33.3870, 126.8010);

// ============================================================================
// West
// ============================================================================

pub const HYEOPJAE: Location = Location::new("Hyeopjae Beach", 33.3940, 126.2397);
pub const HALLIM_PARK: Location = Location::new("Hallim Park", 33.3894, 126.2393);
pub const AEWOL_HANDAM: Location = Location::new("Aewol Handam Coastal Walk", 33.4625, 126.3100);
pub const OSULLOC: Location = Location::new("O'sulloc Tea Museum", 33.3058, 126.2895);

// ============================================================================
// Midlands
// ============================================================================

pub const EORIMOK: Location = Location::new("Eorimok Trailhead", 33.3920, 126.4960);
pub const SEONGPANAK: Location = Location::new("Seongpanak Trailhead", 33.3850, 126.6200);

pub fn at(hours: u32, minutes: u32) -> ClockTime {
    ClockTime::from_hm(hours, minutes)
}

/// A day that zig-zags across the island: north, west, east, north, south,
/// east, west.
pub fn zigzag_day() -> Vec<Waypoint> {
    vec![
        JEJU_AIRPORT.waypoint(Category::Sightseeing).at(at(9, 0)),
        HYEOPJAE.waypoint(Category::Sightseeing),
        SEONGSAN.waypoint(Category::Sightseeing).duration(90),
        DONGMUN_MARKET.waypoint(Category::Restaurant).cost(15000),
        CHEONJIYEON.waypoint(Category::Sightseeing),
        UDO.waypoint(Category::Cafe).duration(45).cost(6000),
        AEWOL_HANDAM.waypoint(Category::Sightseeing),
    ]
}

/// A Seogwipo-only day listed out of order.
pub fn seogwipo_day() -> Vec<Waypoint> {
    vec![
        CHEONJIYEON.waypoint(Category::Sightseeing).at(at(10, 0)),
        JUNGMUN_BEACH.waypoint(Category::Sightseeing),
        OLLE_MARKET.waypoint(Category::Restaurant).cost(12000),
        SOESOKKAK.waypoint(Category::Sightseeing),
        JEONGBANG.waypoint(Category::Sightseeing),
    ]
}

/// East and Midlands, starting on the east coast.
pub fn east_day() -> Vec<Waypoint> {
    vec![
        SEONGSAN.waypoint(Category::Sightseeing).at(at(7, 0)),
        SEONGPANAK.waypoint(Category::Sightseeing).duration(240),
        UDO.waypoint(Category::Sightseeing).duration(120),
        BIJARIM.waypoint(Category::Sightseeing),
        SEOPJIKOJI.waypoint(Category::Sightseeing),
        SEONGEUP.waypoint(Category::Lodging).cost(90000),
    ]
}
