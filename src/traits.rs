//! Core seam for the route optimizer.
//!
//! The optimizer only needs to know where something is. Host apps can
//! implement [`Located`] for their own place types and reuse classification,
//! ordering and backtracking detection without converting to [`Waypoint`].
//!
//! [`Waypoint`]: crate::itinerary::Waypoint

use crate::itinerary::Coordinate;

/// Anything that sits at a single geographic coordinate.
pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}
