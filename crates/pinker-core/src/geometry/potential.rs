//! Waypoints with range-constrained coordinates.

use crate::geometry::{Point, Range};

/// A connector waypoint whose coordinates are only known to lie within a
/// range on each axis.
///
/// Routing decides *which* edges a connector touches before deciding exactly
/// *where*; potential points carry that freedom until the path is resolved
/// into fixed [`Point`]s.
///
/// # Examples
///
/// ```
/// # use pinker_core::geometry::{Point, PotentialPoint, Range};
/// let waypoint = PotentialPoint::new(Range::single(40.0), Range::new(10.0, 30.0));
///
/// assert!(waypoint.is_stable_x());
/// assert_eq!(waypoint.middle_point(), Point::new(40.0, 20.0));
///
/// // Reuses the anchor's y when it falls inside the range
/// let anchor = Point::new(0.0, 12.0);
/// assert_eq!(waypoint.resolve_horizontal(Some(anchor)), Point::new(40.0, 12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialPoint {
    range_x: Range,
    range_y: Range,
}

impl PotentialPoint {
    pub fn new(range_x: Range, range_y: Range) -> Self {
        Self { range_x, range_y }
    }

    pub fn range_x(self) -> Range {
        self.range_x
    }

    pub fn range_y(self) -> Range {
        self.range_y
    }

    pub fn with_range_x(mut self, range_x: Range) -> Self {
        self.range_x = range_x;
        self
    }

    pub fn with_range_y(mut self, range_y: Range) -> Self {
        self.range_y = range_y;
        self
    }

    /// Returns `true` if the x coordinate is pinned to one value.
    pub fn is_stable_x(self) -> bool {
        self.range_x.is_single()
    }

    /// Returns `true` if the y coordinate is pinned to one value.
    pub fn is_stable_y(self) -> bool {
        self.range_y.is_single()
    }

    /// The point in the middle of both ranges.
    pub fn middle_point(self) -> Point {
        Point::new(self.range_x.middle(), self.range_y.middle())
    }

    /// Fixes this waypoint so that the segment from `anchor` is horizontal.
    ///
    /// The y coordinate of the anchor is reused when it lies within this
    /// waypoint's y range; otherwise the waypoint falls back to its middle.
    pub fn resolve_horizontal(self, anchor: Option<Point>) -> Point {
        match anchor {
            Some(anchor) if self.range_y.includes(anchor.y()) => {
                Point::new(self.range_x.middle(), anchor.y())
            }
            _ => self.middle_point(),
        }
    }

    /// Fixes this waypoint so that the segment from `anchor` is vertical.
    ///
    /// Mirror of [`PotentialPoint::resolve_horizontal`] on the other axis.
    pub fn resolve_vertical(self, anchor: Option<Point>) -> Point {
        match anchor {
            Some(anchor) if self.range_x.includes(anchor.x()) => {
                Point::new(anchor.x(), self.range_y.middle())
            }
            _ => self.middle_point(),
        }
    }
}
