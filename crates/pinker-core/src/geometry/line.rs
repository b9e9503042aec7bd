//! Straight line segments and their intersections.

use crate::geometry::{Point, Range};

/// Slack allowed when testing whether a computed intersection lies on both
/// segments; box corners otherwise miss by a rounding error.
const INTERSECTION_TOLERANCE: f32 = 1e-3;

/// A straight segment from `start` to `end`.
///
/// # Examples
///
/// ```
/// # use pinker_core::geometry::{Line, Point};
/// let vertical = Line::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
/// let horizontal = Line::new(Point::new(0.0, 4.0), Point::new(10.0, 4.0));
///
/// assert_eq!(vertical.intersection(&horizontal), Some(Point::new(5.0, 4.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> Point {
        self.start
    }

    pub fn end(self) -> Point {
        self.end
    }

    /// Direction of the segment in radians, measured from `start` to `end`.
    pub fn angle(self) -> f32 {
        self.start.angle_to(self.end)
    }

    /// Returns `true` if both endpoints coincide.
    pub fn is_point(self) -> bool {
        self.start == self.end
    }

    pub fn is_vertical(self) -> bool {
        self.start.x() == self.end.x()
    }

    pub fn is_horizontal(self) -> bool {
        self.start.y() == self.end.y()
    }

    /// Extent of the segment on the x-axis.
    pub fn range_x(self) -> Range {
        Range::new(
            self.start.x().min(self.end.x()),
            self.start.x().max(self.end.x()),
        )
    }

    /// Extent of the segment on the y-axis.
    pub fn range_y(self) -> Range {
        Range::new(
            self.start.y().min(self.end.y()),
            self.start.y().max(self.end.y()),
        )
    }

    /// Slope of the infinite line through the segment.
    fn slope(self) -> f32 {
        (self.end.y() - self.start.y()) / (self.end.x() - self.start.x())
    }

    /// Y value where the infinite line crosses `x = 0`.
    fn y_intercept(self) -> f32 {
        self.start.y() - self.slope() * self.start.x()
    }

    fn solve_y(self, x: f32) -> f32 {
        self.slope() * x + self.y_intercept()
    }

    fn solve_x(self, y: f32) -> f32 {
        (y - self.y_intercept()) / self.slope()
    }

    /// Returns `true` if `point` lies within the bounding box of the segment.
    fn spans(self, point: Point) -> bool {
        self.range_x()
            .includes_within(point.x(), INTERSECTION_TOLERANCE)
            && self
                .range_y()
                .includes_within(point.y(), INTERSECTION_TOLERANCE)
    }

    /// Point where this segment crosses `other`, if they cross.
    ///
    /// Parallel segments and zero-length segments have no intersection.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        if self.is_point() || other.is_point() {
            return None;
        }

        let candidate = match (
            self.is_vertical(),
            self.is_horizontal(),
            other.is_vertical(),
            other.is_horizontal(),
        ) {
            (true, _, true, _) | (_, true, _, true) => return None,
            (true, _, _, true) => Point::new(self.start.x(), other.start.y()),
            (_, true, true, _) => Point::new(other.start.x(), self.start.y()),
            (true, _, _, _) => Point::new(self.start.x(), other.solve_y(self.start.x())),
            (_, _, true, _) => Point::new(other.start.x(), self.solve_y(other.start.x())),
            (_, true, _, _) => Point::new(other.solve_x(self.start.y()), self.start.y()),
            (_, _, _, true) => Point::new(self.solve_x(other.start.y()), other.start.y()),
            _ => {
                let (m1, m2) = (self.slope(), other.slope());
                if m1 == m2 {
                    return None;
                }
                let x = (other.y_intercept() - self.y_intercept()) / (m1 - m2);
                Point::new(x, self.solve_y(x))
            }
        };

        (self.spans(candidate) && other.spans(candidate)).then_some(candidate)
    }
}
