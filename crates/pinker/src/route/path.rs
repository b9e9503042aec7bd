//! Connector path geometry.
//!
//! A path is first expressed as [`PotentialPoint`]s whose coordinates may
//! still slide within a range. Cleaning narrows the ranges so that every
//! segment can be drawn axis-aligned; resolving then pins each waypoint,
//! reusing the previous waypoint's coordinate whenever it fits.

use pinker_core::geometry::{Area, Line, Point, PotentialPoint, Range};

/// Route of a connector between two boxes.
#[derive(Debug, Clone, PartialEq)]
pub enum PathGeometry {
    /// Axis-aligned segments through range-constrained waypoints.
    Orthogonal(Vec<PotentialPoint>),
    /// A straight line clipped to both box boundaries.
    Direct(Line),
}

/// Problems found while building a path. The path is still usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathIssue {
    /// Consecutive waypoints share no coordinate on a segment's axis.
    DisjointRanges,
    /// The direct line did not cross a box boundary; its center was used.
    NoBoundaryIntersection,
}

/// Facing edges of a pair of boxes.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints {
    pub start: Area,
    pub end: Area,
    /// Lowest y at which a side connector may attach to either box.
    pub start_attach_bottom: f32,
    pub end_attach_bottom: f32,
}

impl PathGeometry {
    /// Chooses a route from the relative position of both boxes.
    pub fn between(endpoints: Endpoints, issues: &mut Vec<PathIssue>) -> Self {
        let Endpoints { start, end, .. } = endpoints;

        if start.is_above(end) || start.is_below(end) {
            let overlap = Range::new(start.left().max(end.left()), start.right().min(end.right()));
            let (start_y, end_y) = if start.is_above(end) {
                (start.bottom(), end.top())
            } else {
                (start.top(), end.bottom())
            };
            return Self::Orthogonal(vec![
                PotentialPoint::new(overlap, Range::single(start_y)),
                PotentialPoint::new(overlap, Range::single(end_y)),
            ]);
        }

        if start.is_left_of(end) || start.is_right_of(end) {
            let overlap = side_overlap(endpoints);
            let (start_x, end_x) = if start.is_left_of(end) {
                (start.right(), end.left())
            } else {
                (start.left(), end.right())
            };
            return Self::Orthogonal(vec![
                PotentialPoint::new(Range::single(start_x), overlap),
                PotentialPoint::new(Range::single(end_x), overlap),
            ]);
        }

        Self::Direct(direct_line(start, end, issues))
    }

    /// Narrows waypoint ranges so that each segment can be axis-aligned.
    pub fn clean(self, issues: &mut Vec<PathIssue>) -> Self {
        match self {
            Self::Orthogonal(points) => Self::Orthogonal(clean_points(points, issues)),
            direct @ Self::Direct(_) => direct,
        }
    }

    /// Pins every waypoint to a concrete point.
    pub fn resolve(&self) -> Vec<Point> {
        match self {
            Self::Orthogonal(points) => resolve_points(points),
            Self::Direct(line) => vec![line.start(), line.end()],
        }
    }
}

/// Vertical range shared by two side-by-side boxes, limited to their header
/// bands when they have one.
fn side_overlap(endpoints: Endpoints) -> Range {
    let top = endpoints.start.top().max(endpoints.end.top());
    let attach_bottom = endpoints
        .start_attach_bottom
        .min(endpoints.end_attach_bottom);
    if top <= attach_bottom {
        return Range::new(top, attach_bottom);
    }
    Range::new(top, endpoints.start.bottom().min(endpoints.end.bottom()))
}

/// The center-to-center line, clipped where it leaves each box.
fn direct_line(start: Area, end: Area, issues: &mut Vec<PathIssue>) -> Line {
    let centers = Line::new(start.center(), end.center());
    let mut clip = |area: Area| {
        area.boundary_intersection(&centers).unwrap_or_else(|| {
            issues.push(PathIssue::NoBoundaryIntersection);
            area.center()
        })
    };
    Line::new(clip(start), clip(end))
}

/// Returns `true` if segment `index` (from waypoint `index` to `index + 1`)
/// runs horizontally. Segments alternate direction.
fn is_horizontal_segment(starts_horizontal: bool, index: usize) -> bool {
    starts_horizontal ^ (index % 2 == 1)
}

fn starts_horizontal(points: &[PotentialPoint]) -> bool {
    points
        .first()
        .is_some_and(|point| point.range_x().is_single())
}

fn clean_points(mut points: Vec<PotentialPoint>, issues: &mut Vec<PathIssue>) -> Vec<PotentialPoint> {
    let horizontal_first = starts_horizontal(&points);
    for index in 0..points.len().saturating_sub(1) {
        let (from, to) = (points[index], points[index + 1]);
        if is_horizontal_segment(horizontal_first, index) {
            match from.range_y().intersect(to.range_y()) {
                Some(shared) => {
                    points[index] = from.with_range_y(shared);
                    points[index + 1] = to.with_range_y(shared);
                }
                None => issues.push(PathIssue::DisjointRanges),
            }
        } else {
            match from.range_x().intersect(to.range_x()) {
                Some(shared) => {
                    points[index] = from.with_range_x(shared);
                    points[index + 1] = to.with_range_x(shared);
                }
                None => issues.push(PathIssue::DisjointRanges),
            }
        }
    }
    points
}

fn resolve_points(points: &[PotentialPoint]) -> Vec<Point> {
    let horizontal_first = starts_horizontal(points);
    let mut resolved: Vec<Point> = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let previous = resolved.last().copied();
        let next = match index {
            0 => point.middle_point(),
            _ if is_horizontal_segment(horizontal_first, index - 1) => {
                point.resolve_horizontal(previous)
            }
            _ => point.resolve_vertical(previous),
        };
        resolved.push(next);
    }
    resolved
}
