//! Rectangles with per-side padding.

use crate::geometry::{Insets, Line, Point, Size};

/// A rectangle with an independent padding on each side.
///
/// The padding lies *inside* the rectangle: [`Area::content_origin`] is the
/// top-left corner offset by the left and top padding. Nested boxes use it to
/// center their children inside the nested region.
///
/// # Examples
///
/// ```
/// # use pinker_core::geometry::{Area, Insets, Point};
/// let area = Area::new(10.0, 20.0, 100.0, 50.0).with_padding(Insets::uniform(5.0));
///
/// assert_eq!(area.right(), 110.0);
/// assert_eq!(area.bottom(), 70.0);
/// assert_eq!(area.center(), Point::new(60.0, 45.0));
/// assert_eq!(area.content_origin(), Point::new(15.0, 25.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Area {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    padding: Insets,
}

impl Area {
    /// Creates an area with no padding
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            padding: Insets::default(),
        }
    }

    /// Creates an area from its top-left corner and size
    pub fn from_point_size(point: Point, size: Size) -> Self {
        Self::new(point.x(), point.y(), size.width(), size.height())
    }

    /// Returns a copy of this area with the given padding
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    pub fn padding(self) -> Insets {
        self.padding
    }

    pub fn left(self) -> f32 {
        self.x
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn top(self) -> f32 {
        self.y
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left corner shifted by the left and top padding.
    pub fn content_origin(self) -> Point {
        Point::new(self.x + self.padding.left(), self.y + self.padding.top())
    }

    /// Moves the area by `offset`, keeping size and padding.
    pub fn translate(self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x(),
            y: self.y + offset.y(),
            ..self
        }
    }

    /// Returns `true` if the x extents of both areas overlap by more than a point.
    pub fn has_horizontal_overlap(self, other: Area) -> bool {
        self.left().max(other.left()) < self.right().min(other.right())
    }

    /// Returns `true` if the y extents of both areas overlap by more than a point.
    pub fn has_vertical_overlap(self, other: Area) -> bool {
        self.top().max(other.top()) < self.bottom().min(other.bottom())
    }

    /// Entirely above `other`, sharing some of its horizontal extent.
    pub fn is_above(self, other: Area) -> bool {
        self.has_horizontal_overlap(other) && self.bottom() < other.top()
    }

    /// Entirely below `other`, sharing some of its horizontal extent.
    pub fn is_below(self, other: Area) -> bool {
        self.has_horizontal_overlap(other) && self.top() > other.bottom()
    }

    /// Entirely left of `other`, sharing some of its vertical extent.
    pub fn is_left_of(self, other: Area) -> bool {
        self.has_vertical_overlap(other) && self.right() < other.left()
    }

    /// Entirely right of `other`, sharing some of its vertical extent.
    pub fn is_right_of(self, other: Area) -> bool {
        self.has_vertical_overlap(other) && self.left() > other.right()
    }

    /// The four edges, in order: top, right, bottom, left.
    pub fn edges(self) -> [Line; 4] {
        let top_left = Point::new(self.left(), self.top());
        let top_right = Point::new(self.right(), self.top());
        let bottom_right = Point::new(self.right(), self.bottom());
        let bottom_left = Point::new(self.left(), self.bottom());
        [
            Line::new(top_left, top_right),
            Line::new(top_right, bottom_right),
            Line::new(bottom_left, bottom_right),
            Line::new(top_left, bottom_left),
        ]
    }

    /// First point where `line` crosses the boundary, testing the edges in
    /// the order of [`Area::edges`].
    pub fn boundary_intersection(self, line: &Line) -> Option<Point> {
        self.edges()
            .iter()
            .find_map(|edge| edge.intersection(line))
    }
}
