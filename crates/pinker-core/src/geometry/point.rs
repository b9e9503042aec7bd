//! Points, sizes, and insets.

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector math.
///
/// # Examples
///
/// ```
/// # use pinker_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates the point at `length` along `angle` (radians) from the origin.
    pub fn from_polar(length: f32, angle: f32) -> Self {
        Self {
            x: length * angle.cos(),
            y: length * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Angle in radians of the direction from this point towards `other`.
    pub fn angle_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the component-wise maximum of two sizes
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grows the size by the insets on every side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Width divided by height; infinite for zero-height sizes.
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}

/// Represents spacing around an element with potentially different values
/// for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates insets with the same value on every side
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets with one value for top/bottom and another for left/right
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_with_coordinates() {
        let point = Point::new(1.0, 2.0).with_x(7.0).with_y(9.0);
        assert_eq!(point, Point::new(7.0, 9.0));
    }

    #[test]
    fn test_point_from_polar() {
        let point = Point::from_polar(2.0, std::f32::consts::FRAC_PI_2);
        assert_approx_eq!(f32, point.x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, point.y(), 2.0);
    }

    #[test]
    fn test_point_angle_to() {
        let origin = Point::new(0.0, 0.0);
        assert_approx_eq!(f32, origin.angle_to(Point::new(5.0, 0.0)), 0.0);
        assert_approx_eq!(
            f32,
            origin.angle_to(Point::new(0.0, 5.0)),
            std::f32::consts::FRAC_PI_2
        );
        assert_approx_eq!(
            f32,
            origin.angle_to(Point::new(-5.0, 0.0)),
            std::f32::consts::PI
        );
    }

    #[test]
    fn test_size_max() {
        let size = Size::new(10.0, 40.0).max(Size::new(20.0, 5.0));
        assert_eq!(size, Size::new(20.0, 40.0));
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(10.0, 20.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(size, Size::new(16.0, 24.0));
    }

    #[test]
    fn test_size_aspect_ratio() {
        assert_approx_eq!(f32, Size::new(32.0, 20.0).aspect_ratio(), 1.6);
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::symmetric(5.0, 7.0);
        assert_eq!(insets.top(), 5.0);
        assert_eq!(insets.left(), 7.0);
        assert_eq!(insets.horizontal_sum(), 14.0);
        assert_eq!(insets.vertical_sum(), 10.0);
        assert_eq!(Insets::uniform(3.0).vertical_sum(), 6.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Point addition should be commutative: p1 + p2 == p2 + p1.
    fn check_point_add_is_commutative(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let result1 = p1.add_point(p2);
        let result2 = p2.add_point(p1);

        prop_assert!(approx_eq!(f32, result1.x(), result2.x()));
        prop_assert!(approx_eq!(f32, result1.y(), result2.y()));
        Ok(())
    }

    /// Midpoint should always be between (or equal to) both points.
    fn check_midpoint_is_between_points(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);

        prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
        prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        Ok(())
    }

    /// Walking `length` along `angle_to` from `p1` lands back on `p2`.
    fn check_polar_offset_reaches_target(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let delta = p2.sub_point(p1);
        let length = delta.x().hypot(delta.y());
        let reached = p1.add_point(Point::from_polar(length, p1.angle_to(p2)));

        prop_assert!(approx_eq!(f32, reached.x(), p2.x(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, reached.y(), p2.y(), epsilon = 0.01));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn point_add_is_commutative(p1 in point_strategy(), p2 in point_strategy()) {
            check_point_add_is_commutative(p1, p2)?;
        }

        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between_points(p1, p2)?;
        }

        #[test]
        fn polar_offset_reaches_target(p1 in point_strategy(), p2 in point_strategy()) {
            check_polar_offset_reaches_target(p1, p2)?;
        }
    }
}
