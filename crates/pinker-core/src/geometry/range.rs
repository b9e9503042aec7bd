//! Closed numeric intervals.

/// A closed interval `[min, max]` on one axis.
///
/// A range whose `min` equals its `max` pins a single coordinate. Ranges are
/// not normalized: a range built with `min > max` contains nothing, which the
/// router relies on to detect connectors that cannot agree on a coordinate.
///
/// # Examples
///
/// ```
/// # use pinker_core::geometry::Range;
/// let a = Range::new(0.0, 10.0);
/// let b = Range::new(5.0, 20.0);
///
/// assert_eq!(a.intersect(b), Some(Range::new(5.0, 10.0)));
/// assert_eq!(a.middle(), 5.0);
/// assert!(Range::single(3.0).is_single());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range {
    min: f32,
    max: f32,
}

impl Range {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A range pinned to one value.
    pub fn single(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(self) -> f32 {
        self.min
    }

    pub fn max(self) -> f32 {
        self.max
    }

    /// Midpoint of the range.
    pub fn middle(self) -> f32 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Returns `true` if the range pins exactly one value.
    pub fn is_single(self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `value` lies inside the range, bounds included.
    pub fn includes(self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `value` lies inside the range widened by `tolerance`
    /// on both ends.
    pub fn includes_within(self, value: f32, tolerance: f32) -> bool {
        self.min - tolerance <= value && value <= self.max + tolerance
    }

    /// Overlap of two ranges, or `None` when they do not meet.
    pub fn intersect(self, other: Range) -> Option<Range> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Range { min, max })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn range_strategy() -> impl Strategy<Value = Range> {
        (-1000.0f32..1000.0, 0.0f32..500.0).prop_map(|(min, len)| Range::new(min, min + len))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Intersection is symmetric.
    fn check_intersect_is_commutative(a: Range, b: Range) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.intersect(b), b.intersect(a));
        Ok(())
    }

    /// Any intersection lies inside both operands.
    fn check_intersect_is_contained(a: Range, b: Range) -> Result<(), TestCaseError> {
        if let Some(overlap) = a.intersect(b) {
            prop_assert!(a.includes(overlap.min()) && a.includes(overlap.max()));
            prop_assert!(b.includes(overlap.min()) && b.includes(overlap.max()));
            prop_assert!(overlap.includes(overlap.middle()));
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn intersect_is_commutative(a in range_strategy(), b in range_strategy()) {
            check_intersect_is_commutative(a, b)?;
        }

        #[test]
        fn intersect_is_contained(a in range_strategy(), b in range_strategy()) {
            check_intersect_is_contained(a, b)?;
        }
    }
}
