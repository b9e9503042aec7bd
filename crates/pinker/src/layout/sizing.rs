//! Sibling-level adjustments after row packing: uniform sizing and right
//! alignment.
//!
//! Both passes only touch [`Placement`]s, the position and size of each
//! sibling within its parent's content area.

use std::collections::BTreeMap;

use pinker_core::geometry::{Point, Size};

/// Which end of its row a box is packed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Position and size of a box among its siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub row: usize,
    pub align: Align,
    pub position: Point,
    pub size: Size,
}

impl Placement {
    pub fn right(&self) -> f32 {
        self.position.x() + self.size.width()
    }

    pub fn bottom(&self) -> f32 {
        self.position.y() + self.size.height()
    }
}

/// Indices sorted by a size component, largest first.
fn descending_by(placements: &[Placement], key: impl Fn(&Placement) -> f32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..placements.len()).collect();
    order.sort_by(|&a, &b| key(&placements[b]).total_cmp(&key(&placements[a])));
    order
}

/// Returns `true` if `value` is within `variance` (relative) below `max`.
fn within_variance(value: f32, max: f32, variance: f32) -> bool {
    max > 0.0 && 1.0 - value / max <= variance
}

/// Widens boxes to the width of a slightly wider sibling.
///
/// Siblings are visited widest first. A box within `variance` of the current
/// maximum grows to it, pushing the boxes to its right in the same row;
/// otherwise it becomes the new maximum.
pub fn uniform_widths(placements: &mut [Placement], variance: f32) {
    let order = descending_by(placements, |placement| placement.size.width());
    let Some(&first) = order.first() else {
        return;
    };

    let mut max = placements[first].size.width();
    for index in order {
        let placement = placements[index];
        let width = placement.size.width();
        if !within_variance(width, max, variance) {
            max = width;
            continue;
        }

        let delta = max - width;
        if delta <= 0.0 {
            continue;
        }
        placements[index].size = Size::new(max, placement.size.height());
        for other in placements.iter_mut() {
            if other.row == placement.row && other.position.x() > placement.position.x() {
                other.position = other.position.with_x(other.position.x() + delta);
            }
        }
    }
}

/// Heightens boxes to the height of a slightly taller sibling.
///
/// Same banding as [`uniform_widths`]. Rows keep their top edge; every row
/// below one that grew moves down by the growth.
pub fn uniform_heights(placements: &mut [Placement], variance: f32) {
    let order = descending_by(placements, |placement| placement.size.height());
    let Some(&first) = order.first() else {
        return;
    };

    let mut old_row_max: BTreeMap<usize, f32> = BTreeMap::new();
    for placement in placements.iter() {
        let entry = old_row_max.entry(placement.row).or_insert(0.0);
        *entry = entry.max(placement.size.height());
    }

    let mut new_row_max: BTreeMap<usize, f32> = BTreeMap::new();
    let mut max = placements[first].size.height();
    for index in order {
        let placement = &mut placements[index];
        let height = placement.size.height();
        if !within_variance(height, max, variance) {
            max = height;
            continue;
        }
        if height < max {
            placement.size = Size::new(placement.size.width(), max);
        }
        let entry = new_row_max.entry(placement.row).or_insert(0.0);
        *entry = entry.max(placement.size.height());
    }

    let mut shift = 0.0;
    let mut row_shift: BTreeMap<usize, f32> = BTreeMap::new();
    for (&row, &old) in &old_row_max {
        row_shift.insert(row, shift);
        let new = new_row_max.get(&row).copied().unwrap_or(old);
        shift += (new - old).max(0.0);
    }

    for placement in placements.iter_mut() {
        let offset = row_shift.get(&placement.row).copied().unwrap_or(0.0);
        if offset > 0.0 {
            placement.position = placement.position.with_y(placement.position.y() + offset);
        }
    }
}

/// Moves right-aligned boxes against the right edge of the widest row.
pub fn align_right(placements: &mut [Placement], margin: f32) {
    let max_x = placements
        .iter()
        .map(Placement::right)
        .fold(0.0, f32::max);

    let rows: Vec<usize> = placements
        .iter()
        .filter(|placement| placement.align == Align::Right)
        .map(|placement| placement.row)
        .collect();

    for row in dedup_sorted(rows) {
        let mut right = max_x;
        for placement in placements
            .iter_mut()
            .rev()
            .filter(|placement| placement.row == row && placement.align == Align::Right)
        {
            let width = placement.size.width();
            placement.position = placement.position.with_x(right - width);
            right -= width + margin;
        }
    }
}

fn dedup_sorted(mut values: Vec<usize>) -> Vec<usize> {
    values.sort_unstable();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn placement(row: usize, x: f32, y: f32, width: f32, height: f32) -> Placement {
        Placement {
            row,
            align: Align::Left,
            position: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    fn widths(placements: &[Placement]) -> Vec<f32> {
        placements.iter().map(|p| p.size.width()).collect()
    }

    #[test]
    fn test_uniform_widths_band() {
        let mut placements = vec![
            placement(0, 0.0, 0.0, 100.0, 20.0),
            placement(0, 130.0, 0.0, 95.0, 20.0),
            placement(0, 255.0, 0.0, 40.0, 20.0),
        ];

        uniform_widths(&mut placements, 0.3);

        assert_eq!(widths(&placements), vec![100.0, 100.0, 40.0]);
        // The box right of the widened one moves by the growth.
        assert_approx_eq!(f32, placements[2].position.x(), 260.0);
        assert_approx_eq!(f32, placements[1].position.x(), 130.0);
    }

    #[test]
    fn test_uniform_widths_never_shrink() {
        let mut placements = vec![
            placement(0, 0.0, 0.0, 80.0, 20.0),
            placement(1, 0.0, 50.0, 100.0, 20.0),
            placement(1, 130.0, 50.0, 10.0, 20.0),
        ];
        let natural = widths(&placements);

        uniform_widths(&mut placements, 0.3);

        for (after, before) in widths(&placements).iter().zip(natural) {
            assert!(*after >= before);
        }
        assert_eq!(widths(&placements), vec![100.0, 100.0, 10.0]);
        // Only boxes in the same row shift.
        assert_approx_eq!(f32, placements[2].position.x(), 130.0);
    }

    #[test]
    fn test_uniform_heights_shift_later_rows() {
        let mut placements = vec![
            placement(0, 0.0, 0.0, 50.0, 40.0),
            placement(1, 0.0, 70.0, 50.0, 50.0),
            placement(2, 0.0, 150.0, 50.0, 10.0),
        ];

        uniform_heights(&mut placements, 0.3);

        assert_approx_eq!(f32, placements[0].size.height(), 50.0);
        assert_approx_eq!(f32, placements[1].size.height(), 50.0);
        assert_approx_eq!(f32, placements[2].size.height(), 10.0);
        assert_approx_eq!(f32, placements[0].position.y(), 0.0);
        assert_approx_eq!(f32, placements[1].position.y(), 80.0);
        assert_approx_eq!(f32, placements[2].position.y(), 160.0);
    }

    #[test]
    fn test_align_right() {
        let mut placements = vec![
            placement(0, 0.0, 0.0, 200.0, 20.0),
            placement(1, 0.0, 50.0, 30.0, 20.0),
            Placement {
                align: Align::Right,
                ..placement(1, 60.0, 50.0, 40.0, 20.0)
            },
            Placement {
                align: Align::Right,
                ..placement(1, 130.0, 50.0, 20.0, 20.0)
            },
        ];

        align_right(&mut placements, 30.0);

        assert_approx_eq!(f32, placements[3].position.x(), 180.0);
        assert_approx_eq!(f32, placements[2].position.x(), 110.0);
        assert_approx_eq!(f32, placements[1].position.x(), 0.0);
    }

    #[test]
    fn test_empty_placements() {
        let mut placements: Vec<Placement> = Vec::new();
        uniform_widths(&mut placements, 0.3);
        uniform_heights(&mut placements, 0.3);
        align_right(&mut placements, 30.0);
        assert!(placements.is_empty());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    const MARGIN: f32 = 30.0;

    /// Rows of boxes packed left to right with `MARGIN` between them.
    fn rows_strategy() -> impl Strategy<Value = Vec<Placement>> {
        prop::collection::vec(prop::collection::vec((1.0f32..300.0, 1.0f32..200.0), 1..5), 1..4)
            .prop_map(|rows| {
                let mut placements = Vec::new();
                let mut y = 0.0;
                for (row, sizes) in rows.into_iter().enumerate() {
                    let mut x = 0.0;
                    let mut row_height: f32 = 0.0;
                    for (width, height) in sizes {
                        placements.push(Placement {
                            row,
                            align: Align::Left,
                            position: Point::new(x, y),
                            size: Size::new(width, height),
                        });
                        x += width + MARGIN;
                        row_height = row_height.max(height);
                    }
                    y += row_height + MARGIN;
                }
                placements
            })
    }

    /// No box ends up smaller than it was measured.
    fn check_never_shrinks(placements: Vec<Placement>, variance: f32) -> Result<(), TestCaseError> {
        let mut adjusted = placements.clone();
        uniform_widths(&mut adjusted, variance);
        uniform_heights(&mut adjusted, variance);

        for (after, before) in adjusted.iter().zip(&placements) {
            prop_assert!(after.size.width() >= before.size.width());
            prop_assert!(after.size.height() >= before.size.height());
        }
        Ok(())
    }

    /// Neighbours in a row keep at least the margin between them.
    fn check_rows_keep_margin(placements: Vec<Placement>, variance: f32) -> Result<(), TestCaseError> {
        let mut adjusted = placements;
        uniform_widths(&mut adjusted, variance);

        for pair in adjusted.windows(2) {
            if pair[0].row == pair[1].row {
                prop_assert!(pair[1].position.x() - pair[0].right() >= MARGIN - 1e-2);
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn never_shrinks(placements in rows_strategy(), variance in 0.0f32..1.0) {
            check_never_shrinks(placements, variance)?;
        }

        #[test]
        fn rows_keep_margin(placements in rows_strategy(), variance in 0.0f32..1.0) {
            check_rows_keep_margin(placements, variance)?;
        }
    }
}
