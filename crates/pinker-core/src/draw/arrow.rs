//! Arrowhead kinds and their polygon geometry.
//!
//! An arrowhead is placed at the end point of a connector and oriented along
//! the direction of its final segment. Every shape is sized so that it covers
//! roughly the configured head area.

use std::f32::consts::FRAC_PI_6;

use crate::geometry::Point;

/// Shape drawn at the end of a connector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowHeadKind {
    /// No arrowhead
    #[default]
    None,
    /// Solid isosceles triangle
    FilledArrow,
    /// Equilateral triangle outline over the background color
    HollowArrow,
    /// Diamond outline over the background color
    HollowDiamond,
    /// Diamond filled with the line color
    FilledDiamond,
}

/// Which color an arrowhead polygon is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowFill {
    /// The connector's line color
    Line,
    /// The canvas background color, so the connector does not show through
    Background,
}

impl ArrowHeadKind {
    /// Reads the arrowhead kind from the trailing characters of an arrow token.
    ///
    /// ```
    /// # use pinker_core::draw::ArrowHeadKind;
    /// assert_eq!(ArrowHeadKind::from_token("->"), ArrowHeadKind::FilledArrow);
    /// assert_eq!(ArrowHeadKind::from_token("=:>"), ArrowHeadKind::HollowArrow);
    /// assert_eq!(ArrowHeadKind::from_token("-"), ArrowHeadKind::None);
    /// ```
    pub fn from_token(token: &str) -> Self {
        let chars: Vec<char> = token.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
        match tail.as_str() {
            "=>" | "->" => Self::FilledArrow,
            "-D" | ":>" => Self::HollowArrow,
            "-o" => Self::HollowDiamond,
            "-+" => Self::FilledDiamond,
            _ => Self::None,
        }
    }

    /// Fill of the head polygon, or `None` when nothing is drawn.
    pub fn fill(self) -> Option<ArrowFill> {
        match self {
            Self::None => None,
            Self::FilledArrow | Self::FilledDiamond => Some(ArrowFill::Line),
            Self::HollowArrow | Self::HollowDiamond => Some(ArrowFill::Background),
        }
    }

    /// Returns `true` if the polygon is outlined after being filled.
    pub fn is_outlined(self) -> bool {
        !matches!(self, Self::None | Self::FilledArrow)
    }

    /// Corners of the head polygon for a connector ending at `end` whose
    /// final segment has direction `angle` (radians).
    ///
    /// The first corner is always `end`. Returns an empty list for
    /// [`ArrowHeadKind::None`].
    pub fn polygon(self, end: Point, angle: f32, area: f32) -> Vec<Point> {
        // Walks back from `from` by `length` along `direction`.
        let back = |from: Point, length: f32, direction: f32| {
            from.sub_point(Point::from_polar(length, direction))
        };

        match self {
            Self::None => Vec::new(),
            Self::FilledArrow => {
                let base_to_height = 1.5;
                let base = (2.0 * area / base_to_height).sqrt();
                let height = base * base_to_height;
                let side = ((base / 2.0).powi(2) + height.powi(2)).sqrt();
                let isosceles = ((base / 2.0) / side).asin();
                vec![
                    end,
                    back(end, side, angle - isosceles),
                    back(end, side, angle + isosceles),
                ]
            }
            Self::HollowArrow => {
                let side = equilateral_side(area);
                vec![
                    end,
                    back(end, side, angle - FRAC_PI_6),
                    back(end, side, angle + FRAC_PI_6),
                ]
            }
            Self::HollowDiamond | Self::FilledDiamond => {
                let side = equilateral_side(area / 2.0);
                let corner_a = back(end, side, angle - FRAC_PI_6);
                let corner_b = back(end, side, angle + FRAC_PI_6);
                let corner_c = back(corner_a, side, angle + FRAC_PI_6);
                vec![end, corner_a, corner_c, corner_b]
            }
        }
    }
}

/// Side length of an equilateral triangle with the given area.
fn equilateral_side(area: f32) -> f32 {
    (area * 4.0 / 3.0_f32.sqrt()).sqrt()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    /// Shoelace formula.
    fn polygon_area(points: &[Point]) -> f32 {
        let mut sum = 0.0;
        for (i, p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            sum += p.x() * q.y() - q.x() * p.y();
        }
        sum.abs() / 2.0
    }

    #[test]
    fn test_kind_from_token() {
        assert_eq!(ArrowHeadKind::from_token("=>"), ArrowHeadKind::FilledArrow);
        assert_eq!(ArrowHeadKind::from_token("->"), ArrowHeadKind::FilledArrow);
        assert_eq!(ArrowHeadKind::from_token("--->"), ArrowHeadKind::FilledArrow);
        assert_eq!(ArrowHeadKind::from_token("-D"), ArrowHeadKind::HollowArrow);
        assert_eq!(ArrowHeadKind::from_token(":>"), ArrowHeadKind::HollowArrow);
        assert_eq!(ArrowHeadKind::from_token("-o"), ArrowHeadKind::HollowDiamond);
        assert_eq!(ArrowHeadKind::from_token("-+"), ArrowHeadKind::FilledDiamond);
        assert_eq!(ArrowHeadKind::from_token("~~"), ArrowHeadKind::None);
        assert_eq!(ArrowHeadKind::from_token(""), ArrowHeadKind::None);
    }

    #[test]
    fn test_fill_and_outline() {
        assert_eq!(ArrowHeadKind::None.fill(), None);
        assert_eq!(ArrowHeadKind::FilledArrow.fill(), Some(ArrowFill::Line));
        assert_eq!(ArrowHeadKind::HollowDiamond.fill(), Some(ArrowFill::Background));
        assert!(!ArrowHeadKind::FilledArrow.is_outlined());
        assert!(ArrowHeadKind::FilledDiamond.is_outlined());
    }

    #[test]
    fn test_filled_arrow_covers_area() {
        let polygon = ArrowHeadKind::FilledArrow.polygon(Point::new(100.0, 50.0), 0.0, 50.0);
        assert_eq!(polygon.len(), 3);
        assert_approx_eq!(f32, polygon_area(&polygon), 50.0, epsilon = 1e-2);
        // Pointing right: both back corners lie to the left of the tip.
        assert!(polygon[1].x() < 100.0 && polygon[2].x() < 100.0);
    }

    #[test]
    fn test_hollow_arrow_covers_area() {
        let polygon = ArrowHeadKind::HollowArrow.polygon(Point::new(0.0, 0.0), 1.0, 50.0);
        assert_eq!(polygon.len(), 3);
        assert_approx_eq!(f32, polygon_area(&polygon), 50.0, epsilon = 1e-2);
    }

    #[test]
    fn test_diamond_covers_area() {
        let polygon = ArrowHeadKind::FilledDiamond.polygon(Point::new(0.0, 0.0), 0.0, 50.0);
        assert_eq!(polygon.len(), 4);
        assert_approx_eq!(f32, polygon_area(&polygon), 50.0, epsilon = 1e-2);
        // Far corner lies on the axis of the connector.
        assert_approx_eq!(f32, polygon[2].y(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_none_has_no_polygon() {
        assert!(ArrowHeadKind::None.polygon(Point::new(0.0, 0.0), 0.0, 50.0).is_empty());
    }
}
