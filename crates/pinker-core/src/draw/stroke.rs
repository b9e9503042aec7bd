//! Stroke and line-style definitions.
//!
//! - [`StrokeDefinition`]: color, width and dash pattern of a stroke
//! - [`StrokeStyle`]: solid or dashed
//! - [`LineStyle`]: the style requested by a connector's arrow token
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # Applying to SVG Elements
//!
//! ```
//! use pinker_core::draw::StrokeDefinition;
//! use pinker_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("black").unwrap(), 1.0, 5.0, 3.0);
//! let line = svg_element::Polyline::new().set("points", "0,0 10,0");
//!
//! // Sets stroke, stroke-opacity, stroke-width and stroke-dasharray
//! let line = pinker_core::apply_stroke!(line, &stroke);
//! assert!(line.to_string().contains(r#"stroke-dasharray="5,3""#));
//! ```
//!
//! The macro only relies on a `set(name, value)` builder method, so
//! `pinker-core` itself does not depend on `svg`.

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line
    #[default]
    Solid,
    /// Repeating `dash` on, `gap` off
    Dashed { dash: f32, gap: f32 },
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed { dash, gap } => Some(format!("{dash},{gap}")),
        }
    }
}

/// Line style requested by a connector.
///
/// Resolved into a concrete [`StrokeStyle`] once the configured dash lengths
/// are known.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    /// Reads the line style from the leading characters of an arrow token.
    ///
    /// `=`, `=>` and `--` are dashed; anything else is solid.
    ///
    /// ```
    /// # use pinker_core::draw::LineStyle;
    /// assert_eq!(LineStyle::from_token("=>"), LineStyle::Dashed);
    /// assert_eq!(LineStyle::from_token("--->"), LineStyle::Dashed);
    /// assert_eq!(LineStyle::from_token("->"), LineStyle::Solid);
    /// ```
    pub fn from_token(token: &str) -> Self {
        let head: String = token.chars().take(2).collect();
        match head.as_str() {
            "=" | "=>" | "--" => Self::Dashed,
            _ => Self::Solid,
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use pinker_core::draw::{StrokeDefinition, StrokeStyle};
/// use pinker_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("red").unwrap(), 2.0);
/// assert_eq!(*stroke.style(), StrokeStyle::Solid);
///
/// let dashed = StrokeDefinition::dashed(stroke.color(), 2.0, 5.0, 3.0);
/// assert_eq!(dashed.style().to_svg_value().as_deref(), Some("5,3"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32, dash: f32, gap: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed { dash, gap },
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity and width, plus the dash pattern when the stroke is
/// not solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
