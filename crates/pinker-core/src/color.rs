//! Color handling for Pinker diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Configuration stores colors as CSS strings; they are
//! parsed into [`Color`] once per render.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#EEEEEE"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinker_core::color::Color;
    ///
    /// let shade = Color::new("#EEEEEE").unwrap();
    /// let line = Color::new("black").unwrap();
    /// assert_ne!(shade, line);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color, between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#FFFFFF").is_ok());
        assert!(Color::new("#EEEEEE").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_new_error_mentions_input() {
        let err = Color::new("chartreuse-ish").unwrap_err();
        assert!(err.contains("chartreuse-ish"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_from_str() {
        let parsed: Color = "red".parse().unwrap();
        assert_eq!(parsed, Color::new("red").unwrap());
        assert_ne!(parsed, Color::new("blue").unwrap());
    }

    #[test]
    fn test_color_alpha_opaque_by_default() {
        let color = Color::new("#000000").unwrap();
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }
}
