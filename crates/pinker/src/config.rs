//! Configuration types for Pinker diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources; missing fields fall back to the defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Font, spacing and box sizing heuristics.
//! - [`StyleConfig`] - Colors, stroke weights and arrowhead size.
//!
//! # Example
//!
//! ```
//! # use pinker::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().font_size(), 14.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use pinker_core::{color::Color, draw::Font};

/// Vertical gap between define lines, relative to the font size.
const LINE_SPACING_RATIO: f32 = 0.4;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Font, spacing and sizing heuristics used by the layout engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    font_family: String,
    font_size: f32,
    /// Gap between sibling boxes.
    scope_margin: f32,
    /// Inner padding of every box region.
    scope_padding: f32,
    /// Gap between the canvas edge and the outermost boxes.
    canvas_padding: f32,
    favor_golden_ratio_label_size: bool,
    favor_uniform_node_sizes: bool,
    /// Relative size difference under which siblings are made equal.
    uniform_size_variance: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_family: "Georgia".to_string(),
            font_size: 14.0,
            scope_margin: 30.0,
            scope_padding: 10.0,
            canvas_padding: 15.0,
            favor_golden_ratio_label_size: true,
            favor_uniform_node_sizes: true,
            uniform_size_variance: 0.3,
        }
    }
}

impl LayoutConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The configured font.
    pub fn font(&self) -> Font {
        Font::new(self.font_family.clone(), self.font_size)
    }

    /// Extra vertical space below each define line.
    pub fn line_spacing(&self) -> f32 {
        self.font_size * LINE_SPACING_RATIO
    }

    pub fn scope_margin(&self) -> f32 {
        self.scope_margin
    }

    pub fn scope_padding(&self) -> f32 {
        self.scope_padding
    }

    pub fn canvas_padding(&self) -> f32 {
        self.canvas_padding
    }

    pub fn favor_golden_ratio_label_size(&self) -> bool {
        self.favor_golden_ratio_label_size
    }

    pub fn favor_uniform_node_sizes(&self) -> bool {
        self.favor_uniform_node_sizes
    }

    pub fn uniform_size_variance(&self) -> f32 {
        self.uniform_size_variance
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    pub fn with_scope_margin(mut self, margin: f32) -> Self {
        self.scope_margin = margin;
        self
    }

    pub fn with_scope_padding(mut self, padding: f32) -> Self {
        self.scope_padding = padding;
        self
    }

    pub fn with_canvas_padding(mut self, padding: f32) -> Self {
        self.canvas_padding = padding;
        self
    }

    pub fn with_golden_ratio_labels(mut self, enabled: bool) -> Self {
        self.favor_golden_ratio_label_size = enabled;
        self
    }

    pub fn with_uniform_node_sizes(mut self, enabled: bool) -> Self {
        self.favor_uniform_node_sizes = enabled;
        self
    }

    pub fn with_uniform_size_variance(mut self, variance: f32) -> Self {
        self.uniform_size_variance = variance;
        self
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as CSS strings and parsed when a diagram is rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    /// Fill of header label bands.
    shade_color: String,
    line_color: String,
    line_weight: f32,
    dash_length: f32,
    dash_spacing: f32,
    /// Area of arrowhead polygons, in square pixels.
    arrowhead_area: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            shade_color: "#EEEEEE".to_string(),
            line_color: "#000000".to_string(),
            line_weight: 1.0,
            dash_length: 5.0,
            dash_spacing: 3.0,
            arrowhead_area: 50.0,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background", &self.background_color)
    }

    /// Returns the parsed header shade [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn shade_color(&self) -> Result<Color, String> {
        parse_color("shade", &self.shade_color)
    }

    /// Returns the parsed line and text [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn line_color(&self) -> Result<Color, String> {
        parse_color("line", &self.line_color)
    }

    pub fn line_weight(&self) -> f32 {
        self.line_weight
    }

    pub fn dash_length(&self) -> f32 {
        self.dash_length
    }

    pub fn dash_spacing(&self) -> f32 {
        self.dash_spacing
    }

    pub fn arrowhead_area(&self) -> f32 {
        self.arrowhead_area
    }

    pub fn with_colors(
        mut self,
        background: impl Into<String>,
        shade: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        self.background_color = background.into();
        self.shade_color = shade.into();
        self.line_color = line.into();
        self
    }

    pub fn with_line_weight(mut self, weight: f32) -> Self {
        self.line_weight = weight;
        self
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {name} color in config: {err}"))
}
