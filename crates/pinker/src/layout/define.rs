//! Sizing of define text blocks.

use pinker_core::{
    draw::{Font, TextMeasure},
    geometry::Size,
};
use pinker_parser::section::DefineSection;

/// Left-aligned text lines of a box, with rules below some of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DefineLayout {
    lines: Vec<String>,
    rules: Vec<bool>,
    size: Size,
}

impl DefineLayout {
    /// Measures `section`: the widest line, and one font height plus
    /// `line_spacing` per line.
    pub fn new(
        section: &DefineSection,
        font: &Font,
        line_spacing: f32,
        measure: &impl TextMeasure,
    ) -> Self {
        let lines = section.lines().to_vec();
        let rules = (0..lines.len())
            .map(|index| section.has_rule_after(index))
            .collect();
        let width = lines
            .iter()
            .map(|line| measure.measure_width(line, font))
            .fold(0.0, f32::max);
        let height = lines.len() as f32 * (measure.line_height(font) + line_spacing);

        Self {
            lines,
            rules,
            size: Size::new(width, height),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if a horizontal rule follows line `index`.
    pub fn has_rule_after(&self, index: usize) -> bool {
        self.rules.get(index).copied().unwrap_or(false)
    }

    /// Size of the text block, without padding.
    pub fn size(&self) -> Size {
        self.size
    }
}
