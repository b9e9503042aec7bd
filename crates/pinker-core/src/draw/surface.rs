//! The drawing-surface collaborator.

use crate::{
    color::Color,
    draw::{Font, StrokeDefinition},
    geometry::{Area, Point},
};

/// Primitive drawing operations a diagram is rendered onto.
///
/// Implementations decide how the primitives are materialized (an SVG
/// document, a raster canvas, a recording for tests). Calls arrive in paint
/// order: later primitives cover earlier ones.
pub trait Surface {
    /// Fills a rectangle.
    fn fill_rect(&mut self, area: Area, color: Color);

    /// Outlines a rectangle with a solid stroke of the given weight.
    fn stroke_rect(&mut self, area: Area, color: Color, weight: f32);

    /// Draws one line of text with its left end on the baseline at `position`.
    fn fill_text(&mut self, text: &str, position: Point, color: Color, font: &Font);

    /// Strokes an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Point], stroke: &StrokeDefinition);

    /// Fills a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Outlines a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point], stroke: &StrokeDefinition);
}
