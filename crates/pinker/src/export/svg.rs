//! SVG backend.

use std::{fs, path::Path};

use log::info;
use svg::node::{self, element as svg_element};

use pinker_core::{
    apply_stroke,
    color::Color,
    draw::{Font, StrokeDefinition, Surface},
    geometry::{Area, Point, Size},
};

use crate::error::PinkerError;

/// A [`Surface`] that builds an SVG document.
///
/// # Examples
///
/// ```
/// # use pinker::export::svg::SvgSurface;
/// # use pinker_core::{color::Color, draw::Surface, geometry::{Area, Size}};
/// let mut surface = SvgSurface::new(Size::new(100.0, 50.0));
/// surface.fill_rect(Area::new(0.0, 0.0, 100.0, 50.0), Color::new("white").unwrap());
///
/// let svg = surface.into_document().to_string();
/// assert!(svg.contains("<rect"));
/// ```
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    nodes: Vec<Box<dyn node::Node>>,
}

impl SvgSurface {
    /// Creates an empty surface covering `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    /// Finishes the document, keeping the paint order of all primitives.
    pub fn into_document(self) -> svg::Document {
        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        self.nodes.into_iter().fold(doc, |doc, node| doc.add(node))
    }

    /// Writes the finished document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PinkerError::Io`] if the file cannot be written.
    pub fn write_to(self, path: impl AsRef<Path>) -> Result<(), PinkerError> {
        let path = path.as_ref();
        fs::write(path, self.into_document().to_string())?;
        info!(path = path.display().to_string(); "SVG exported successfully");
        Ok(())
    }

    fn push(&mut self, node: impl node::Node) {
        self.nodes.push(Box::new(node));
    }
}

fn rectangle(area: Area) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", area.x())
        .set("y", area.y())
        .set("width", area.width())
        .set("height", area.height())
}

/// SVG `points` attribute value, e.g. `0,0 10,5`.
fn points_value(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x(), point.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Surface for SvgSurface {
    fn fill_rect(&mut self, area: Area, color: Color) {
        let rect = rectangle(area)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.push(rect);
    }

    fn stroke_rect(&mut self, area: Area, color: Color, weight: f32) {
        let stroke = StrokeDefinition::solid(color, weight);
        let rect = apply_stroke!(rectangle(area).set("fill", "none"), &stroke);
        self.push(rect);
    }

    fn fill_text(&mut self, text: &str, position: Point, color: Color, font: &Font) {
        let text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("font-family", font.family())
            .set("font-size", font.size())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .add(node::Text::new(text));
        self.push(text);
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: &StrokeDefinition) {
        let polyline = svg_element::Polyline::new()
            .set("points", points_value(points))
            .set("fill", "none");
        self.push(apply_stroke!(polyline, stroke));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let polygon = svg_element::Polygon::new()
            .set("points", points_value(points))
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.push(polygon);
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: &StrokeDefinition) {
        let polygon = svg_element::Polygon::new()
            .set("points", points_value(points))
            .set("fill", "none");
        self.push(apply_stroke!(polygon, stroke));
    }
}
