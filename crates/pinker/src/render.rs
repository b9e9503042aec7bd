//! Paints a laid-out diagram onto a [`Surface`].
//!
//! Paint order is background, then boxes in pre-order (parents below their
//! children), then connectors on top of everything.

use log::debug;

use pinker_core::{
    color::Color,
    draw::{ArrowFill, Font, LineStyle, StrokeDefinition, Surface, TextMeasure},
    geometry::{Area, Line, Point},
};

use crate::{
    config::{LayoutConfig, StyleConfig},
    error::PinkerError,
    layout::{DefineLayout, Node, NodeTree},
    route::Connector,
};

/// Extra outline weight per level of nesting below a box.
const DEPTH_WEIGHT_STEP: f32 = 0.33;

/// Position of a define rule below its line, relative to the line spacing.
const RULE_OFFSET_RATIO: f32 = 0.9;

/// Parsed colors and stroke settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    background: Color,
    shade: Color,
    line: Color,
    line_weight: f32,
    dash_length: f32,
    dash_spacing: f32,
    arrowhead_area: f32,
}

impl RenderStyle {
    /// Parses the colors of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PinkerError::Config`] if a color string is invalid.
    pub fn from_config(config: &StyleConfig) -> Result<Self, PinkerError> {
        Ok(Self {
            background: config.background_color().map_err(PinkerError::Config)?,
            shade: config.shade_color().map_err(PinkerError::Config)?,
            line: config.line_color().map_err(PinkerError::Config)?,
            line_weight: config.line_weight(),
            dash_length: config.dash_length(),
            dash_spacing: config.dash_spacing(),
            arrowhead_area: config.arrowhead_area(),
        })
    }

    fn solid(&self, width: f32) -> StrokeDefinition {
        StrokeDefinition::solid(self.line, width)
    }

    fn connector_stroke(&self, style: LineStyle) -> StrokeDefinition {
        match style {
            LineStyle::Solid => self.solid(self.line_weight),
            LineStyle::Dashed => StrokeDefinition::dashed(
                self.line,
                self.line_weight,
                self.dash_length,
                self.dash_spacing,
            ),
        }
    }
}

/// Draws boxes, labels, define text and connectors.
#[derive(Debug)]
pub struct Renderer<'a, M> {
    layout: &'a LayoutConfig,
    style: RenderStyle,
    measure: M,
    font: Font,
}

impl<'a, M: TextMeasure> Renderer<'a, M> {
    pub fn new(layout: &'a LayoutConfig, style: RenderStyle, measure: M) -> Self {
        Self {
            layout,
            style,
            measure,
            font: layout.font(),
        }
    }

    /// Paints the whole diagram onto `surface`.
    pub fn render<S: Surface>(&self, nodes: &NodeTree, connectors: &[Connector], surface: &mut S) {
        let canvas = nodes.canvas();
        surface.fill_rect(
            Area::new(0.0, 0.0, canvas.width(), canvas.height()),
            self.style.background,
        );

        // Top-level boxes share the weight of the deepest tree; nested boxes
        // are drawn one level thinner than their parent.
        let max_depth = nodes
            .roots()
            .iter()
            .map(|&root| nodes.get(root).depth())
            .max()
            .unwrap_or(1);
        let mut weight_depths = vec![0usize; nodes.len()];
        for (id, node) in nodes.iter() {
            let depth = match node.parent() {
                Some(parent) => weight_depths[parent.index()].saturating_sub(1).max(1),
                None => max_depth,
            };
            weight_depths[id.index()] = depth;
            let weight = self.style.line_weight + (depth - 1) as f32 * DEPTH_WEIGHT_STEP;
            self.draw_node(node, weight, surface);
        }

        for connector in connectors {
            self.draw_connector(connector, surface);
        }

        debug!(
            nodes_len = nodes.len(),
            connectors_len = connectors.len();
            "Diagram rendered",
        );
    }

    fn draw_node<S: Surface>(&self, node: &Node, weight: f32, surface: &mut S) {
        let label_area = node.label_area();
        if node.has_header() {
            surface.fill_rect(label_area, self.style.shade);
            surface.stroke_rect(label_area, self.style.line, weight);
        }
        self.draw_label(node, surface);

        if let (Some(area), Some(define)) = (node.define_area(), node.define_layout()) {
            surface.stroke_rect(area, self.style.line, weight);
            self.draw_define(area, define, surface);
        }

        surface.stroke_rect(node.area(), self.style.line, weight);
    }

    /// Centers the label lines inside the padded label region.
    fn draw_label<S: Surface>(&self, node: &Node, surface: &mut S) {
        let padding = self.layout.scope_padding();
        let area = node.label_area();
        let layout = node.label_layout();
        let line_height = self.measure.line_height(&self.font);

        let inner_width = area.width() - 2.0 * padding;
        let inner_height = area.height() - 2.0 * padding;
        let extra = inner_height - layout.size().height();

        let mut y = area.top() + padding + extra / 2.0;
        for line in layout.lines() {
            y += line_height;
            let width = self.measure.measure_width(line, &self.font);
            let x = area.left() + padding + (inner_width - width) / 2.0;
            surface.fill_text(line, Point::new(x, y), self.style.line, &self.font);
        }
    }

    fn draw_define<S: Surface>(
        &self,
        area: Area,
        define: &DefineLayout,
        surface: &mut S,
    ) {
        let padding = self.layout.scope_padding();
        let spacing = self.layout.line_spacing();
        let line_height = self.measure.line_height(&self.font);
        let rule = self.style.solid(self.style.line_weight / 2.0);

        let x = area.left() + padding;
        let mut y = area.top() + padding;
        for (index, line) in define.lines().iter().enumerate() {
            y += line_height;
            surface.fill_text(line, Point::new(x, y), self.style.line, &self.font);
            if define.has_rule_after(index) {
                let rule_y = y + spacing * RULE_OFFSET_RATIO;
                surface.stroke_polyline(
                    &[Point::new(area.left(), rule_y), Point::new(area.right(), rule_y)],
                    &rule,
                );
            }
            y += spacing;
        }
    }

    fn draw_connector<S: Surface>(&self, connector: &Connector, surface: &mut S) {
        let points = connector.points();
        surface.stroke_polyline(points, &self.style.connector_stroke(connector.line_style()));

        let [.., previous, last] = points else {
            return;
        };
        let head = connector.arrow_head();
        let Some(fill) = head.fill() else {
            return;
        };

        let angle = Line::new(*previous, *last).angle();
        let polygon = head.polygon(*last, angle, self.style.arrowhead_area);
        let fill_color = match fill {
            ArrowFill::Line => self.style.line,
            ArrowFill::Background => self.style.background,
        };
        surface.fill_polygon(&polygon, fill_color);
        if head.is_outlined() {
            surface.stroke_polygon(&polygon, &self.style.solid(self.style.line_weight));
        }
    }
}

#[cfg(test)]
mod tests {
    use pinker_core::draw::ApproximateTextMeasure;
    use pinker_parser::parse;

    use super::*;
    use crate::{config::AppConfig, layout::LayoutEngine, route::Router};

    /// Records primitives as short strings.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    /// Names the default style colors.
    fn color_name(color: Color) -> &'static str {
        let named = [("background", "#FFFFFF"), ("shade", "#EEEEEE"), ("line", "#000000")];
        named
            .into_iter()
            .find(|(_, css)| Color::new(css).unwrap() == color)
            .map_or("other", |(name, _)| name)
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, _area: Area, color: Color) {
            self.calls.push(format!("fill_rect {}", color_name(color)));
        }

        fn stroke_rect(&mut self, _area: Area, _color: Color, weight: f32) {
            self.calls.push(format!("stroke_rect {weight:.2}"));
        }

        fn fill_text(&mut self, text: &str, _position: Point, _color: Color, _font: &Font) {
            self.calls.push(format!("text {text}"));
        }

        fn stroke_polyline(&mut self, points: &[Point], stroke: &StrokeDefinition) {
            let dashed = stroke.style().to_svg_value().is_some();
            self.calls
                .push(format!("polyline {} dashed={dashed}", points.len()));
        }

        fn fill_polygon(&mut self, points: &[Point], color: Color) {
            self.calls
                .push(format!("fill_polygon {} {}", points.len(), color_name(color)));
        }

        fn stroke_polygon(&mut self, points: &[Point], _stroke: &StrokeDefinition) {
            self.calls.push(format!("stroke_polygon {}", points.len()));
        }
    }

    fn render(source: &str) -> Vec<String> {
        let config = AppConfig::default();
        let document = parse(source);
        let nodes = LayoutEngine::new(config.layout(), ApproximateTextMeasure).layout(document.tree());
        let (connectors, _) = Router::new(&nodes).route(document.tree());
        let style = RenderStyle::from_config(config.style()).unwrap();

        let mut surface = RecordingSurface::default();
        Renderer::new(config.layout(), style, ApproximateTextMeasure).render(
            &nodes,
            &connectors,
            &mut surface,
        );
        surface.calls
    }

    #[test]
    fn test_paint_order() {
        let calls = render("layout:\n[A] [B]\nrelate:\n[A] -> [B]\n");

        assert_eq!(calls[0], "fill_rect background");
        assert_eq!(
            &calls[1..],
            [
                "text A",
                "stroke_rect 1.00",
                "text B",
                "stroke_rect 1.00",
                "polyline 2 dashed=false",
                "fill_polygon 3 line",
            ]
        );
    }

    #[test]
    fn test_header_define_and_rules() {
        let calls = render("layout:\n[T]\n[T]:\ndefine:\nid |\nname\n");

        assert_eq!(
            &calls[1..],
            [
                "fill_rect shade",
                "stroke_rect 1.00",
                "text T",
                "stroke_rect 1.00",
                "text id",
                "polyline 2 dashed=false",
                "text name",
                "stroke_rect 1.00",
            ]
        );
    }

    #[test]
    fn test_nested_outline_weights() {
        let calls = render("layout:\n[O]\n[O]:\nlayout:\n[I]\n");
        let weights: Vec<&String> = calls
            .iter()
            .filter(|call| call.starts_with("stroke_rect"))
            .collect();

        // Header band and outline of the depth-2 box, then the inner box.
        assert_eq!(weights, ["stroke_rect 1.33", "stroke_rect 1.33", "stroke_rect 1.00"]);
    }

    #[test]
    fn test_top_level_boxes_share_outline_weight() {
        let calls = render("layout:\n[O] [P]\n[O]:\nlayout:\n[I]\n");
        let weights: Vec<&String> = calls
            .iter()
            .filter(|call| call.starts_with("stroke_rect"))
            .collect();

        // O (header band and outline), then I, then P at the weight of O.
        assert_eq!(
            weights,
            [
                "stroke_rect 1.33",
                "stroke_rect 1.33",
                "stroke_rect 1.00",
                "stroke_rect 1.33",
            ]
        );
    }

    #[test]
    fn test_dashed_connector_with_outlined_head() {
        let calls = render("layout:\n[A]\n[B]\nrelate:\n[A] --o [B]\n");
        let tail = &calls[calls.len() - 3..];

        assert_eq!(
            tail,
            [
                "polyline 2 dashed=true",
                "fill_polygon 4 background",
                "stroke_polygon 4",
            ]
        );
    }

    #[test]
    fn test_invalid_style_color() {
        let style = StyleConfig::default().with_colors("white", "#zzzzzz", "black");

        let err = RenderStyle::from_config(&style).unwrap_err();
        assert!(matches!(err, PinkerError::Config(_)));
    }
}
