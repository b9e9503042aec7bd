//! Layout engine: turns a parsed scope tree into positioned boxes.
//!
//! Layout runs in two passes:
//!
//! 1. **Measure** (bottom-up) - size every box from its label, define text
//!    and nested children, pack siblings into rows, then apply uniform
//!    sizing and right alignment.
//! 2. **Commit** (top-down) - convert relative placements into canvas
//!    coordinates and split each box into its label, define and nested
//!    regions.
//!
//! # Box anatomy
//!
//! ```text
//! +-----------------------+
//! |        Label          |  label region (shaded when a header)
//! +-----------------------+
//! | define line           |  define region
//! +-----------------------+
//! |  [child]  [child]     |  nested region, children centered
//! +-----------------------+
//! ```
//!
//! Only the outermost layout section is drawn; the top-level scope's own
//! define section has no box to live in.

mod define;
mod label;
mod measure;
mod node;
mod sizing;

pub use define::DefineLayout;
pub use label::LabelLayout;
pub use node::{Node, NodeId, NodeTree};

use log::debug;

use pinker_core::{
    draw::{Font, TextMeasure},
    geometry::{Area, Insets, Point},
};
use pinker_parser::source::SourceTree;

use crate::config::LayoutConfig;
use measure::MeasuredNode;
use sizing::Placement;

/// Computes box geometry for a [`SourceTree`].
///
/// Text is sized through `M`; pass an
/// [`ApproximateTextMeasure`](pinker_core::draw::ApproximateTextMeasure) for
/// deterministic results.
#[derive(Debug)]
pub struct LayoutEngine<'a, M> {
    config: &'a LayoutConfig,
    measure: M,
    font: Font,
}

impl<'a, M: TextMeasure> LayoutEngine<'a, M> {
    pub fn new(config: &'a LayoutConfig, measure: M) -> Self {
        Self {
            config,
            measure,
            font: config.font(),
        }
    }

    /// Lays out every box reachable from the top-level layout section.
    pub fn layout(&self, tree: &SourceTree) -> NodeTree {
        let measured = self.measure_scope(tree, tree.root());
        let canvas_padding = self.config.canvas_padding();
        let canvas = measured
            .bounds
            .add_padding(Insets::uniform(canvas_padding));

        let mut nodes = NodeTree::new(canvas);
        let origin = Point::new(canvas_padding, canvas_padding);
        for (child, placement) in measured.children.iter().zip(&measured.placements) {
            self.commit(&mut nodes, child, placement, origin, None, "");
        }

        debug!(
            nodes_len = nodes.len(),
            width = canvas.width(),
            height = canvas.height();
            "Layout computed",
        );
        nodes
    }

    /// Places `measured` at `origin + placement` and recurses into its children.
    fn commit(
        &self,
        nodes: &mut NodeTree,
        measured: &MeasuredNode,
        placement: &Placement,
        origin: Point,
        parent: Option<NodeId>,
        parent_path: &str,
    ) {
        let padding = self.config.scope_padding();
        let area = Area::from_point_size(origin.add_point(placement.position), placement.size);

        // Growth from uniform sizing goes to the lowest region present.
        let growth = (placement.size.height() - measured.size.height()).max(0.0);
        let mut label_height = measured.label_height;
        let mut define_height = measured.define_height;
        let mut nested_height = measured.nested_height;
        if measured.nested.is_some() {
            nested_height += growth;
        } else if measured.define_layout.is_some() {
            define_height += growth;
        } else {
            label_height += growth;
        }

        let width = area.width();
        let label_area = Area::new(area.x(), area.y(), width, label_height)
            .with_padding(Insets::uniform(padding));
        let define_area = measured.define_layout.as_ref().map(|_| {
            Area::new(area.x(), label_area.bottom(), width, define_height)
                .with_padding(Insets::uniform(padding))
        });
        let nested_top = define_area.map_or(label_area.bottom(), Area::bottom);
        let nested_area = measured.nested.as_ref().map(|scope| {
            let horizontal = (width - scope.bounds.width()) / 2.0;
            let vertical = (nested_height - scope.bounds.height()) / 2.0;
            Area::new(area.x(), nested_top, width, nested_height)
                .with_padding(Insets::symmetric(vertical, horizontal))
        });

        let path = if parent_path.is_empty() {
            measured.label.clone()
        } else {
            format!("{parent_path}.{}", measured.label)
        };

        let id = nodes.push(Node {
            label: measured.label.clone(),
            alias: measured.alias.clone(),
            path: path.clone(),
            depth: measured.depth,
            area,
            relative_area: Area::from_point_size(placement.position, placement.size),
            label_area,
            define_area,
            nested_area,
            label_layout: measured.label_layout.clone(),
            define_layout: measured.define_layout.clone(),
            parent,
            children: Vec::new(),
        });

        if let (Some(scope), Some(nested_area)) = (&measured.nested, nested_area) {
            let child_origin = nested_area.content_origin();
            for (child, child_placement) in scope.children.iter().zip(&scope.placements) {
                self.commit(nodes, child, child_placement, child_origin, Some(id), &path);
            }
        }
    }
}
