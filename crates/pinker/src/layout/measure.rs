//! Bottom-up measuring pass.
//!
//! Every box is sized from its label, define text and nested children, and
//! every scope packs its children into rows. Positions here are relative to
//! the parent's nested content origin.

use log::trace;

use pinker_core::{
    draw::TextMeasure,
    geometry::{Point, Size},
};
use pinker_parser::{
    section::LayoutRecord,
    source::{SourceId, SourceTree},
};

use super::{
    LayoutEngine,
    define::DefineLayout,
    label::LabelLayout,
    sizing::{self, Align, Placement},
};

/// A sized box that has not been placed on the canvas yet.
#[derive(Debug, Clone)]
pub(super) struct MeasuredNode {
    pub label: String,
    pub alias: Option<String>,
    pub label_layout: LabelLayout,
    pub define_layout: Option<DefineLayout>,
    pub nested: Option<MeasuredScope>,
    /// Natural heights of the label, define and nested regions.
    pub label_height: f32,
    pub define_height: f32,
    pub nested_height: f32,
    pub size: Size,
    pub depth: usize,
}

/// The children of one scope with their packed placements.
#[derive(Debug, Clone, Default)]
pub(super) struct MeasuredScope {
    pub children: Vec<MeasuredNode>,
    pub placements: Vec<Placement>,
    /// Bounding box of all placements.
    pub bounds: Size,
}

impl MeasuredScope {
    fn depth(&self) -> usize {
        self.children.iter().map(|child| child.depth).max().unwrap_or(0)
    }
}

impl<M: TextMeasure> LayoutEngine<'_, M> {
    /// Measures and packs the layout rows of `scope`.
    pub(super) fn measure_scope(&self, tree: &SourceTree, scope: SourceId) -> MeasuredScope {
        let Some(layout) = tree.get(scope).layout() else {
            return MeasuredScope::default();
        };
        let margin = self.config.scope_margin();

        let mut measured = MeasuredScope::default();
        let mut y = 0.0;
        let mut row_index = 0;
        for row in layout.rows() {
            if row.records().next().is_none() {
                continue;
            }

            let entries = row
                .left()
                .iter()
                .map(|record| (record, Align::Left))
                .chain(row.right().iter().map(|record| (record, Align::Right)));

            let mut x = 0.0;
            let mut row_height: f32 = 0.0;
            for (record, align) in entries {
                let node = self.measure_record(tree, scope, record);
                measured.placements.push(Placement {
                    row: row_index,
                    align,
                    position: Point::new(x, y),
                    size: node.size,
                });
                x += node.size.width() + margin;
                row_height = row_height.max(node.size.height());
                measured.children.push(node);
            }

            y += row_height + margin;
            row_index += 1;
        }

        if self.config.favor_uniform_node_sizes() {
            let variance = self.config.uniform_size_variance();
            sizing::uniform_widths(&mut measured.placements, variance);
            sizing::uniform_heights(&mut measured.placements, variance);
        }
        sizing::align_right(&mut measured.placements, margin);

        measured.bounds = measured
            .placements
            .iter()
            .fold(Size::default(), |bounds, placement| {
                bounds.max(Size::new(placement.right(), placement.bottom()))
            });
        measured
    }

    /// Measures the box for one layout entry of `parent`.
    fn measure_record(
        &self,
        tree: &SourceTree,
        parent: SourceId,
        record: &LayoutRecord,
    ) -> MeasuredNode {
        let padding = self.config.scope_padding();
        let source = find_child_source(tree, parent, record);

        let nested = source
            .map(|id| self.measure_scope(tree, id))
            .filter(|scope| !scope.children.is_empty());
        let define_layout = source
            .and_then(|id| tree.get(id).define())
            .map(|section| {
                DefineLayout::new(
                    section,
                    &self.font,
                    self.config.line_spacing(),
                    &self.measure,
                )
            });

        let label_layout = if nested.is_some() || define_layout.is_some() {
            LabelLayout::header(record.label(), &self.font, &self.measure)
        } else {
            LabelLayout::plain(
                record.label(),
                &self.font,
                &self.measure,
                self.config.favor_golden_ratio_label_size(),
            )
        };

        let label_height = label_layout.size().height() + 2.0 * padding;
        let define_height = define_layout
            .as_ref()
            .map_or(0.0, |define| define.size().height() + 2.0 * padding);
        let nested_height = nested
            .as_ref()
            .map_or(0.0, |scope| scope.bounds.height() + 2.0 * padding);

        let content_width = [
            Some(label_layout.size().width()),
            define_layout.as_ref().map(|define| define.size().width()),
            nested.as_ref().map(|scope| scope.bounds.width()),
        ]
        .into_iter()
        .flatten()
        .fold(0.0, f32::max);

        let size = Size::new(
            content_width + 2.0 * padding,
            label_height + define_height + nested_height,
        );
        let depth = 1 + nested.as_ref().map_or(0, MeasuredScope::depth);

        trace!(
            label = record.label(),
            width = size.width(),
            height = size.height();
            "Measured box"
        );

        MeasuredNode {
            label: record.label().to_string(),
            alias: record.alias().map(str::to_string),
            label_layout,
            define_layout,
            nested,
            label_height,
            define_height,
            nested_height,
            size,
            depth,
        }
    }
}

/// The child scope of `parent` that holds the sections of `record`.
///
/// Aliased entries are matched by alias first, since their scope may have
/// been opened through the alias; everything else is matched by label.
fn find_child_source(
    tree: &SourceTree,
    parent: SourceId,
    record: &LayoutRecord,
) -> Option<SourceId> {
    let by_label = || {
        (!record.label().is_empty())
            .then(|| tree.child_by_label(parent, record.label()))
            .flatten()
    };
    match record.alias() {
        Some(alias) => tree.child_by_alias(parent, alias).or_else(by_label),
        None => by_label(),
    }
}
