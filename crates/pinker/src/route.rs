//! Connector routing between laid-out boxes.
//!
//! Every relate record becomes a [`Connector`] once both of its ends resolve
//! to a box. References are resolved against the [`NodeTree`]:
//!
//! - `[Path]` is tried relative to the scope holding the relate section,
//!   then as an absolute path
//! - `{alias}` names the first box in pre-order carrying that alias
//! - `{alias}.Path` descends from the aliased box
//!
//! Records with an unresolved end are skipped and logged.

mod path;

pub use path::PathGeometry;

use log::{debug, warn};

use pinker_core::{
    draw::{ArrowHeadKind, LineStyle},
    geometry::Point,
};
use pinker_parser::{
    error::{Diagnostic, ErrorCode},
    section::{Reference, RelateRecord},
    source::SourceTree,
};

use crate::layout::{NodeId, NodeTree};
use path::{Endpoints, PathIssue};

/// A routed relation between two boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    start: NodeId,
    end: NodeId,
    token: String,
    line_style: LineStyle,
    arrow_head: ArrowHeadKind,
    geometry: PathGeometry,
    points: Vec<Point>,
}

impl Connector {
    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    /// The arrow token as written, e.g. `=>` or `-o`.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn arrow_head(&self) -> ArrowHeadKind {
        self.arrow_head
    }

    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// Resolved waypoints, from the start box to the end box.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Routes relate records over a finished layout.
#[derive(Debug)]
pub struct Router<'a> {
    nodes: &'a NodeTree,
}

impl<'a> Router<'a> {
    pub fn new(nodes: &'a NodeTree) -> Self {
        Self { nodes }
    }

    /// Routes every relate record of `tree`, visiting scopes in pre-order.
    ///
    /// Geometry problems are reported as warnings; the affected connector is
    /// still drawn.
    pub fn route(&self, tree: &SourceTree) -> (Vec<Connector>, Vec<Diagnostic>) {
        let mut connectors = Vec::new();
        let mut diagnostics = Vec::new();

        for id in tree.pre_order() {
            let Some(relate) = tree.get(id).relate() else {
                continue;
            };
            let scope = tree.label_path(id);
            let scope_path = scope.join(".");

            for record in relate.records() {
                let Some(connector) = self.connect(&scope_path, record, |issue| {
                    diagnostics.push(issue_diagnostic(issue, record, &scope));
                }) else {
                    continue;
                };
                connectors.push(connector);
            }
        }

        debug!(connectors_len = connectors.len(); "Connectors routed");
        (connectors, diagnostics)
    }

    fn connect(
        &self,
        scope_path: &str,
        record: &RelateRecord,
        mut report: impl FnMut(PathIssue),
    ) -> Option<Connector> {
        let start = self.resolve(scope_path, record.start());
        let end = self.resolve(scope_path, record.end());
        let (Some(start), Some(end)) = (start, end) else {
            warn!(
                start = record.start().to_string(),
                end = record.end().to_string(),
                scope = scope_path;
                "Skipping relation with an unresolved end",
            );
            return None;
        };
        if start == end {
            warn!(node = record.start().to_string(); "Skipping relation of a box to itself");
            return None;
        }

        let (start_node, end_node) = (self.nodes.get(start), self.nodes.get(end));
        let endpoints = Endpoints {
            start: start_node.area(),
            end: end_node.area(),
            start_attach_bottom: start_node.attach_bottom(),
            end_attach_bottom: end_node.attach_bottom(),
        };

        let mut issues = Vec::new();
        let geometry = PathGeometry::between(endpoints, &mut issues).clean(&mut issues);
        issues.into_iter().for_each(&mut report);
        let points = geometry.resolve();

        let token = record.arrow();
        Some(Connector {
            start,
            end,
            token: token.to_string(),
            line_style: LineStyle::from_token(token),
            arrow_head: ArrowHeadKind::from_token(token),
            geometry,
            points,
        })
    }

    /// Finds the box a reference points at, seen from `scope_path`.
    fn resolve(&self, scope_path: &str, reference: &Reference) -> Option<NodeId> {
        match reference {
            Reference::Alias(alias) => self.nodes.find_alias(alias),
            Reference::AliasPath { alias, path } => {
                let base = self.nodes.get(self.nodes.find_alias(alias)?);
                self.nodes.find_path(&format!("{}.{path}", base.path()))
            }
            Reference::Scope(path) => {
                let relative = (!scope_path.is_empty())
                    .then(|| self.nodes.find_path(&format!("{scope_path}.{path}")))
                    .flatten();
                relative.or_else(|| self.nodes.find_path(path))
            }
        }
    }
}

fn issue_diagnostic(issue: PathIssue, record: &RelateRecord, scope: &[&str]) -> Diagnostic {
    let relation = format!("{} {} {}", record.start(), record.arrow(), record.end());
    let diagnostic = match issue {
        PathIssue::DisjointRanges => {
            Diagnostic::warning(format!("ranges don't intersect for `{relation}`"))
                .with_code(ErrorCode::E300)
                .with_help("the connector is drawn with a bend at the gap")
        }
        PathIssue::NoBoundaryIntersection => {
            Diagnostic::warning(format!("no boundary intersection for `{relation}`"))
                .with_code(ErrorCode::E301)
                .with_help("one box contains the other; the connector starts at its center")
        }
    };
    scope
        .iter()
        .rev()
        .fold(diagnostic, |diagnostic, label| diagnostic.with_scope(label))
}

#[cfg(test)]
mod tests {
    use pinker_core::draw::ApproximateTextMeasure;
    use pinker_parser::parse;

    use super::*;
    use crate::{config::LayoutConfig, layout::LayoutEngine};

    fn route(source: &str) -> (NodeTree, Vec<Connector>, Vec<Diagnostic>) {
        let document = parse(source);
        let config = LayoutConfig::default();
        let nodes = LayoutEngine::new(&config, ApproximateTextMeasure).layout(document.tree());
        let (connectors, diagnostics) = Router::new(&nodes).route(document.tree());
        (nodes, connectors, diagnostics)
    }

    #[test]
    fn test_side_by_side_connector() {
        let (nodes, connectors, diagnostics) = route("layout:\n[A] [B]\nrelate:\n[A] -> [B]\n");

        assert!(diagnostics.is_empty());
        assert_eq!(connectors.len(), 1);
        let connector = &connectors[0];
        assert_eq!(connector.start(), nodes.find_path("A").unwrap());
        assert_eq!(connector.end(), nodes.find_path("B").unwrap());
        assert_eq!(connector.arrow_head(), ArrowHeadKind::FilledArrow);
        assert_eq!(connector.line_style(), LineStyle::Solid);

        let points = connector.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].y(), points[1].y());
        assert_eq!(points[0].x(), nodes.get(connector.start()).area().right());
        assert_eq!(points[1].x(), nodes.get(connector.end()).area().left());
    }

    #[test]
    fn test_stacked_connector() {
        let (nodes, connectors, _) = route("layout:\n[A]\n[B]\nrelate:\n[A] => [B]\n");

        let connector = &connectors[0];
        let points = connector.points();
        assert_eq!(points[0].x(), points[1].x());
        assert_eq!(points[0].y(), nodes.get(connector.start()).area().bottom());
        assert_eq!(points[1].y(), nodes.get(connector.end()).area().top());
        assert_eq!(connector.line_style(), LineStyle::Dashed);
        assert_eq!(connector.arrow_head(), ArrowHeadKind::FilledArrow);
    }

    #[test]
    fn test_arrow_tokens() {
        let (_, connectors, _) = route(
            "layout:\n[A] [B] [C] [D]\nrelate:\n[A] -o [B]\n[B] -+ [C]\n[C] :> [D]\n[D] - [A]\n",
        );

        let heads: Vec<ArrowHeadKind> = connectors.iter().map(Connector::arrow_head).collect();
        assert_eq!(
            heads,
            vec![
                ArrowHeadKind::HollowDiamond,
                ArrowHeadKind::FilledDiamond,
                ArrowHeadKind::HollowArrow,
                ArrowHeadKind::None,
            ]
        );
        assert_eq!(connectors[2].token(), ":>");
    }

    #[test]
    fn test_relative_paths_inside_scope() {
        let source = "layout:\n[Outer]\n[Outer]:\nlayout:\n[X] [Y]\nrelate:\n[X] -> [Y]\n";
        let (nodes, connectors, _) = route(source);

        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].start(), nodes.find_path("Outer.X").unwrap());
        assert_eq!(connectors[0].end(), nodes.find_path("Outer.Y").unwrap());
    }

    #[test]
    fn test_alias_and_alias_path_ends() {
        let source = "layout:\n[{o} Outer] [Z]\n{o}:\nlayout:\n[Inner]\nrelate:\n[Z] -> {o}.Inner\n{o} -> [Z]\n";
        let (nodes, connectors, _) = route(source);

        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].start(), nodes.find_path("Z").unwrap());
        assert_eq!(connectors[0].end(), nodes.find_path("Outer.Inner").unwrap());
        assert_eq!(connectors[1].start(), nodes.find_alias("o").unwrap());
        assert_eq!(connectors[1].end(), nodes.find_path("Z").unwrap());
    }

    #[test]
    fn test_unresolved_and_self_relations_are_skipped() {
        let (_, connectors, diagnostics) =
            route("layout:\n[A] [B]\nrelate:\n[A] -> [Missing]\n[A] -> [A]\n");

        assert!(connectors.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_multiple_ends() {
        let (_, connectors, _) = route("layout:\n[A] [B] [C]\nrelate:\n[A] -> [B], [C]\n");

        assert_eq!(connectors.len(), 2);
    }

    #[test]
    fn test_nested_relation_warns_without_boundary_intersection() {
        let source = "layout:\n[Outer]\n[Outer]:\nlayout:\n[Inner]\nrelate:\n[Outer] -> [Outer.Inner]\n";
        let (_, connectors, diagnostics) = route(source);

        assert_eq!(connectors.len(), 1);
        assert!(
            diagnostics
                .iter()
                .any(|diagnostic| diagnostic.code() == Some(ErrorCode::E301))
        );
    }
}
