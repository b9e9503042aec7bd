//! Positioned boxes produced by the layout engine.

use std::fmt;

use indexmap::IndexMap;

use pinker_core::geometry::{Area, Size};

use super::{define::DefineLayout, label::LabelLayout};

/// Index of a [`Node`] in its [`NodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A box with its final geometry.
///
/// All areas except [`Node::relative_area`] are in canvas coordinates. A box
/// is split vertically into up to three regions: the label, the define text,
/// and the nested children.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) label: String,
    pub(crate) alias: Option<String>,
    pub(crate) path: String,
    pub(crate) depth: usize,
    pub(crate) area: Area,
    pub(crate) relative_area: Area,
    pub(crate) label_area: Area,
    pub(crate) define_area: Option<Area>,
    pub(crate) nested_area: Option<Area>,
    pub(crate) label_layout: LabelLayout,
    pub(crate) define_layout: Option<DefineLayout>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Dotted label path from the outermost box, e.g. `Outer.Inner`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Height of the subtree: 1 for a box without children.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// Position and size within the parent's nested region, or within the
    /// padded canvas for top-level boxes.
    pub fn relative_area(&self) -> Area {
        self.relative_area
    }

    pub fn label_area(&self) -> Area {
        self.label_area
    }

    pub fn define_area(&self) -> Option<Area> {
        self.define_area
    }

    pub fn nested_area(&self) -> Option<Area> {
        self.nested_area
    }

    pub fn label_layout(&self) -> &LabelLayout {
        &self.label_layout
    }

    pub fn define_layout(&self) -> Option<&DefineLayout> {
        self.define_layout.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if the label is drawn as a shaded band on top.
    pub fn has_header(&self) -> bool {
        self.label_layout.is_header()
    }

    /// Bottom edge of the region a side connector may attach to.
    ///
    /// Boxes with a header only accept side connectors at the header band.
    pub fn attach_bottom(&self) -> f32 {
        if self.has_header() {
            self.label_area.bottom()
        } else {
            self.area.bottom()
        }
    }
}

/// Every laid-out box, in pre-order, with lookups by path and alias.
#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    paths: IndexMap<String, NodeId>,
    aliases: IndexMap<String, NodeId>,
    canvas: Size,
}

impl NodeTree {
    pub(crate) fn new(canvas: Size) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Appends `node`, registering its path and alias unless already taken.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        match node.parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        self.paths.entry(node.path.clone()).or_insert(id);
        if let Some(alias) = &node.alias {
            self.aliases.entry(alias.clone()).or_insert(id);
        }
        self.nodes.push(node);
        id
    }

    /// Panics if `id` belongs to another tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes, parents before their children.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks a node up by its dotted label path.
    pub fn find_path(&self, path: &str) -> Option<NodeId> {
        self.paths.get(path).copied()
    }

    /// Looks a node up by alias; the first node in pre-order wins.
    pub fn find_alias(&self, alias: &str) -> Option<NodeId> {
        self.aliases.get(alias).copied()
    }

    /// Size of the whole drawing, padding included.
    pub fn canvas(&self) -> Size {
        self.canvas
    }
}
