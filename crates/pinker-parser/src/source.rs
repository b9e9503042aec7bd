//! The parsed scope hierarchy.
//!
//! Every scope of the document becomes a [`Source`] stored in a
//! [`SourceTree`] arena. The root scope has an empty label; its children are
//! the top-level boxes that received sections through scope or alias
//! references.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    section::{DefineSection, LayoutSection, RelateSection},
    span::Span,
};

/// Index of a [`Source`] in its [`SourceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(usize);

impl SourceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scope: its label, optional alias, sections and nested scopes.
#[derive(Debug, Clone, Default)]
pub struct Source {
    label: String,
    alias: Option<String>,
    define: Option<DefineSection>,
    layout: Option<LayoutSection>,
    relate: Option<RelateSection>,
    parent: Option<SourceId>,
    children: Vec<SourceId>,
    span: Span,
}

impl Source {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn define(&self) -> Option<&DefineSection> {
        self.define.as_ref()
    }

    pub fn layout(&self) -> Option<&LayoutSection> {
        self.layout.as_ref()
    }

    pub fn relate(&self) -> Option<&RelateSection> {
        self.relate.as_ref()
    }

    pub fn parent(&self) -> Option<SourceId> {
        self.parent
    }

    pub fn children(&self) -> &[SourceId] {
        &self.children
    }

    /// Span of the header that first declared this scope.
    pub fn span(&self) -> Span {
        self.span
    }

    /// A scope is renderable once it has text or nested boxes.
    pub fn is_valid(&self) -> bool {
        self.define.is_some() || self.layout.is_some()
    }
}

/// Where an alias was declared: the scope owning the layout, and the label of
/// the layout record carrying the alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDeclaration {
    owner: SourceId,
    label: String,
    span: Span,
}

impl AliasDeclaration {
    pub fn owner(&self) -> SourceId {
        self.owner
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Span of the layout section header that declared the alias.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Arena of [`Source`]s with a document-wide alias index.
#[derive(Debug, Clone)]
pub struct SourceTree {
    sources: Vec<Source>,
    aliases: IndexMap<String, AliasDeclaration>,
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceTree {
    /// Creates a tree holding only the unlabeled root scope.
    pub fn new() -> Self {
        Self {
            sources: vec![Source::default()],
            aliases: IndexMap::new(),
        }
    }

    pub fn root(&self) -> SourceId {
        SourceId(0)
    }

    /// Returns the source for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another tree.
    pub fn get(&self, id: SourceId) -> &Source {
        &self.sources[id.0]
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.len() <= 1 && !self.sources[0].is_valid()
    }

    /// Finds a direct child of `parent` by label.
    pub fn child_by_label(&self, parent: SourceId, label: &str) -> Option<SourceId> {
        self.get(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.get(child).label == label)
    }

    /// Finds a direct child of `parent` by alias.
    pub fn child_by_alias(&self, parent: SourceId, alias: &str) -> Option<SourceId> {
        self.get(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.get(child).alias.as_deref() == Some(alias))
    }

    /// Where `alias` was first declared.
    pub fn alias_declaration(&self, alias: &str) -> Option<&AliasDeclaration> {
        self.aliases.get(alias)
    }

    /// All declared aliases, in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &AliasDeclaration)> {
        self.aliases.iter().map(|(alias, decl)| (alias.as_str(), decl))
    }

    /// Resolves `alias` to the scope that received sections through it.
    pub fn resolve_alias(&self, alias: &str) -> Option<SourceId> {
        let declaration = self.aliases.get(alias)?;
        self.child_by_alias(declaration.owner, alias)
    }

    /// Labels from the root down to `id`, excluding the unlabeled root.
    pub fn label_path(&self, id: SourceId) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let source = self.get(id);
            if source.parent.is_some() {
                labels.push(source.label.as_str());
            }
            current = source.parent;
        }
        labels.reverse();
        labels
    }

    /// Sources in pre-order, starting at the root.
    pub fn pre_order(&self) -> Vec<SourceId> {
        let mut order = Vec::with_capacity(self.sources.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.get(id).children.iter().rev().copied());
        }
        order
    }

    pub(crate) fn add_child(&mut self, parent: SourceId, label: &str, span: Span) -> SourceId {
        let id = SourceId(self.sources.len());
        self.sources.push(Source {
            label: label.to_string(),
            parent: Some(parent),
            span,
            ..Source::default()
        });
        self.sources[parent.0].children.push(id);
        id
    }

    pub(crate) fn set_alias(&mut self, id: SourceId, alias: &str) {
        self.sources[id.0].alias = Some(alias.to_string());
    }

    /// Registers every alias declared by `layout` under `owner`; first wins.
    fn register_aliases(&mut self, owner: SourceId, layout: &LayoutSection, span: Span) {
        for record in layout.records() {
            if let Some(alias) = record.alias() {
                self.aliases
                    .entry(alias.to_string())
                    .or_insert_with(|| AliasDeclaration {
                        owner,
                        label: record.label().to_string(),
                        span,
                    });
            }
        }
    }

    /// Attaches a section if the slot is free; returns `false` for duplicates.
    ///
    /// An attached layout also declares its aliases, with `span` pointing at
    /// the section header.
    pub(crate) fn attach(&mut self, id: SourceId, section: SectionBody, span: Span) -> bool {
        let source = &self.sources[id.0];
        match section {
            SectionBody::Define(define) if source.define.is_none() => {
                self.sources[id.0].define = Some(define);
                true
            }
            SectionBody::Layout(layout) if source.layout.is_none() => {
                self.register_aliases(id, &layout, span);
                self.sources[id.0].layout = Some(layout);
                true
            }
            SectionBody::Relate(relate) if source.relate.is_none() => {
                self.sources[id.0].relate = Some(relate);
                true
            }
            _ => false,
        }
    }
}

/// A parsed plain section, ready to be attached to a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SectionBody {
    Define(DefineSection),
    Layout(LayoutSection),
    Relate(RelateSection),
}
