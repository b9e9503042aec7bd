//! Parsed section bodies: define, layout, and relate.

use std::fmt;

/// A reference to a scope, as written in headers and relate lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// `[Outer.Inner]`: a dotted label path.
    Scope(String),
    /// `{alias}`: an alias declared in some layout section.
    Alias(String),
    /// `{alias}.Path`: a scope path below an aliased scope.
    AliasPath { alias: String, path: String },
}

impl Reference {
    /// Returns the alias this reference starts from, if any.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Reference::Scope(_) => None,
            Reference::Alias(alias) | Reference::AliasPath { alias, .. } => Some(alias),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Scope(path) => write!(f, "[{path}]"),
            Reference::Alias(alias) => write!(f, "{{{alias}}}"),
            Reference::AliasPath { alias, path } => write!(f, "{{{alias}}}.[{path}]"),
        }
    }
}

/// Text lines of a box, with horizontal rules between some of them.
///
/// A rule at position `k` is drawn below line `k - 1`; a rule at position 0
/// sits above every line and is never drawn.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefineSection {
    lines: Vec<String>,
    rules: Vec<usize>,
}

impl DefineSection {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn rules(&self) -> &[usize] {
        &self.rules
    }

    /// Returns `true` if a rule is drawn directly below line `index`.
    pub fn has_rule_after(&self, index: usize) -> bool {
        self.rules.contains(&(index + 1))
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        if !line.is_empty() {
            self.lines.push(line.to_string());
        }
    }

    /// Adds a rule below the current last line; consecutive rules collapse.
    pub(crate) fn push_rule(&mut self) {
        let position = self.lines.len();
        if self.rules.last() != Some(&position) {
            self.rules.push(position);
        }
    }
}

/// One box placement in a layout row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRecord {
    label: String,
    alias: Option<String>,
}

impl LayoutRecord {
    pub fn new(label: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            label: label.into(),
            alias,
        }
    }

    /// Visible label; empty for bare `{alias}` entries.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// A layout row: boxes packed from the left, then boxes packed from the right.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub(crate) left: Vec<LayoutRecord>,
    pub(crate) right: Vec<LayoutRecord>,
}

impl LayoutRow {
    pub fn left(&self) -> &[LayoutRecord] {
        &self.left
    }

    pub fn right(&self) -> &[LayoutRecord] {
        &self.right
    }

    /// Left-aligned records followed by right-aligned ones.
    pub fn records(&self) -> impl Iterator<Item = &LayoutRecord> {
        self.left.iter().chain(&self.right)
    }
}

/// Rows of nested boxes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutSection {
    pub(crate) rows: Vec<LayoutRow>,
}

impl LayoutSection {
    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    pub fn records(&self) -> impl Iterator<Item = &LayoutRecord> {
        self.rows.iter().flat_map(LayoutRow::records)
    }

    /// The record declaring `alias`, if this layout declares it.
    pub fn find_alias(&self, alias: &str) -> Option<&LayoutRecord> {
        self.records().find(|record| record.alias() == Some(alias))
    }
}

/// A directed relation between two scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelateRecord {
    start: Reference,
    arrow: String,
    end: Reference,
}

impl RelateRecord {
    pub fn new(start: Reference, arrow: impl Into<String>, end: Reference) -> Self {
        Self {
            start,
            arrow: arrow.into(),
            end,
        }
    }

    pub fn start(&self) -> &Reference {
        &self.start
    }

    /// The arrow token, such as `->` or `=>`; may be empty.
    pub fn arrow(&self) -> &str {
        &self.arrow
    }

    pub fn end(&self) -> &Reference {
        &self.end
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelateSection {
    pub(crate) records: Vec<RelateRecord>,
}

impl RelateSection {
    pub fn records(&self) -> &[RelateRecord] {
        &self.records
    }
}
