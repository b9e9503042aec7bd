//! Elaboration phase: section headers and bodies into a [`SourceTree`].
//!
//! The document is read as a flat list of sections. Reference headers
//! (`[scope]:`, `{alias}:`, `{alias}.path:`) redirect the plain sections
//! that follow them into a nested scope, which is resolved against the
//! scopes and aliases built so far.

use log::{debug, info, trace};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    grammar,
    preprocess::{self, SourceLine},
    section::{DefineSection, LayoutSection, Reference, RelateSection},
    source::{SectionBody, SourceId, SourceTree},
    span::Span,
};

/// A header line together with the body lines that follow it.
#[derive(Debug)]
struct RawSection<'a> {
    name: &'a str,
    span: Span,
    body: Vec<SourceLine<'a>>,
}

/// Groups lines into sections. Lines before the first header are ignored.
fn split_sections(text: &str) -> Vec<RawSection<'_>> {
    let mut sections: Vec<RawSection<'_>> = Vec::new();
    let mut ignored = 0;

    for line in preprocess::source_lines(text) {
        if let Some(name) = line.text.strip_suffix(':') {
            sections.push(RawSection {
                name: name.trim(),
                span: line.span,
                body: Vec::new(),
            });
        } else if let Some(section) = sections.last_mut() {
            section.body.push(line);
        } else {
            ignored += 1;
        }
    }

    if ignored > 0 {
        debug!(lines = ignored; "Ignoring lines before the first section header");
    }
    sections
}

pub struct Builder {
    tree: SourceTree,
    diagnostics: DiagnosticCollector,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            tree: SourceTree::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn build(mut self, text: &str) -> (SourceTree, Vec<Diagnostic>) {
        let sections = split_sections(text);
        debug!(sections = sections.len(); "Split document into sections");

        // `None` while the current reference group failed to resolve.
        let mut target = Some(self.tree.root());

        for section in &sections {
            match grammar::whole_reference(section.name) {
                Some(reference) => {
                    trace!(reference:?; "Entering reference group");
                    target = self.resolve_reference(&reference, section.span);
                    if !section.body.is_empty() {
                        debug!(
                            lines = section.body.len();
                            "Ignoring lines directly after a reference header",
                        );
                    }
                }
                None => {
                    if let Some(id) = target {
                        self.add_section(id, section);
                    }
                }
            }
        }

        self.validate();

        info!(
            sources = self.tree.len(),
            aliases = self.tree.aliases().count();
            "Source tree elaborated",
        );
        (self.tree, self.diagnostics.finish())
    }

    // ============================================================================
    // Reference Resolution
    // ============================================================================

    fn resolve_reference(&mut self, reference: &Reference, span: Span) -> Option<SourceId> {
        let root = self.tree.root();
        match reference {
            Reference::Scope(label) => self.resolve_scope(root, label, span),
            Reference::Alias(alias) => self.resolve_alias(alias, span),
            Reference::AliasPath { alias, path } => {
                let aliased = self.resolve_alias(alias, span)?;
                self.resolve_scope(aliased, path, span)
            }
        }
    }

    /// Finds or creates the scope `label` below `parent`, following dotted
    /// prefixes through existing children.
    fn resolve_scope(&mut self, parent: SourceId, label: &str, span: Span) -> Option<SourceId> {
        if label.is_empty() {
            debug!("Ignoring scope reference with an empty label");
            return None;
        }

        let children = self.tree.get(parent).children().to_vec();
        for child in children {
            let child_label = self.tree.get(child).label();
            if child_label == label {
                return Some(child);
            }
            if child_label.is_empty() {
                continue;
            }
            if let Some(rest) = label
                .strip_prefix(child_label)
                .and_then(|rest| rest.strip_prefix('.'))
            {
                return self.resolve_scope(child, rest, span);
            }
        }

        Some(self.tree.add_child(parent, label, span))
    }

    /// Finds or creates the scope declared by the layout record carrying `alias`.
    fn resolve_alias(&mut self, alias: &str, span: Span) -> Option<SourceId> {
        let Some(declaration) = self.tree.alias_declaration(alias).cloned() else {
            self.diagnostics.emit(
                Diagnostic::error(format!("cannot find alias '{alias}'"))
                    .with_code(ErrorCode::E201)
                    .with_label(span, "unknown alias")
                    .with_help(
                        "declare the alias in a layout section above, e.g. `[{alias} Label]`",
                    ),
            );
            return None;
        };

        let owner = declaration.owner();
        if let Some(existing) = self.tree.child_by_alias(owner, alias) {
            return Some(existing);
        }

        let label = declaration.label();
        let untagged = self
            .tree
            .get(owner)
            .children()
            .iter()
            .copied()
            .find(|&child| {
                let source = self.tree.get(child);
                !label.is_empty() && source.label() == label && source.alias().is_none()
            });

        let id = untagged.unwrap_or_else(|| self.tree.add_child(owner, label, span));
        self.tree.set_alias(id, alias);
        Some(id)
    }

    // ============================================================================
    // Plain Sections
    // ============================================================================

    fn add_section(&mut self, id: SourceId, section: &RawSection<'_>) {
        let kind = section.name.to_ascii_lowercase();
        let body = match kind.as_str() {
            "define" => SectionBody::Define(self.build_define(section)),
            "layout" => SectionBody::Layout(self.build_layout(id, section)),
            "relate" => SectionBody::Relate(self.build_relate(id, section)),
            _ => {
                let diagnostic = Diagnostic::warning(format!("unknown section `{}`", section.name))
                    .with_code(ErrorCode::E100)
                    .with_label(section.span, "unknown section")
                    .with_help("expected `define`, `layout` or `relate`");
                self.emit_in_scope(id, diagnostic);
                return;
            }
        };

        if !self.tree.attach(id, body, section.span) {
            let diagnostic = Diagnostic::warning(format!("duplicate `{kind}` section"))
                .with_code(ErrorCode::E102)
                .with_label(section.span, "ignored")
                .with_help(format!("only the first `{kind}` section of a scope is used"));
            self.emit_in_scope(id, diagnostic);
        }
    }

    fn build_define(&self, section: &RawSection<'_>) -> DefineSection {
        let mut define = DefineSection::default();
        for line in &section.body {
            grammar::define_line(&mut define, line.text);
        }
        trace!(lines = define.lines().len(); "Built define section");
        define
    }

    fn build_layout(&mut self, id: SourceId, section: &RawSection<'_>) -> LayoutSection {
        let mut layout = LayoutSection::default();
        for line in &section.body {
            let (row, unrecognized) = grammar::layout_row(line.text);
            for text in unrecognized {
                let diagnostic =
                    Diagnostic::warning(format!("unrecognized layout entry `{text}`"))
                        .with_code(ErrorCode::E103)
                        .with_label(line.span, "rest of this part is ignored")
                        .with_help("layout entries are `[Label]`, `{alias}` or `[{alias} Label]`");
                self.emit_in_scope(id, diagnostic);
            }
            layout.rows.push(row);
        }
        trace!(rows = layout.rows().len(); "Built layout section");
        layout
    }

    fn build_relate(&mut self, id: SourceId, section: &RawSection<'_>) -> RelateSection {
        let mut relate = RelateSection::default();
        for line in &section.body {
            match grammar::relate_line(line.text) {
                Ok(records) => relate.records.extend(records),
                Err(reason) => {
                    let diagnostic = Diagnostic::warning(format!("malformed relation: {reason}"))
                        .with_code(ErrorCode::E101)
                        .with_label(line.span, "relation skipped")
                        .with_help(reason.help());
                    self.emit_in_scope(id, diagnostic);
                }
            }
        }
        trace!(records = relate.records().len(); "Built relate section");
        relate
    }

    // ============================================================================
    // Validation
    // ============================================================================

    fn validate(&mut self) {
        let root = self.tree.root();
        let diagnostics = validate_source(&self.tree, root);
        debug!(errors = diagnostics.len(); "Validated source tree");
        self.diagnostics.extend(diagnostics);
    }

    fn emit_in_scope(&mut self, id: SourceId, diagnostic: Diagnostic) {
        let diagnostic = self
            .tree
            .label_path(id)
            .into_iter()
            .rev()
            .fold(diagnostic, |diagnostic, label| diagnostic.with_scope(label));
        self.diagnostics.emit(diagnostic);
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the "define or layout" rule at `id` and below.
///
/// Diagnostics carry scope paths relative to `id`; each level prepends the
/// child's label on the way up.
fn validate_source(tree: &SourceTree, id: SourceId) -> Vec<Diagnostic> {
    let source = tree.get(id);
    let mut diagnostics = Vec::new();

    if !source.is_valid() {
        let mut diagnostic = Diagnostic::error("no define or layout section")
            .with_code(ErrorCode::E200)
            .with_help("add a `define:` or `layout:` section to this scope");
        if source.parent().is_some() {
            diagnostic = diagnostic.with_label(source.span(), "scope declared here");
        }
        diagnostics.push(diagnostic);
    }

    for &child in source.children() {
        let label = tree.get(child).label();
        diagnostics.extend(
            validate_source(tree, child)
                .into_iter()
                .map(|diagnostic| diagnostic.with_scope(label)),
        );
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> (SourceTree, Vec<Diagnostic>) {
        Builder::new().build(text)
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
        diagnostics.iter().filter_map(Diagnostic::code).collect()
    }

    #[test]
    fn test_split_sections_ignores_preamble() {
        let sections = split_sections("intro text\nlayout:\n[A]\ndefine :\nText\n");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "layout");
        assert_eq!(sections[0].body.len(), 1);
        assert_eq!(sections[1].name, "define");
        assert_eq!(sections[1].body[0].text, "Text");
    }

    #[test]
    fn test_scope_reference_creates_child() {
        let (tree, diagnostics) = build("layout:\n[A]\n[A]:\ndefine:\nHello\n");
        let root = tree.root();
        let a = tree.child_by_label(root, "A").unwrap();

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(tree.get(a).define().unwrap().lines(), ["Hello"]);
    }

    #[test]
    fn test_dotted_scope_walks_existing_children() {
        let text = "layout:\n[A]\n[A]:\nlayout:\n[B]\n[A.B]:\ndefine:\nInner\n";
        let (tree, diagnostics) = build(text);
        let a = tree.child_by_label(tree.root(), "A").unwrap();
        let b = tree.child_by_label(a, "B").unwrap();

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(tree.get(b).define().unwrap().lines(), ["Inner"]);
        assert_eq!(tree.label_path(b), vec!["A", "B"]);
    }

    #[test]
    fn test_repeated_scope_reference_merges() {
        let text = "layout:\n[A]\n[A]:\ndefine:\nText\n[A]:\nrelate:\n[A] -> [A]\n";
        let (tree, _) = build(text);
        let root = tree.root();

        assert_eq!(tree.get(root).children().len(), 1);
        let a = tree.child_by_label(root, "A").unwrap();
        assert!(tree.get(a).define().is_some());
        assert!(tree.get(a).relate().is_some());
    }

    #[test]
    fn test_alias_reference_tags_child() {
        let text = "layout:\n[{db} Database] {c}\n{db}:\ndefine:\nrows\n{c}:\ndefine:\ncache\n";
        let (tree, diagnostics) = build(text);
        let db = tree.resolve_alias("db").unwrap();
        let c = tree.resolve_alias("c").unwrap();

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(tree.get(db).label(), "Database");
        assert_eq!(tree.get(c).label(), "");
        assert_ne!(db, c);
    }

    #[test]
    fn test_alias_and_scope_reference_share_child() {
        let text = "layout:\n[{db} Database]\n[Database]:\ndefine:\nrows\n{db}:\nrelate:\n[A] -> [B]\n";
        let (tree, _) = build(text);
        let root = tree.root();

        assert_eq!(tree.get(root).children().len(), 1);
        let db = tree.resolve_alias("db").unwrap();
        assert!(tree.get(db).define().is_some());
        assert!(tree.get(db).relate().is_some());
    }

    #[test]
    fn test_alias_path_reference() {
        let text = "layout:\n[{a} Outer]\n{a}:\nlayout:\n[Inner]\n{a}.[Inner]:\ndefine:\ntext\n";
        let (tree, diagnostics) = build(text);
        let outer = tree.resolve_alias("a").unwrap();
        let inner = tree.child_by_label(outer, "Inner").unwrap();

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert!(tree.get(inner).define().is_some());
    }

    #[test]
    fn test_unknown_alias_reports_error_and_drops_group() {
        let (tree, diagnostics) = build("layout:\n[A]\n{x}:\ndefine:\ntext\n");

        assert_eq!(codes(&diagnostics), vec![ErrorCode::E201]);
        assert_eq!(diagnostics[0].message(), "cannot find alias 'x'");
        assert!(tree.get(tree.root()).children().is_empty());
    }

    #[test]
    fn test_duplicate_and_unknown_sections_warn() {
        let text = "layout:\n[A]\nlayout:\n[B]\nstyles:\ncolor\n";
        let (tree, diagnostics) = build(text);

        assert_eq!(codes(&diagnostics), vec![ErrorCode::E102, ErrorCode::E100]);
        let layout = tree.get(tree.root()).layout().unwrap();
        assert_eq!(layout.records().next().unwrap().label(), "A");
    }

    #[test]
    fn test_section_names_are_case_insensitive() {
        let (tree, diagnostics) = build("DEFINE:\nText\nLayout:\n[A]\n");

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert!(tree.get(tree.root()).define().is_some());
        assert!(tree.get(tree.root()).layout().is_some());
    }

    #[test]
    fn test_validation_tags_scope_path() {
        let text = "layout:\n[A]\n[A]:\nlayout:\n[B]\n[A.B]:\nrelate:\n[X] -> [Y]\n";
        let (_, diagnostics) = build(text);

        assert_eq!(codes(&diagnostics), vec![ErrorCode::E200]);
        assert_eq!(diagnostics[0].scope_path(), "A.B");
        assert_eq!(
            diagnostics[0].to_string(),
            "error[E200]: no define or layout section (in scope `A.B`)"
        );
    }

    #[test]
    fn test_empty_document_reports_untagged_error() {
        let (_, diagnostics) = build("");

        assert_eq!(codes(&diagnostics), vec![ErrorCode::E200]);
        assert_eq!(diagnostics[0].scope_path(), "");
        assert!(diagnostics[0].labels().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_scoped() {
        let text = "layout:\n[A]\n[A]:\nlayout:\n[B] ???\nrelate:\nnot a relation\n";
        let (_, diagnostics) = build(text);

        assert_eq!(codes(&diagnostics), vec![ErrorCode::E103, ErrorCode::E101]);
        assert!(diagnostics.iter().all(|d| d.scope_path() == "A"));
    }
}
