//! # Pinker Parser
//!
//! Parser for the Pinker diagram language: plain-text sections describing
//! nested labeled boxes and the relations between them.
//!
//! ## Usage
//!
//! ```
//! # use pinker_parser::parse;
//! let document = parse(
//!     "layout:
//!         [Client] [{srv} Server]
//!      relate:
//!         [Client] -> {srv}
//!      {srv}:
//!      define:
//!         handles requests",
//! );
//!
//! assert!(!document.has_errors());
//! let tree = document.tree();
//! let server = tree.resolve_alias("srv").unwrap();
//! assert_eq!(tree.get(server).label(), "Server");
//! ```
//!
//! Parsing never fails: the [`Document`] always holds a tree, and problems
//! are reported as [`error::Diagnostic`]s next to it.

mod elaborate;
pub mod error;
mod grammar;
mod preprocess;
pub mod section;
pub mod source;
mod span;

pub use preprocess::decode_entities;
pub use span::Span;

use error::Diagnostic;
use source::SourceTree;

/// The outcome of parsing: the scope tree and everything noticed on the way.
#[derive(Debug, Clone)]
pub struct Document {
    tree: SourceTree,
    diagnostics: Vec<Diagnostic>,
}

impl Document {
    pub fn tree(&self) -> &SourceTree {
        &self.tree
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_error())
    }

    pub fn into_parts(self) -> (SourceTree, Vec<Diagnostic>) {
        (self.tree, self.diagnostics)
    }
}

/// Parse source text into a [`Document`].
///
/// 1. **Split** - trim lines and group them under `name:` headers
/// 2. **Elaborate** - resolve reference headers and attach section bodies
/// 3. **Validate** - require a define or layout section in every scope
///
/// Spans in the returned diagnostics are byte offsets into `source`.
pub fn parse(source: &str) -> Document {
    let (tree, diagnostics) = elaborate::Builder::new().build(source);
    Document { tree, diagnostics }
}
