//! Collector for accumulating diagnostics during a processing phase.

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics during a processing phase.
///
/// Phases report every problem they find instead of failing on the first
/// one; the caller receives the full list together with its result.
///
/// # Example
///
/// ```
/// # use pinker_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
/// let mut collector = DiagnosticCollector::new();
///
/// collector.emit(Diagnostic::warning("unknown section `styles`").with_code(ErrorCode::E100));
/// assert!(!collector.has_errors());
///
/// collector.emit(Diagnostic::error("cannot find alias 'a'").with_code(ErrorCode::E201));
/// assert!(collector.has_errors());
///
/// assert_eq!(collector.finish().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Emit every diagnostic from an iterator.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Returns `true` if an error-severity diagnostic was emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Returns `true` if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish collection and return all diagnostics in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
