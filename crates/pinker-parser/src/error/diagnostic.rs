//! The core diagnostic type for the Pinker error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, labeled source spans, help text, and the dotted path of the
//! scope it was raised in.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A rich diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E200]: no define or layout section (in scope `Service.Cache`)
///   ,-[2:1]
/// 2 | [Service.Cache]:
///   : ^^^^^^^^^^^^^^^^ scope declared here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
    scope: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use pinker_parser::error::{Diagnostic, ErrorCode};
    /// # use pinker_parser::Span;
    ///
    /// let diag = Diagnostic::error("no define or layout section")
    ///     .with_code(ErrorCode::E200)
    ///     .with_label(Span::new(0..6), "empty scope")
    ///     .with_scope("Inner")
    ///     .with_scope("Outer");
    ///
    /// assert_eq!(diag.scope_path(), "Outer.Inner");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Dotted label path of the scope this diagnostic belongs to, empty for
    /// the document root.
    pub fn scope_path(&self) -> String {
        self.scope.join(".")
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Prepend an enclosing scope label to the scope path.
    ///
    /// Diagnostics bubble up from nested scopes, so each level adds its own
    /// label in front. Empty labels (the root) are skipped.
    pub fn with_scope(mut self, label: &str) -> Self {
        if !label.is_empty() {
            self.scope.insert(0, label.to_string());
        }
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
            scope: Vec::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E200]: message (in scope `A.B`)" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if !self.scope.is_empty() {
            write!(f, " (in scope `{}`)", self.scope_path())?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Severity::Error, "test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
        assert_eq!(diag.scope_path(), "");
    }

    #[test]
    fn test_diagnostic_with_labels() {
        let diag = Diagnostic::error("cannot find alias 'a'")
            .with_label(Span::new(10..20), "referenced here")
            .with_secondary_label(Span::new(0..5), "scope");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_scope_prepends() {
        let diag = Diagnostic::error("no define or layout section")
            .with_scope("C")
            .with_scope("")
            .with_scope("B")
            .with_scope("A");

        assert_eq!(diag.scope_path(), "A.B.C");
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("cannot find alias 'x'").with_code(ErrorCode::E201);

        assert_eq!(diag.to_string(), "error[E201]: cannot find alias 'x'");
    }

    #[test]
    fn test_diagnostic_display_with_scope() {
        let diag = Diagnostic::error("no define or layout section")
            .with_code(ErrorCode::E200)
            .with_scope("B")
            .with_scope("A");

        assert_eq!(
            diag.to_string(),
            "error[E200]: no define or layout section (in scope `A.B`)"
        );
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("ignored line");

        assert_eq!(diag.to_string(), "warning: ignored line");
    }
}
