//! Error types for Pinker operations.
//!
//! Parsing, layout and routing never fail; they report [`Diagnostic`]s
//! instead. [`PinkerError`] covers what can still go wrong around them:
//! I/O, invalid configuration, and strict checks that turn error
//! diagnostics into a failure.

use std::io;

use thiserror::Error;

use pinker_parser::error::Diagnostic;

/// The main error type for Pinker operations.
///
/// # Diagnostic Variants
///
/// The `Diagnostics` variant keeps the source text next to the diagnostics so
/// that their spans can be rendered with context.
#[derive(Debug, Error)]
pub enum PinkerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{} error(s) found, first: {}", count_errors(.diagnostics), first_error(.diagnostics))]
    Diagnostics {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },
}

impl PinkerError {
    /// Create a new `Diagnostics` error with the associated source code.
    pub fn new_diagnostics(diagnostics: Vec<Diagnostic>, src: impl Into<String>) -> Self {
        Self::Diagnostics {
            diagnostics,
            src: src.into(),
        }
    }
}

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity().is_error())
        .count()
}

fn first_error(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .find(|diagnostic| diagnostic.severity().is_error())
        .map(ToString::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pinker_parser::error::ErrorCode;

    use super::*;

    #[test]
    fn test_diagnostics_display() {
        let err = PinkerError::new_diagnostics(
            vec![
                Diagnostic::warning("unknown section `x`").with_code(ErrorCode::E100),
                Diagnostic::error("cannot find alias 'a'").with_code(ErrorCode::E201),
            ],
            "",
        );

        assert_eq!(
            err.to_string(),
            "1 error(s) found, first: error[E201]: cannot find alias 'a'"
        );
    }

    #[test]
    fn test_config_display() {
        let err = PinkerError::Config("Invalid line color in config".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid line color in config"
        );
    }
}
