//! Error and diagnostic system for the Pinker parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the source text
//! - Severity levels
//! - The dotted scope path a diagnostic belongs to
//! - Diagnostic collector for accumulating multiple errors
//!
//! Parsing never fails: every problem found while reading a document is
//! reported as a [`Diagnostic`] next to the tree that could still be built.
//!
//! # Example
//!
//! ```
//! # use pinker_parser::error::{Diagnostic, ErrorCode};
//! # use pinker_parser::Span;
//!
//! let diag = Diagnostic::error("cannot find alias 'db'")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(10..16), "unknown alias")
//!     .with_help("declare the alias in a layout section first");
//!
//! assert_eq!(diag.to_string(), "error[E201]: cannot find alias 'db'");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
