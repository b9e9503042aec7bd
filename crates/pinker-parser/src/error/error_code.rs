//! Error codes for the Pinker diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Syntax warnings raised while reading sections
//! - `E2xx` - Structural and reference errors
//! - `E3xx` - Geometry warnings raised while routing connectors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Warnings (E1xx)
    // =========================================================================
    /// Unknown section.
    ///
    /// A section header is neither `define`, `layout` nor `relate`.
    E100,

    /// Malformed relation.
    ///
    /// A relate line has no start term or no valid end term.
    E101,

    /// Duplicate section.
    ///
    /// A scope declares the same section kind twice; the first one is kept.
    E102,

    /// Unrecognized layout entry.
    ///
    /// A layout row contains text that is not `[Label]` or `{alias}`.
    E103,

    // =========================================================================
    // Structural Errors (E2xx)
    // =========================================================================
    /// Missing content.
    ///
    /// A scope has neither a `define` nor a `layout` section.
    E200,

    /// Unknown alias.
    ///
    /// An alias reference names an alias no layout section declares.
    E201,

    // =========================================================================
    // Geometry Warnings (E3xx)
    // =========================================================================
    /// Degenerate connector ranges.
    ///
    /// Two adjacent connector waypoints cannot agree on a shared coordinate.
    E300,

    /// Missing boundary intersection.
    ///
    /// A straight connector does not cross a box boundary; the box center is
    /// used instead.
    E301,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unknown section",
            ErrorCode::E101 => "malformed relation",
            ErrorCode::E102 => "duplicate section",
            ErrorCode::E103 => "unrecognized layout entry",
            ErrorCode::E200 => "no define or layout section",
            ErrorCode::E201 => "unknown alias",
            ErrorCode::E300 => "connector ranges do not intersect",
            ErrorCode::E301 => "no boundary intersection",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
