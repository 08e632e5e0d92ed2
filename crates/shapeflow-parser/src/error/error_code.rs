//! Error codes for translation failures.
//!
//! Error codes are organized by failure kind:
//! - `E1xx` - Malformed input
//! - `E2xx` - Unknown shape types
//! - `E3xx` - Reference resolution
//! - `E4xx` - Identifier bookkeeping

use std::fmt;

/// Error codes for categorizing translation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Malformed Input (E1xx)
    // =========================================================================
    /// Invalid JSON syntax.
    ///
    /// The document is not well-formed JSON or ends early.
    E100,

    /// Unexpected document shape.
    ///
    /// A field holds a value of the wrong type, for example `childShapes`
    /// that is not an array, or an `outgoing` wrapper without `resourceId`.
    E101,

    /// Missing stencil.
    ///
    /// A shape object closed without a `stencil` field.
    E102,

    /// Invalid document root.
    ///
    /// The outermost shape is not a diagram.
    E103,

    // =========================================================================
    // Unknown Shape Types (E2xx)
    // =========================================================================
    /// Unknown stencil.
    ///
    /// No element kind is known for the shape's stencil id.
    E200,

    /// Unknown task type.
    ///
    /// A task's subtype hint names no known task kind.
    E201,

    // =========================================================================
    // References (E3xx)
    // =========================================================================
    /// Unresolved reference.
    ///
    /// An outgoing id names no element of the document.
    E300,

    /// Invalid reference.
    ///
    /// An outgoing id resolves to an element that cannot be connected there.
    E301,

    // =========================================================================
    // Identifiers (E4xx)
    // =========================================================================
    /// Duplicate identifier.
    ///
    /// Two shapes share the same `resourceId`.
    E400,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E100 => "E100",
            Self::E101 => "E101",
            Self::E102 => "E102",
            Self::E103 => "E103",
            Self::E200 => "E200",
            Self::E201 => "E201",
            Self::E300 => "E300",
            Self::E301 => "E301",
            Self::E400 => "E400",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
