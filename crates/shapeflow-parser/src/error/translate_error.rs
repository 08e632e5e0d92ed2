//! The TranslateError type.

use std::io;

use serde_json::error::Category;
use thiserror::Error;

use shapeflow_core::stencil::StencilError;

use crate::error::ErrorCode;

/// A type alias for `Result<T, TranslateError>`.
pub(crate) type Result<T> = std::result::Result<T, TranslateError>;

/// Failure of a translation. No partial graph accompanies any variant.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document does not have the expected shape.
    #[error("malformed document: {message}")]
    Malformed {
        code: ErrorCode,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// The element factory could not map a shape.
    #[error("shape `{}` cannot be translated: {source}", display_id(.resource_id.as_deref()))]
    UnknownShape {
        resource_id: Option<String>,
        #[source]
        source: StencilError,
    },

    /// An outgoing id names no element of the document.
    #[error("`{owner}` references unknown element `{target}`")]
    UnresolvedReference { owner: String, target: String },

    /// An outgoing id resolves to an element of the wrong kind.
    #[error("`{owner}` cannot reference `{target}`: {reason}")]
    InvalidReference {
        owner: String,
        target: String,
        reason: &'static str,
    },

    /// Two elements were registered under the same source id.
    #[error("identifier `{0}` is used by more than one shape")]
    DuplicateIdentifier(String),
}

impl TranslateError {
    /// Create a malformed-input error that has no source position.
    pub(crate) fn malformed(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Malformed {
            code,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Get the error code, if this failure has one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Io(_) => None,
            Self::Malformed { code, .. } => Some(*code),
            Self::UnknownShape { source, .. } => Some(match source {
                StencilError::UnknownStencil(_) => ErrorCode::E200,
                StencilError::UnknownTaskType(_) => ErrorCode::E201,
            }),
            Self::UnresolvedReference { .. } => Some(ErrorCode::E300),
            Self::InvalidReference { .. } => Some(ErrorCode::E301),
            Self::DuplicateIdentifier(_) => Some(ErrorCode::E400),
        }
    }

    /// Get a suggestion for fixing the input, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self.code()? {
            ErrorCode::E100 | ErrorCode::E101 => {
                Some("the input must be a shape object as exported by the diagram editor")
            }
            ErrorCode::E102 => Some("every shape needs a `stencil` object with an `id`"),
            ErrorCode::E103 => Some("the outermost shape must use the `BPMNDiagram` stencil"),
            ErrorCode::E200 => Some("check the stencil set the diagram was drawn with"),
            ErrorCode::E201 => Some(
                "known task types are None, Script, User, Service, Manual and Business Rule",
            ),
            ErrorCode::E300 => Some("the referenced shape was deleted or never exported"),
            ErrorCode::E301 => Some(
                "flow nodes must point at sequence flows, and sequence flows at flow nodes",
            ),
            ErrorCode::E400 => Some("give every shape a unique `resourceId`"),
        }
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(err: serde_json::Error) -> Self {
        let code = match err.classify() {
            Category::Io => return Self::Io(err.into()),
            Category::Syntax | Category::Eof => ErrorCode::E100,
            Category::Data => ErrorCode::E101,
        };
        Self::Malformed {
            code,
            message: err.to_string(),
            line: Some(err.line()),
            column: Some(err.column()),
        }
    }
}

/// Display text for an element's source id in messages.
pub(crate) fn display_id(resource_id: Option<&str>) -> &str {
    resource_id.unwrap_or("<unnamed>")
}
