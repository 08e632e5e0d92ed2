//! Error types for the translator.
//!
//! Translation is all-or-nothing: the first failure aborts it and is
//! returned as a [`TranslateError`]. Every variant except I/O failures maps
//! to a stable [`ErrorCode`] for documentation and searchability.
//!
//! # Example
//!
//! ```
//! # use shapeflow_parser::{TranslateConfig, translate_str};
//! # use shapeflow_parser::error::{ErrorCode, TranslateError};
//!
//! let json = r#"{"stencil": {"id": "BPMNDiagram"},
//!                "childShapes": [{"resourceId": "t1", "stencil": {"id": "Hexagon"}}]}"#;
//!
//! let err = translate_str(json, &TranslateConfig::default()).unwrap_err();
//! assert!(matches!(err, TranslateError::UnknownShape { .. }));
//! assert_eq!(err.code(), Some(ErrorCode::E200));
//! ```

mod error_code;
mod translate_error;

pub use error_code::ErrorCode;
pub use translate_error::TranslateError;

pub(crate) use translate_error::{Result, display_id};
