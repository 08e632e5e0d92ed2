//! # Shapeflow Parser
//!
//! Translator from the diagram editor's JSON export to a Shapeflow
//! [`ProcessGraph`]. This crate provides the whole pipeline from JSON text
//! to a graph with every cross-reference resolved.
//!
//! ## Usage
//!
//! ```
//! # use shapeflow_parser::{translate_str, TranslateConfig, TranslateError};
//!
//! fn main() -> Result<(), TranslateError> {
//!     let json = r#"{
//!         "resourceId": "canvas",
//!         "properties": {"name": "Orders"},
//!         "stencil": {"id": "BPMNDiagram"},
//!         "childShapes": [
//!             {"resourceId": "n1", "stencil": {"id": "Task"}, "outgoing": [{"resourceId": "f1"}]},
//!             {"resourceId": "f1", "stencil": {"id": "SequenceFlow"}, "outgoing": [{"resourceId": "n2"}]},
//!             {"resourceId": "n2", "stencil": {"id": "EndNoneEvent"}}
//!         ]
//!     }"#;
//!
//!     let graph = translate_str(json, &TranslateConfig::default())?;
//!     assert!(graph.lookup("f1").is_some());
//!     Ok(())
//! }
//! ```

mod builder;
mod compose;
pub mod error;
mod pending;
mod properties;
mod raw;
mod reconnect;
mod registry;

use std::io::Read;

pub use builder::{DuplicateIdPolicy, TranslateConfig};
pub use error::TranslateError;

use shapeflow_core::semantic::ProcessGraph;

use builder::Translator;
use raw::RawNode;

/// Translate a JSON document held in a string.
///
/// The pipeline runs in three steps:
///
/// 1. **Tokenize** - Read the shape tree into transient raw nodes
/// 2. **Build** - Construct elements bottom-up, composing containers
/// 3. **Reconnect** - Resolve outgoing ids into element references
///
/// # Errors
///
/// Returns a [`TranslateError`] on the first failure. Translation is
/// all-or-nothing: no partial graph is ever returned.
pub fn translate_str(json: &str, config: &TranslateConfig) -> Result<ProcessGraph, TranslateError> {
    let raw: RawNode = serde_json::from_str(json)?;
    Translator::new(config).translate(raw)
}

/// Translate a JSON document held in a byte slice.
///
/// # Errors
///
/// See [`translate_str`].
pub fn translate_slice(
    json: &[u8],
    config: &TranslateConfig,
) -> Result<ProcessGraph, TranslateError> {
    let raw: RawNode = serde_json::from_slice(json)?;
    Translator::new(config).translate(raw)
}

/// Translate a JSON document read from `reader`.
///
/// # Errors
///
/// See [`translate_str`]. Read failures are reported as
/// [`TranslateError::Io`].
pub fn translate_reader<R: Read>(
    reader: R,
    config: &TranslateConfig,
) -> Result<ProcessGraph, TranslateError> {
    let raw: RawNode = serde_json::from_reader(reader)?;
    Translator::new(config).translate(raw)
}
