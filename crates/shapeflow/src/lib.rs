//! Shapeflow - translate diagram-editor JSON into typed process graphs.
//!
//! Reads the JSON export of a flowchart-style diagram editor (shapes, nested
//! pools and lanes, connectors) and produces a [`ProcessGraph`] with every
//! cross-reference resolved.

pub mod config;

mod error;
mod outline;

pub use shapeflow_core::{identifier, semantic, stencil};

pub use error::ShapeflowError;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::{debug, info, trace};

use config::AppConfig;
use semantic::ProcessGraph;

/// Builder for translating diagram documents.
///
/// # Examples
///
/// ```rust
/// use shapeflow::{ProcessBuilder, config::AppConfig};
///
/// let json = r#"{"stencil": {"id": "BPMNDiagram"},
///                "childShapes": [{"resourceId": "t1", "stencil": {"id": "Task"}}]}"#;
///
/// let builder = ProcessBuilder::new(AppConfig::default());
/// let graph = builder.parse(json).expect("Failed to translate");
/// assert!(graph.lookup("t1").is_some());
///
/// // Or use the default config
/// let builder = ProcessBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct ProcessBuilder {
    config: AppConfig,
}

impl ProcessBuilder {
    /// Create a new process builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Translate a JSON document held in a string.
    ///
    /// # Errors
    ///
    /// Returns `ShapeflowError::Translate` for malformed documents, unknown
    /// shapes, and unresolved, invalid or duplicate identifiers.
    pub fn parse(&self, json: &str) -> Result<ProcessGraph, ShapeflowError> {
        info!(bytes = json.len(); "Parsing diagram");
        let graph = shapeflow_parser::translate_str(json, self.config.translate())?;
        log_parsed(&graph);
        Ok(graph)
    }

    /// Translate a JSON document read from `reader`.
    ///
    /// # Errors
    ///
    /// As [`ProcessBuilder::parse`], plus `ShapeflowError::Io` if reading fails.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ProcessGraph, ShapeflowError> {
        info!("Parsing diagram from reader");
        let graph = shapeflow_parser::translate_reader(reader, self.config.translate())?;
        log_parsed(&graph);
        Ok(graph)
    }

    /// Translate the JSON document stored at `path`.
    ///
    /// # Errors
    ///
    /// As [`ProcessBuilder::parse_reader`], plus `ShapeflowError::Io` if the
    /// file cannot be opened.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ProcessGraph, ShapeflowError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Parsing diagram file");
        let file = File::open(path)?;
        let graph = shapeflow_parser::translate_reader(BufReader::new(file), self.config.translate())?;
        log_parsed(&graph);
        Ok(graph)
    }

    /// Render a translated graph as an indented plain-text outline.
    ///
    /// # Errors
    ///
    /// Returns `ShapeflowError::Io` if formatting fails.
    pub fn render_outline(&self, graph: &ProcessGraph) -> Result<String, ShapeflowError> {
        let outline = outline::render(graph).map_err(std::io::Error::other)?;
        debug!(lines = outline.lines().count(); "Outline rendered");
        Ok(outline)
    }
}

fn log_parsed(graph: &ProcessGraph) {
    debug!(
        elements = graph.len(),
        root_elements = graph.definitions().root_elements().len();
        "Diagram parsed successfully"
    );
    trace!(graph:?; "Parsed graph");
}
