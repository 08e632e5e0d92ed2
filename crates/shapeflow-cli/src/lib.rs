//! CLI logic for the Shapeflow translator.
//!
//! Loads configuration, translates one diagram file and writes an outline
//! of the resulting process graph.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write};

use log::info;

use shapeflow::{ProcessBuilder, ShapeflowError};

/// Run the Shapeflow CLI application
///
/// Translates the input file and writes the graph outline to the output
/// file, or to stdout when no output path is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ShapeflowError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Translation errors
pub fn run(args: &Args) -> Result<(), ShapeflowError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let builder = ProcessBuilder::new(app_config);
    let graph = builder.parse_file(&args.input)?;
    let outline = builder.render_outline(&graph)?;

    match &args.output {
        Some(path) => {
            fs::write(path, outline)?;
            info!(output_file = path; "Outline written");
        }
        None => std::io::stdout().lock().write_all(outline.as_bytes())?,
    }

    Ok(())
}
