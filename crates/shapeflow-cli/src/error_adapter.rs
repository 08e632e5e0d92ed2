//! Error adapter for converting ShapeflowError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use shapeflow::ShapeflowError;

/// Adapter rendering a [`ShapeflowError`] as a miette diagnostic.
///
/// Translation errors carry their stable error code and help text; other
/// failures get a category code.
pub struct ErrorAdapter<'a>(pub &'a ShapeflowError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ShapeflowError::Io(_) => Some(Box::new("shapeflow::io")),
            ShapeflowError::Config(_) => Some(Box::new("shapeflow::config")),
            ShapeflowError::Translate(err) => err
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ShapeflowError::Translate(err) => err
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`ShapeflowError`] into a list of reportable errors.
///
/// Translation stops at the first failure, so there is always exactly one.
pub fn to_reportables(err: &ShapeflowError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
