//! Error types for Shapeflow operations.
//!
//! This module provides the main error type [`ShapeflowError`] which wraps
//! the failures that can occur while loading and translating a diagram.

use std::io;

use thiserror::Error;

use shapeflow_parser::TranslateError;

/// The main error type for Shapeflow operations.
#[derive(Debug, Error)]
pub enum ShapeflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Translate(TranslateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<TranslateError> for ShapeflowError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Io(err) => Self::Io(err),
            err => Self::Translate(err),
        }
    }
}
