//! Configuration types for Shapeflow translation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file. Every field has a default.
//!
//! # Example
//!
//! ```
//! # use shapeflow::config::AppConfig;
//! # use shapeflow::config::DuplicateIdPolicy;
//! let config = AppConfig::default();
//! assert_eq!(config.translate().duplicate_ids(), DuplicateIdPolicy::Reject);
//! assert_eq!(config.translate().task_type_key(), "tasktype");
//! ```

use serde::Deserialize;

pub use shapeflow_parser::{DuplicateIdPolicy, TranslateConfig};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Translation settings section.
    #[serde(default)]
    translate: TranslateConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified translation settings.
    pub fn new(translate: TranslateConfig) -> Self {
        Self { translate }
    }

    /// Returns the translation settings.
    pub fn translate(&self) -> &TranslateConfig {
        &self.translate
    }
}
