//! Error type for the Sapling CLI.

use thiserror::Error;

use sapling::LayoutError;

use crate::{config::ConfigError, outline::OutlineError};

/// Everything that can stop the CLI from producing a layout.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Outline errors keep the source text so they can be shown in context
    #[error("Outline error: {error}")]
    Outline { error: OutlineError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl CliError {
    pub(crate) fn outline(error: OutlineError, src: impl Into<String>) -> Self {
        Self::Outline {
            error,
            src: src.into(),
        }
    }
}
