//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use ui_marker_catalog::CatalogError;

use crate::types::FieldKind;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A change event named a value that is not one of the field's options
    #[error("{field} has no option '{value}'")]
    UnknownOption { field: FieldKind, value: String },

    /// The form submitter refused or failed to submit
    #[error("Submit failed: {0}")]
    SubmitFailed(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Catalog error (converting from library)
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, unknown entries) - used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnknownOption { .. } => true,
            Self::Catalog(e) => e.is_expected(),
            Self::SubmitFailed(_) | Self::ConfigError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
