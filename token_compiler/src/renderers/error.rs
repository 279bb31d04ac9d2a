//! Error types for format rendering

use crate::logging::codes;
use thiserror::Error;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// A token reached a renderer with a value its category cannot render
    #[error("{format} renderer cannot render token '{token}' in category '{category}': found {found} value")]
    ValueShapeMismatch {
        format: &'static str,
        category: String,
        token: String,
        found: &'static str,
    },

    #[error("{format} renderer failed to serialize token '{token}': {message}")]
    Serialization {
        format: &'static str,
        token: String,
        message: String,
    },
}

impl RenderError {
    pub fn value_shape_mismatch(
        format: &'static str,
        category: &str,
        token: &str,
        found: &'static str,
    ) -> Self {
        Self::ValueShapeMismatch {
            format,
            category: category.to_string(),
            token: token.to_string(),
            found,
        }
    }

    pub fn serialization(format: &'static str, token: &str, source: serde_json::Error) -> Self {
        Self::Serialization {
            format,
            token: token.to_string(),
            message: source.to_string(),
        }
    }

    /// Get the appropriate error code for global logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::ValueShapeMismatch { .. } => codes::rendering::VALUE_SHAPE_MISMATCH,
            Self::Serialization { .. } => codes::rendering::SERIALIZATION_FAILURE,
        }
    }
}
