//! Error types for reference resolution
//!
//! Every variant names the offending placeholder text so the failing
//! derived token can be found in its document.

use crate::logging::codes;
use thiserror::Error;

/// Result type for reference resolution operations
pub type ResolutionResult<T> = Result<T, ResolutionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// No basic token matches the placeholder's category and name
    #[error("Unresolved reference '{reference}' in {placeholder} (token '{token}')")]
    UnresolvedReference {
        placeholder: String,
        reference: String,
        token: String,
    },

    #[error("Malformed placeholder {placeholder} in token '{token}': {reason}")]
    MalformedPlaceholder {
        placeholder: String,
        token: String,
        reason: String,
    },

    #[error("Unsupported modifier '{modifier}' in {placeholder} (token '{token}'): {reason}")]
    UnsupportedModifier {
        placeholder: String,
        modifier: String,
        token: String,
        reason: String,
    },

    /// The referent has no single literal textual form
    #[error("Placeholder {placeholder} in token '{token}' refers to a {shape} token, which cannot be substituted")]
    UnsupportedReferenceCategory {
        placeholder: String,
        token: String,
        shape: String,
    },

    #[error("Resolved value of token '{token}' does not fit category '{category}': {message}")]
    MalformedDerivedValue {
        token: String,
        category: String,
        message: String,
    },

    #[error("Placeholder pattern '{pattern}' failed to compile: {message}")]
    InvalidPattern {
        pattern: &'static str,
        message: String,
    },

    #[error("Field of token '{token}' holds {count} placeholders (max: {max})")]
    TooManyPlaceholders {
        token: String,
        count: usize,
        max: usize,
    },
}

impl ResolutionError {
    pub fn unresolved_reference(placeholder: &str, reference: &str, token: &str) -> Self {
        Self::UnresolvedReference {
            placeholder: placeholder.to_string(),
            reference: reference.to_string(),
            token: token.to_string(),
        }
    }

    pub fn malformed_placeholder(placeholder: &str, token: &str, reason: &str) -> Self {
        Self::MalformedPlaceholder {
            placeholder: placeholder.to_string(),
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unsupported_modifier(placeholder: &str, modifier: &str, token: &str, reason: &str) -> Self {
        Self::UnsupportedModifier {
            placeholder: placeholder.to_string(),
            modifier: modifier.to_string(),
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unsupported_reference_category(placeholder: &str, token: &str, shape: &str) -> Self {
        Self::UnsupportedReferenceCategory {
            placeholder: placeholder.to_string(),
            token: token.to_string(),
            shape: shape.to_string(),
        }
    }

    pub fn malformed_derived_value(token: &str, category: &str, message: &str) -> Self {
        Self::MalformedDerivedValue {
            token: token.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        }
    }

    /// Placeholder text the error is about, when there is one
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::UnresolvedReference { placeholder, .. }
            | Self::MalformedPlaceholder { placeholder, .. }
            | Self::UnsupportedModifier { placeholder, .. }
            | Self::UnsupportedReferenceCategory { placeholder, .. } => Some(placeholder),
            Self::MalformedDerivedValue { .. }
            | Self::InvalidPattern { .. }
            | Self::TooManyPlaceholders { .. } => None,
        }
    }

    /// Get the appropriate error code for global logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::UnresolvedReference { .. } => codes::references::UNRESOLVED_REFERENCE,
            Self::MalformedPlaceholder { .. } => codes::references::MALFORMED_PLACEHOLDER,
            Self::UnsupportedModifier { .. } => codes::references::UNSUPPORTED_MODIFIER,
            Self::UnsupportedReferenceCategory { .. } => {
                codes::references::UNSUPPORTED_REFERENCE_CATEGORY
            }
            Self::MalformedDerivedValue { .. } => codes::references::MALFORMED_DERIVED_VALUE,
            Self::InvalidPattern { .. } => codes::system::INTERNAL_ERROR,
            Self::TooManyPlaceholders { .. } => codes::references::TOO_MANY_PLACEHOLDERS,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
