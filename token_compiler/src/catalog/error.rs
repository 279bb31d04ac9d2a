//! Error types for catalog loading

use crate::logging::codes;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Token document not found or unreadable: {path} ({message})")]
    DocumentNotFound { path: String, message: String },

    #[error("Token document too large: {path} is {size} bytes (max: {max_size})")]
    DocumentTooLarge {
        path: String,
        size: u64,
        max_size: u64,
    },

    #[error("Invalid token document '{source_name}': {message}")]
    InvalidDocument {
        source_name: String,
        message: String,
    },

    #[error("Token '{token}' refers to undeclared category '{category}'")]
    UndeclaredCategory { token: String, category: String },

    #[error("Token '{token}' in category '{category}' has an invalid value: {message}")]
    InvalidTokenValue {
        token: String,
        category: String,
        message: String,
    },

    #[error("Basic catalog '{source_name}' contains derived token '{token}' ({token_type})")]
    DerivedTokenInBasicCatalog {
        source_name: String,
        token: String,
        token_type: String,
    },

    #[error("Basic catalog '{source_name}' token '{token}' contains placeholder '{placeholder}'")]
    PlaceholderInBasicCatalog {
        source_name: String,
        token: String,
        placeholder: String,
    },

    #[error("Catalog '{source_name}' declares {count} {what} (max: {max})")]
    TooManyEntries {
        source_name: String,
        what: &'static str,
        count: usize,
        max: usize,
    },
}

impl CatalogError {
    pub fn document_not_found(path: &str, message: &str) -> Self {
        Self::DocumentNotFound {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    pub fn invalid_document(source_name: &str, message: &str) -> Self {
        Self::InvalidDocument {
            source_name: source_name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn undeclared_category(token: &str, category: &str) -> Self {
        Self::UndeclaredCategory {
            token: token.to_string(),
            category: category.to_string(),
        }
    }

    pub fn invalid_token_value(token: &str, category: &str, message: &str) -> Self {
        Self::InvalidTokenValue {
            token: token.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        }
    }

    pub fn derived_token_in_basic_catalog(source_name: &str, token: &str, token_type: &str) -> Self {
        Self::DerivedTokenInBasicCatalog {
            source_name: source_name.to_string(),
            token: token.to_string(),
            token_type: token_type.to_string(),
        }
    }

    pub fn placeholder_in_basic_catalog(source_name: &str, token: &str, placeholder: &str) -> Self {
        Self::PlaceholderInBasicCatalog {
            source_name: source_name.to_string(),
            token: token.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    /// Get the appropriate error code for global logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::DocumentNotFound { .. } => codes::catalog::DOCUMENT_NOT_FOUND,
            Self::DocumentTooLarge { .. } => codes::catalog::DOCUMENT_TOO_LARGE,
            Self::InvalidDocument { .. } => codes::catalog::INVALID_DOCUMENT,
            Self::UndeclaredCategory { .. } => codes::catalog::UNDECLARED_CATEGORY,
            Self::InvalidTokenValue { .. } => codes::catalog::INVALID_TOKEN_VALUE,
            Self::DerivedTokenInBasicCatalog { .. } => {
                codes::catalog::DERIVED_TOKEN_IN_BASIC_CATALOG
            }
            Self::PlaceholderInBasicCatalog { .. } => {
                codes::catalog::DERIVED_TOKEN_IN_BASIC_CATALOG
            }
            Self::TooManyEntries { .. } => codes::catalog::TOO_MANY_TOKENS,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
