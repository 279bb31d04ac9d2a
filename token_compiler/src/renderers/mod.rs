//! Format Renderers
//!
//! Each renderer is a pure function from a resolved [`TokenCatalog`] to the
//! full text of one artifact. Categories a format does not support are
//! skipped and reported as warnings; they never abort rendering.

pub mod error;
pub mod registry;
pub mod scss;
pub mod typescript;

pub use error::{RenderError, RenderResult};
pub use registry::CategoryRegistry;
pub use scss::ScssRenderer;
pub use typescript::TypeScriptRenderer;

use crate::config::GeneratorConfig;
use crate::naming::NameNormalizer;
use crate::tokens::TokenCatalog;
use std::fmt;

/// Non-fatal rendering notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    pub format: &'static str,
    pub category: String,
    pub message: String,
}

impl RenderWarning {
    pub fn unsupported_category(format: &'static str, category: &str) -> Self {
        Self {
            format,
            category: category.to_string(),
            message: format!("Unrecognized category type '{}'", category),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} formatting: {}", self.format, self.message)
    }
}

/// Rendered artifact text plus the categories that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutput {
    pub text: String,
    pub warnings: Vec<RenderWarning>,
}

impl RenderOutput {
    pub fn new(text: String, warnings: Vec<RenderWarning>) -> Self {
        Self { text, warnings }
    }
}

/// Naming inputs shared by every renderer in a run
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub config: &'a GeneratorConfig,
    pub names: NameNormalizer,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            names: NameNormalizer::from_config(config),
        }
    }
}

/// One output format
pub trait FormatRenderer {
    /// Format identifier, as accepted on the command line
    fn format(&self) -> &'static str;

    fn render(&self, catalog: &TokenCatalog, context: &RenderContext) -> RenderResult<RenderOutput>;
}
