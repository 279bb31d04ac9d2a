use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::export::ExportError;
use crate::logging::codes;
use crate::reference_resolution::ResolutionError;
use crate::renderers::RenderError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog loading failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Reference resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl PipelineError {
    /// Code of the underlying stage error
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Resolution(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }

    /// Stage that produced the error
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Catalog(_) => "load",
            Self::Resolution(_) => "resolve",
            Self::Render(_) => "render",
            Self::Export(_) => "export",
        }
    }
}
