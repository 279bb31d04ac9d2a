//! Error types for format selection and artifact export

use crate::logging::codes;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown output format '{format}' (supported: {supported})")]
    UnknownFormat { format: String, supported: String },

    #[error("No output formats requested")]
    NoFormatsRequested,

    #[error("Cannot create output directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write artifact {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn unknown_format(format: &str, supported: &[&str]) -> Self {
        Self::UnknownFormat {
            format: format.to_string(),
            supported: supported.join(", "),
        }
    }

    pub fn directory_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirectoryCreation { path, source }
    }

    pub fn artifact_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::ArtifactWrite { path, source }
    }

    /// Get the appropriate error code for global logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::UnknownFormat { .. } => codes::export::UNKNOWN_FORMAT,
            Self::NoFormatsRequested => codes::export::NO_FORMATS_REQUESTED,
            Self::DirectoryCreation { .. } => codes::export::DIRECTORY_CREATION_FAILURE,
            Self::ArtifactWrite { .. } => codes::export::ARTIFACT_WRITE_FAILURE,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
