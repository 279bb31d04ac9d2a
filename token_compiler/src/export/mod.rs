//! Export Orchestrator
//!
//! Renders every requested format into memory first, then hands each
//! complete artifact to an [`ArtifactWriter`]. A rendering error aborts
//! before anything is written. A write failure is logged and recorded, and
//! the remaining artifacts are still written.

pub mod error;
pub mod format;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use format::{parse_formats, OutputFormat};
pub use writer::{ArtifactWriter, FsArtifactWriter, MemoryArtifactWriter};

use crate::config::GeneratorConfig;
use crate::logging::codes;
use crate::renderers::{RenderContext, RenderResult, RenderWarning};
use crate::tokens::TokenCatalog;
use crate::{log_debug, log_error, log_success, log_warning};
use std::path::{Path, PathBuf};

/// One fully rendered output file
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub format: OutputFormat,
    pub file_name: String,
    pub contents: String,
    pub warnings: Vec<RenderWarning>,
}

/// Outcome of handing artifacts to the writer
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ExportError>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render each format into its own artifact, in request order
pub fn render_artifacts(
    catalog: &TokenCatalog,
    formats: &[OutputFormat],
    config: &GeneratorConfig,
) -> RenderResult<Vec<Artifact>> {
    let context = RenderContext::new(config);
    let mut artifacts = Vec::with_capacity(formats.len());

    for format in formats {
        let output = format.renderer().render(catalog, &context).map_err(|error| {
            log_error!(error.error_code(), "Rendering failed",
                "format" => format,
                "error" => &error
            );
            error
        })?;

        for warning in &output.warnings {
            log_warning!(code = codes::rendering::UNSUPPORTED_CATEGORY, &warning.to_string(),
                "format" => warning.format,
                "category" => &warning.category
            );
        }

        log_success!(codes::success::RENDERING_COMPLETE, "Format rendered",
            "format" => format,
            "bytes" => output.text.len(),
            "skipped_categories" => output.warnings.len()
        );

        artifacts.push(Artifact {
            format: *format,
            file_name: format.file_name(config),
            contents: output.text,
            warnings: output.warnings,
        });
    }

    Ok(artifacts)
}

/// Create `outdir` and write every artifact into it
pub fn write_artifacts(
    outdir: &Path,
    artifacts: &[Artifact],
    writer: &dyn ArtifactWriter,
) -> ExportSummary {
    let mut summary = ExportSummary::default();

    if let Err(e) = writer.create_dir(outdir) {
        let error = ExportError::directory_creation(outdir.to_path_buf(), e);
        log_error!(error.error_code(), "Cannot create output directory",
            "path" => outdir.display(),
            "error" => &error
        );
        summary.failed.push(error);
        return summary;
    }

    for artifact in artifacts {
        let path = outdir.join(&artifact.file_name);
        log_debug!("Writing artifact", "path" => path.display(), "bytes" => artifact.contents.len());

        match writer.write(&path, &artifact.contents) {
            Ok(()) => {
                log_success!(codes::success::ARTIFACT_WRITTEN, "Artifact written",
                    "format" => artifact.format,
                    "path" => path.display()
                );
                summary.written.push(path);
            }
            Err(e) => {
                let error = ExportError::artifact_write(path.clone(), e);
                log_error!(error.error_code(), "Cannot write artifact",
                    "format" => artifact.format,
                    "path" => path.display(),
                    "error" => &error
                );
                summary.failed.push(error);
            }
        }
    }

    if summary.is_complete() {
        log_success!(codes::success::EXPORT_COMPLETE, "All artifacts written",
            "outdir" => outdir.display(),
            "count" => summary.written.len()
        );
    }

    summary
}
