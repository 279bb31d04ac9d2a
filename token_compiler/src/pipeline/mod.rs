//! Complete export run: formats -> load -> resolve -> render -> write
//!
//! Everything up to and including rendering happens in memory. No artifact
//! is written unless every stage before the write succeeded.

mod error;
mod result;

pub use error::PipelineError;
pub use result::RunReport;

use crate::catalog::{self, DocumentRole};
use crate::config::runtime::ResolutionPreferences;
use crate::config::GeneratorConfig;
use crate::export::{self, ArtifactWriter};
use crate::logging;
use crate::reference_resolution;
use crate::tokens::TokenCatalog;
use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;

/// Inputs of one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Basic token document
    pub tokens: PathBuf,
    /// Optional derived token document
    pub derived: Option<PathBuf>,
    pub outdir: PathBuf,
    /// Requested format identifiers, possibly space-separated
    pub formats: Vec<String>,
    pub config: GeneratorConfig,
    pub resolution: ResolutionPreferences,
}

impl RunOptions {
    pub fn new(tokens: impl Into<PathBuf>, outdir: impl Into<PathBuf>, formats: Vec<String>) -> Self {
        Self {
            tokens: tokens.into(),
            derived: None,
            outdir: outdir.into(),
            formats,
            config: GeneratorConfig::default(),
            resolution: ResolutionPreferences::default(),
        }
    }

    pub fn with_derived(mut self, derived: impl Into<PathBuf>) -> Self {
        self.derived = Some(derived.into());
        self
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_resolution(mut self, resolution: ResolutionPreferences) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Run the whole export and write through `writer`
pub fn run(options: &RunOptions, writer: &dyn ArtifactWriter) -> Result<RunReport, PipelineError> {
    let start_time = Instant::now();

    crate::log_info!("Starting design token export",
        "tokens" => options.tokens.display(),
        "derived" => options.derived.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
        "outdir" => options.outdir.display(),
        "formats" => options.formats.join(" ")
    );

    let formats =
        logging::with_stage_context("formats", None, || export::parse_formats(&options.formats))?;

    let basic = load(&options.tokens, DocumentRole::Basic)?;
    let derived = match &options.derived {
        Some(path) => load(path, DocumentRole::Derived)?,
        None => TokenCatalog::default(),
    };

    let resolution = logging::with_stage_context("resolve", None, || {
        reference_resolution::resolve_references(&basic, &derived, &options.resolution)
    })?;

    let artifacts = logging::with_stage_context("render", None, || {
        export::render_artifacts(&resolution.catalog, &formats, &options.config)
    })?;

    let summary = logging::with_stage_context(
        "write",
        Some(options.outdir.display().to_string()),
        || export::write_artifacts(&options.outdir, &artifacts, writer),
    );

    let report = RunReport {
        written: summary.written,
        failed_writes: summary.failed,
        warnings: artifacts.into_iter().flat_map(|a| a.warnings).collect(),
        token_count: resolution.catalog.token_count(),
        derived_token_count: derived.token_count(),
        placeholders_substituted: resolution.stats.placeholders_substituted,
        duration: start_time.elapsed(),
        finished_at: Utc::now(),
    };
    report.log_summary();

    Ok(report)
}

fn load(path: &std::path::Path, role: DocumentRole) -> Result<TokenCatalog, PipelineError> {
    let source = path.display().to_string();
    let catalog = logging::with_stage_context("load", Some(source), || catalog::load_file(path, role))?;
    Ok(catalog)
}
