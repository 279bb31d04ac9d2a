//! # Design Tokens CLI
//!
//! Reads a basic token document and an optional derived one, resolves every
//! placeholder, and writes one artifact per requested format into `--outdir`.
//! Environment preferences (`DT_LOGGING_*`, `DT_RESOLUTION_LOG_DETAILS`) are
//! read once at startup.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use token_compiler::config::runtime::RuntimeConfig;
use token_compiler::logging::{self, codes};
use token_compiler::{log_error, log_info, log_warning, pipeline, FsArtifactWriter, GeneratorConfig};

/// Generate stylesheet and typed-source artifacts from design token documents
#[derive(Debug, Parser)]
#[command(name = "design-tokens", version, about)]
struct Cli {
    /// Output directory, created if absent
    #[arg(long)]
    outdir: PathBuf,

    /// Output formats (scss, ts); several values or one space-separated list
    #[arg(long, num_args = 1.., required = true)]
    format: Vec<String>,

    /// Basic token document
    #[arg(long, default_value = "tokens.json")]
    tokens: PathBuf,

    /// Derived token document whose placeholders reference basic tokens
    #[arg(long)]
    derived: Option<PathBuf>,

    /// Generator configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let runtime = RuntimeConfig::default();

    if let Err(e) = logging::config::init_runtime_preferences(runtime.logging.clone())
        .and_then(|()| logging::init_global_logging())
    {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }
    log_info!("Design token export starting", "version" => env!("CARGO_PKG_VERSION"));

    match run(&cli, &runtime) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            log_warning!("Some artifacts were not written");
            ExitCode::FAILURE
        }
        Err(e) => {
            log_error!(e.error_code(), &e.to_string(), "stage" => e.stage());
            ExitCode::FAILURE
        }
    }
}

/// Single error boundary of the process; `Ok(false)` means a write failed
fn run(cli: &Cli, runtime: &RuntimeConfig) -> Result<bool, pipeline::PipelineError> {
    let config = GeneratorConfig::load(cli.config.as_deref()).map_err(|e| {
        log_error!(e.error_code(), "Cannot load generator configuration",
            "path" => cli.config.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
        );
        e
    })?;

    let mut options = pipeline::RunOptions::new(&cli.tokens, &cli.outdir, cli.format.clone())
        .with_config(config)
        .with_resolution(runtime.resolution.clone());
    if let Some(derived) = &cli.derived {
        options = options.with_derived(derived);
    }

    let report = pipeline::run(&options, &FsArtifactWriter)?;

    for path in &report.written {
        println!("{}", path.display());
    }
    if !report.warnings.is_empty() {
        log_warning!(code = codes::rendering::UNSUPPORTED_CATEGORY,
            "Categories skipped during rendering",
            "count" => report.warnings.len()
        );
    }

    Ok(report.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_accepts_several_values() {
        let cli = Cli::try_parse_from(["design-tokens", "--outdir", "dist", "--format", "scss", "ts"])
            .unwrap();
        assert_eq!(cli.format, vec!["scss", "ts"]);
        assert_eq!(cli.tokens, PathBuf::from("tokens.json"));
        assert!(cli.derived.is_none());
    }

    #[test]
    fn test_run_writes_requested_artifacts() {
        let temp = tempfile::tempdir().unwrap();
        let tokens = temp.path().join("tokens.json");
        std::fs::write(
            &tokens,
            r#"{"categories": {"spacing": {"tokenPrefix": "s"}},
                "tokens": {"xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}}}}"#,
        )
        .unwrap();
        let outdir = temp.path().join("dist");

        let cli = Cli::try_parse_from([
            "design-tokens",
            "--outdir",
            outdir.to_str().unwrap(),
            "--format",
            "scss",
            "--tokens",
            tokens.to_str().unwrap(),
        ])
        .unwrap();

        assert!(run(&cli, &RuntimeConfig::default()).unwrap());
        assert_eq!(
            std::fs::read_to_string(outdir.join("tokens.scss")).unwrap(),
            "$fi-s-xxl: 40px;\n"
        );
    }

    #[test]
    fn test_outdir_and_format_are_required() {
        assert!(Cli::try_parse_from(["design-tokens", "--format", "scss"]).is_err());
        assert!(Cli::try_parse_from(["design-tokens", "--outdir", "dist"]).is_err());
    }
}
