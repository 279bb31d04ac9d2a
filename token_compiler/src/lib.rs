//! Design token compiler
//!
//! Loads basic and derived token documents, resolves `{category.name}`
//! references, and renders the resolved catalog as stylesheet variables and
//! a typed-source module.

pub mod catalog;
pub mod config;
pub mod export;
#[macro_use]
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod reference_resolution;
pub mod renderers;
pub mod tokens;

// Re-export key types for library consumers
pub use config::GeneratorConfig;
pub use export::{ArtifactWriter, FsArtifactWriter, MemoryArtifactWriter, OutputFormat};
pub use pipeline::{run, PipelineError, RunOptions, RunReport};
pub use tokens::TokenCatalog;
