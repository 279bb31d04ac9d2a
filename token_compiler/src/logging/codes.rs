//! Consolidated error codes and classification system
//!
//! Single source of truth for all codes emitted by the token compiler, their
//! metadata, and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_READ_FAILURE: Code = Code::new("E001");
    pub const CONFIG_PARSE_FAILURE: Code = Code::new("E002");
    pub const INVALID_CONFIG_VALUE: Code = Code::new("E003");
}

/// Catalog loading error codes
pub mod catalog {
    use super::Code;

    pub const DOCUMENT_NOT_FOUND: Code = Code::new("E010");
    pub const DOCUMENT_TOO_LARGE: Code = Code::new("E011");
    pub const INVALID_DOCUMENT: Code = Code::new("E012");
    pub const UNDECLARED_CATEGORY: Code = Code::new("E013");
    pub const INVALID_TOKEN_VALUE: Code = Code::new("E014");
    pub const DERIVED_TOKEN_IN_BASIC_CATALOG: Code = Code::new("E015");
    pub const TOO_MANY_TOKENS: Code = Code::new("E016");
}

/// Reference resolution error codes
pub mod references {
    use super::Code;

    pub const UNRESOLVED_REFERENCE: Code = Code::new("E030");
    pub const MALFORMED_PLACEHOLDER: Code = Code::new("E031");
    pub const UNSUPPORTED_MODIFIER: Code = Code::new("E032");
    pub const UNSUPPORTED_REFERENCE_CATEGORY: Code = Code::new("E033");
    pub const MALFORMED_DERIVED_VALUE: Code = Code::new("E034");
    pub const TOO_MANY_PLACEHOLDERS: Code = Code::new("E035");
}

/// Rendering codes
pub mod rendering {
    use super::Code;

    pub const UNSUPPORTED_CATEGORY: Code = Code::new("W040");
    pub const VALUE_SHAPE_MISMATCH: Code = Code::new("E041");
    pub const SERIALIZATION_FAILURE: Code = Code::new("E042");
}

/// Export error codes
pub mod export {
    use super::Code;

    pub const UNKNOWN_FORMAT: Code = Code::new("E050");
    pub const NO_FORMATS_REQUESTED: Code = Code::new("E051");
    pub const DIRECTORY_CREATION_FAILURE: Code = Code::new("E052");
    pub const ARTIFACT_WRITE_FAILURE: Code = Code::new("E053");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const CATALOG_LOADED: Code = Code::new("I010");
    pub const REFERENCE_RESOLUTION_COMPLETE: Code = Code::new("I030");
    pub const RENDERING_COMPLETE: Code = Code::new("I040");
    pub const ARTIFACT_WRITTEN: Code = Code::new("I050");
    pub const EXPORT_COMPLETE: Code = Code::new("I051");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

const REGISTRY_ENTRIES: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal error",
        "File a bug report with the input documents attached",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        true,
        "Logging or configuration initialization failed",
        "Check environment variables and configuration file",
    ),
    // Configuration
    ErrorMetadata::new(
        "E001",
        "Configuration",
        Severity::High,
        false,
        true,
        "Configuration file could not be read",
        "Check the --config path and file permissions",
    ),
    ErrorMetadata::new(
        "E002",
        "Configuration",
        Severity::High,
        false,
        true,
        "Configuration file is not valid TOML",
        "Fix the TOML syntax reported in the error",
    ),
    ErrorMetadata::new(
        "E003",
        "Configuration",
        Severity::High,
        false,
        true,
        "Configuration value rejected by validation",
        "Use non-empty identifiers and plain file basenames",
    ),
    // Catalog
    ErrorMetadata::new(
        "E010",
        "Catalog",
        Severity::High,
        false,
        true,
        "Token document could not be read",
        "Check the --tokens / --derived paths",
    ),
    ErrorMetadata::new(
        "E011",
        "Catalog",
        Severity::High,
        false,
        true,
        "Token document exceeds the maximum supported size",
        "Split the token source into smaller documents",
    ),
    ErrorMetadata::new(
        "E012",
        "Catalog",
        Severity::High,
        false,
        true,
        "Token document is not a valid catalog",
        "Provide a JSON object with 'categories' and 'tokens' members",
    ),
    ErrorMetadata::new(
        "E013",
        "Catalog",
        Severity::High,
        false,
        true,
        "Token refers to a category missing from the catalog descriptor",
        "Declare the category under 'categories' with a tokenPrefix",
    ),
    ErrorMetadata::new(
        "E014",
        "Catalog",
        Severity::High,
        false,
        true,
        "Token value does not match the shape of its category",
        "Fix the token value fields for its category",
    ),
    ErrorMetadata::new(
        "E015",
        "Catalog",
        Severity::High,
        false,
        true,
        "Basic catalog contains a derived token",
        "Move derived tokens into the derived document",
    ),
    ErrorMetadata::new(
        "E016",
        "Catalog",
        Severity::High,
        false,
        true,
        "Catalog contains more tokens than the supported limit",
        "Split the token source into smaller documents",
    ),
    // References
    ErrorMetadata::new(
        "E030",
        "References",
        Severity::High,
        false,
        true,
        "Placeholder does not match any basic token",
        "Fix the placeholder or add the referenced basic token",
    ),
    ErrorMetadata::new(
        "E031",
        "References",
        Severity::High,
        false,
        true,
        "Placeholder is not of the form {category.name[, modifier]}",
        "Rewrite the placeholder as {category.name}",
    ),
    ErrorMetadata::new(
        "E032",
        "References",
        Severity::High,
        false,
        true,
        "Placeholder modifier is unknown or not applicable to its referent",
        "Use alpha-<number> on color references only",
    ),
    ErrorMetadata::new(
        "E033",
        "References",
        Severity::High,
        false,
        true,
        "Referenced token has no literal textual form",
        "Reference only colors or value/unit tokens",
    ),
    ErrorMetadata::new(
        "E034",
        "References",
        Severity::High,
        false,
        true,
        "Resolved derived value does not match its category shape",
        "Fix the derived token fields for its category",
    ),
    ErrorMetadata::new(
        "E035",
        "References",
        Severity::High,
        false,
        true,
        "Derived field contains more placeholders than supported",
        "Split the derived value into several tokens",
    ),
    // Rendering
    ErrorMetadata::new(
        "W040",
        "Rendering",
        Severity::Low,
        true,
        false,
        "Category not supported by this output format",
        "Category is skipped for this format only",
    ),
    ErrorMetadata::new(
        "E041",
        "Rendering",
        Severity::Critical,
        false,
        true,
        "Token value shape does not match its category renderer",
        "File a bug report: the loader should have rejected this token",
    ),
    ErrorMetadata::new(
        "E042",
        "Rendering",
        Severity::Critical,
        false,
        true,
        "Typed-source value could not be serialized",
        "File a bug report with the input documents attached",
    ),
    // Export
    ErrorMetadata::new(
        "E050",
        "Export",
        Severity::High,
        false,
        true,
        "Requested output format is not supported",
        "Use one of the supported --format identifiers",
    ),
    ErrorMetadata::new(
        "E051",
        "Export",
        Severity::High,
        false,
        true,
        "No output format requested",
        "Pass at least one --format identifier",
    ),
    ErrorMetadata::new(
        "E052",
        "Export",
        Severity::Medium,
        true,
        false,
        "Output directory could not be created",
        "Check the --outdir path and permissions",
    ),
    ErrorMetadata::new(
        "E053",
        "Export",
        Severity::Medium,
        true,
        false,
        "Artifact could not be written",
        "Check disk space and output directory permissions",
    ),
    // Success
    ErrorMetadata::new(
        "I001",
        "System",
        Severity::Low,
        true,
        false,
        "Logging system initialized",
        "Continue",
    ),
    ErrorMetadata::new(
        "I010",
        "Catalog",
        Severity::Low,
        true,
        false,
        "Token catalog loaded",
        "Continue to reference resolution",
    ),
    ErrorMetadata::new(
        "I030",
        "References",
        Severity::Low,
        true,
        false,
        "All derived tokens resolved",
        "Continue to rendering",
    ),
    ErrorMetadata::new(
        "I040",
        "Rendering",
        Severity::Low,
        true,
        false,
        "Format rendered",
        "Continue to artifact writing",
    ),
    ErrorMetadata::new(
        "I050",
        "Export",
        Severity::Low,
        true,
        false,
        "Artifact written",
        "Continue",
    ),
    ErrorMetadata::new(
        "I051",
        "Export",
        Severity::Low,
        true,
        false,
        "Export run completed",
        "Continue",
    ),
];

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTRY_ENTRIES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
