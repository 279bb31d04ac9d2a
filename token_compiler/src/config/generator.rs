//! Generator configuration loaded from an optional TOML file.
//!
//! ```toml
//! scss_prefix = "fi"
//! breakpoint_suffix = "Breakpoint"
//!
//! [typescript]
//! raw_export_name = "designTokenObjects"
//! string_export_name = "designTokens"
//!
//! [outputs]
//! scss = "tokens"
//! ts = "index"
//! ```

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Leading namespace of every stylesheet identifier
    pub scss_prefix: String,

    /// Literal suffix stripped from breakpoint token names
    pub breakpoint_suffix: String,

    pub typescript: TypeScriptNames,

    pub outputs: OutputNames,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scss_prefix: "fi".to_string(),
            breakpoint_suffix: "Breakpoint".to_string(),
            typescript: TypeScriptNames::default(),
            outputs: OutputNames::default(),
        }
    }
}

/// Identifiers used in the generated typed-source module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeScriptNames {
    pub raw_export_name: String,
    pub string_export_name: String,
    pub interface_name: String,
    pub raw_interface_name: String,
}

impl Default for TypeScriptNames {
    fn default() -> Self {
        Self {
            raw_export_name: "designTokenObjects".to_string(),
            string_export_name: "designTokens".to_string(),
            interface_name: "DesignTokens".to_string(),
            raw_interface_name: "RawDesignTokens".to_string(),
        }
    }
}

/// Artifact basenames per format (extension is fixed by the format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputNames {
    pub scss: String,
    pub ts: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            scss: "tokens".to_string(),
            ts: "index".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::read_failure(path, e))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::parse_failure(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional path, falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_identifier("scss_prefix", &self.scss_prefix)?;
        validate_identifier("breakpoint_suffix", &self.breakpoint_suffix)?;
        validate_identifier(
            "typescript.raw_export_name",
            &self.typescript.raw_export_name,
        )?;
        validate_identifier(
            "typescript.string_export_name",
            &self.typescript.string_export_name,
        )?;
        validate_identifier("typescript.interface_name", &self.typescript.interface_name)?;
        validate_identifier(
            "typescript.raw_interface_name",
            &self.typescript.raw_interface_name,
        )?;

        if self.typescript.raw_export_name == self.typescript.string_export_name {
            return Err(ConfigError::invalid_value(
                "typescript.string_export_name",
                "must differ from raw_export_name",
            ));
        }

        validate_basename("outputs.scss", &self.outputs.scss)?;
        validate_basename("outputs.ts", &self.outputs.ts)?;
        Ok(())
    }
}

fn validate_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::invalid_value(field, "must not be empty"));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::invalid_value(
            field,
            "may only contain ASCII letters, digits, '_' and '-'",
        ));
    }
    Ok(())
}

fn validate_basename(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::invalid_value(field, "must not be empty"));
    }
    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        return Err(ConfigError::invalid_value(
            field,
            "must be a plain file basename",
        ));
    }
    Ok(())
}
