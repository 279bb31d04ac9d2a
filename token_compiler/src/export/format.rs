//! Output format selection

use super::error::{ExportError, ExportResult};
use crate::config::GeneratorConfig;
use crate::renderers::{FormatRenderer, ScssRenderer, TypeScriptRenderer};
use crate::{log_error, log_warning};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Scss,
    Ts,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Scss, OutputFormat::Ts];

    /// Identifier accepted on the command line
    pub fn identifier(&self) -> &'static str {
        match self {
            OutputFormat::Scss => "scss",
            OutputFormat::Ts => "ts",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.identifier()
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.identifier() == identifier)
    }

    /// `<basename>.<extension>`, basename taken from the configuration
    pub fn file_name(&self, config: &GeneratorConfig) -> String {
        let basename = match self {
            OutputFormat::Scss => &config.outputs.scss,
            OutputFormat::Ts => &config.outputs.ts,
        };
        format!("{}.{}", basename, self.extension())
    }

    pub fn renderer(&self) -> Box<dyn FormatRenderer> {
        match self {
            OutputFormat::Scss => Box::new(ScssRenderer),
            OutputFormat::Ts => Box::new(TypeScriptRenderer),
        }
    }

    fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(OutputFormat::identifier).collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Parse requested format identifiers
///
/// Each argument may itself hold several space-separated identifiers.
/// Duplicates collapse to their first occurrence. Any unknown identifier
/// fails the whole request.
pub fn parse_formats<S: AsRef<str>>(requested: &[S]) -> ExportResult<Vec<OutputFormat>> {
    let mut formats = Vec::new();

    for identifier in requested.iter().flat_map(|arg| arg.as_ref().split_whitespace()) {
        let format = OutputFormat::from_identifier(identifier).ok_or_else(|| {
            let error = ExportError::unknown_format(identifier, &OutputFormat::supported());
            log_error!(error.error_code(), "Unknown output format requested",
                "format" => identifier,
                "supported" => OutputFormat::supported().join(", ")
            );
            error
        })?;

        if formats.contains(&format) {
            log_warning!("Duplicate output format ignored", "format" => format);
            continue;
        }
        formats.push(format);
    }

    if formats.is_empty() {
        let error = ExportError::NoFormatsRequested;
        log_error!(error.error_code(), "No output formats requested");
        return Err(error);
    }

    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_space_separated_and_repeated_arguments() {
        assert_eq!(
            parse_formats(&["scss ts"]).unwrap(),
            vec![OutputFormat::Scss, OutputFormat::Ts]
        );
        assert_eq!(
            parse_formats(&["ts", "scss"]).unwrap(),
            vec![OutputFormat::Ts, OutputFormat::Scss]
        );
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        assert_eq!(
            parse_formats(&["ts scss ts", "scss"]).unwrap(),
            vec![OutputFormat::Ts, OutputFormat::Scss]
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = parse_formats(&["scss xml"]);
        assert_matches!(result, Err(ExportError::UnknownFormat { ref format, .. }) if format == "xml");
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let empty: [&str; 0] = [];
        assert_matches!(parse_formats(&empty), Err(ExportError::NoFormatsRequested));
        assert_matches!(parse_formats(&["   "]), Err(ExportError::NoFormatsRequested));
    }

    #[test]
    fn test_file_names_follow_configuration() {
        let mut config = GeneratorConfig::default();
        assert_eq!(OutputFormat::Scss.file_name(&config), "tokens.scss");
        assert_eq!(OutputFormat::Ts.file_name(&config), "index.ts");

        config.outputs.ts = "design-tokens".to_string();
        assert_eq!(OutputFormat::Ts.file_name(&config), "design-tokens.ts");
    }
}
