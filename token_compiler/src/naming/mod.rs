//! Name Normalizer
//!
//! Lexical transforms applied to token names when building output
//! identifiers. Lookup keys used during resolution are never touched.

use crate::config::GeneratorConfig;
use crate::tokens::CategoryKind;

/// camelCase to kebab-case.
///
/// A hyphen goes before an uppercase letter preceded by a lowercase letter
/// or digit, or preceded by an uppercase letter and followed by a lowercase
/// one (`HTMLElement` becomes `html-element`). The result is lowercased.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut output = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let previous = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && next.is_some_and(char::is_lowercase));
            if boundary {
                output.push('-');
            }
        }
        output.extend(c.to_lowercase());
    }

    output
}

/// Strip a literal trailing `suffix` from breakpoint names.
///
/// Other categories pass through, as does a name that would become empty.
pub fn strip_category_suffix<'a>(kind: &CategoryKind, name: &'a str, suffix: &str) -> &'a str {
    match kind {
        CategoryKind::Breakpoints if !suffix.is_empty() => match name.strip_suffix(suffix) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => name,
        },
        _ => name,
    }
}

/// Output naming rules for one run
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    breakpoint_suffix: String,
}

impl NameNormalizer {
    pub fn new(breakpoint_suffix: &str) -> Self {
        Self {
            breakpoint_suffix: breakpoint_suffix.to_string(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.breakpoint_suffix)
    }

    /// Token name as it appears in typed-source keys and field names
    pub fn output_name<'a>(&self, kind: &CategoryKind, name: &'a str) -> &'a str {
        strip_category_suffix(kind, name, &self.breakpoint_suffix)
    }

    /// Token name as it appears in stylesheet identifiers
    pub fn kebab_name(&self, kind: &CategoryKind, name: &str) -> String {
        kebab_case(self.output_name(kind, name))
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_examples() {
        assert_eq!(kebab_case("highlightBase"), "highlight-base");
        assert_eq!(kebab_case("xxl"), "xxl");
        assert_eq!(kebab_case("heading1Large"), "heading1-large");
        assert_eq!(kebab_case("HTMLElement"), "html-element");
        assert_eq!(kebab_case("boxShadowFocusRGB"), "box-shadow-focus-rgb");
        assert_eq!(kebab_case("Depth"), "depth");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn test_kebab_case_is_idempotent() {
        for name in [
            "highlightBase",
            "whiteBase",
            "HTMLElement",
            "insetXxs",
            "a1B2c3",
            "already-kebab",
            "ALLCAPS",
        ] {
            let once = kebab_case(name);
            assert_eq!(kebab_case(&once), once, "{}", name);
        }
    }

    #[test]
    fn test_breakpoint_suffix_stripping() {
        let normalizer = NameNormalizer::default();

        assert_eq!(
            normalizer.output_name(&CategoryKind::Breakpoints, "mobileBreakpoint"),
            "mobile"
        );
        assert_eq!(
            normalizer.kebab_name(&CategoryKind::Breakpoints, "smallTabletBreakpoint"),
            "small-tablet"
        );
        assert_eq!(
            normalizer.output_name(&CategoryKind::Breakpoints, "Breakpoint"),
            "Breakpoint"
        );
        assert_eq!(
            normalizer.output_name(&CategoryKind::Spacing, "xlBreakpoint"),
            "xlBreakpoint"
        );
    }
}
