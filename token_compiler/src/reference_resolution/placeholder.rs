//! Placeholder scanning and parsing.
//!
//! A placeholder is `{category.name}` or `{category.name, modifier}`. Fields
//! are scanned left to right for non-overlapping `\{[^}]+\}` matches and the
//! output is rebuilt from the untouched gaps plus each substitution.

use super::error::{ResolutionError, ResolutionResult};
use crate::config::constants::compile_time::references::{
    MAX_PLACEHOLDERS_PER_FIELD, MAX_PLACEHOLDER_LENGTH,
};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Non-overlapping placeholder match, nearest closing brace wins
pub const PLACEHOLDER_PATTERN: &str = r"\{[^}]+\}";

static COMPILED_PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn placeholder_pattern() -> ResolutionResult<&'static Regex> {
    COMPILED_PATTERN
        .get_or_init(|| Regex::new(PLACEHOLDER_PATTERN))
        .as_ref()
        .map_err(|e| ResolutionError::InvalidPattern {
            pattern: PLACEHOLDER_PATTERN,
            message: e.to_string(),
        })
}

/// Modifier applied to a referenced token's textual form
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// `alpha-<number>`; keeps the number as written
    Alpha(String),
}

impl Modifier {
    pub fn parse(text: &str) -> Option<Self> {
        let alpha = text.strip_prefix("alpha-")?;
        alpha.parse::<f64>().ok().filter(|a| a.is_finite())?;
        Some(Modifier::Alpha(alpha.to_string()))
    }
}

/// Parsed placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Exact matched text, braces included
    pub raw: String,
    pub category: String,
    pub name: String,
    pub modifier: Option<Modifier>,
    /// Modifier text as written, for error reporting
    pub modifier_text: Option<String>,
}

impl Placeholder {
    /// `category.name`, the lookup key
    pub fn reference(&self) -> String {
        format!("{}.{}", self.category, self.name)
    }

    /// Parse one matched placeholder (`raw` includes the braces)
    pub fn parse(raw: &str, token: &str) -> ResolutionResult<Self> {
        if raw.len() > MAX_PLACEHOLDER_LENGTH {
            return Err(ResolutionError::malformed_placeholder(
                raw,
                token,
                "placeholder is too long",
            ));
        }

        let inner = raw
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| ResolutionError::malformed_placeholder(raw, token, "missing braces"))?;

        let (main, modifier_text) = match inner.split_once(',') {
            Some((main, modifier)) => (main.trim(), Some(modifier.trim())),
            None => (inner.trim(), None),
        };

        let (category, name) = match main.split_once('.') {
            Some((category, name))
                if !category.is_empty() && !name.is_empty() && !name.contains('.') =>
            {
                (category, name)
            }
            _ => {
                return Err(ResolutionError::malformed_placeholder(
                    raw,
                    token,
                    "expected 'category.name'",
                ))
            }
        };

        let modifier = match modifier_text {
            None => None,
            Some(text) => Some(Modifier::parse(text).ok_or_else(|| {
                ResolutionError::unsupported_modifier(
                    raw,
                    text,
                    token,
                    "only 'alpha-<number>' is supported",
                )
            })?),
        };

        Ok(Self {
            raw: raw.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            modifier,
            modifier_text: modifier_text.map(str::to_string),
        })
    }
}

/// Byte ranges of every placeholder in `field`, left to right
pub fn find_placeholders(field: &str) -> ResolutionResult<Vec<Range<usize>>> {
    Ok(placeholder_pattern()?
        .find_iter(field)
        .map(|m| m.range())
        .collect())
}

/// Replace every placeholder in `field` with `render(placeholder)`.
///
/// Returns the rebuilt string and the number of substitutions made.
pub fn substitute<F>(field: &str, token: &str, mut render: F) -> ResolutionResult<(String, usize)>
where
    F: FnMut(&Placeholder) -> ResolutionResult<String>,
{
    let ranges = find_placeholders(field)?;
    if ranges.len() > MAX_PLACEHOLDERS_PER_FIELD {
        return Err(ResolutionError::TooManyPlaceholders {
            token: token.to_string(),
            count: ranges.len(),
            max: MAX_PLACEHOLDERS_PER_FIELD,
        });
    }

    let mut output = String::with_capacity(field.len());
    let mut cursor = 0;
    for range in &ranges {
        output.push_str(&field[cursor..range.start]);
        let placeholder = Placeholder::parse(&field[range.clone()], token)?;
        output.push_str(&render(&placeholder)?);
        cursor = range.end;
    }
    output.push_str(&field[cursor..]);

    Ok((output, ranges.len()))
}
