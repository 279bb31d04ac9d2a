//! Reference Resolution
//!
//! Rewrites every placeholder inside derived tokens with the literal text of
//! the basic token it names. Resolution is a pure transform: it reads an
//! immutable basic catalog and an immutable derived catalog and returns a
//! new, fully literal catalog. Substituted text is never re-scanned.

use crate::catalog::shape_value;
use crate::config::runtime::ResolutionPreferences;
use crate::logging::codes;
use crate::tokens::{CategoryKind, Token, TokenCatalog, TokenValue, ValueUnit};
use crate::{log_debug, log_error, log_info, log_success};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub mod error;
pub mod placeholder;

pub use error::{ResolutionError, ResolutionResult};
pub use placeholder::{Modifier, Placeholder};

/// Counters collected during one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub tokens_resolved: usize,
    pub fields_scanned: usize,
    pub placeholders_substituted: usize,
}

/// Output of [`resolve_references`]
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Basic catalog followed by the resolved derived catalog
    pub catalog: TokenCatalog,
    pub stats: ResolutionStats,
}

/// Resolve `derived` against `basic` and merge the result after `basic`
pub fn resolve_references(
    basic: &TokenCatalog,
    derived: &TokenCatalog,
    preferences: &ResolutionPreferences,
) -> ResolutionResult<Resolution> {
    log_info!("Starting reference resolution",
        "basic_tokens" => basic.token_count(),
        "derived_tokens" => derived.derived_token_count()
    );

    let resolver = ReferenceResolver::new(basic)
        .with_substitution_logging(preferences.log_substitution_details);
    let (resolved, stats) = resolver.resolve_catalog(derived)?;

    log_success!(codes::success::REFERENCE_RESOLUTION_COMPLETE,
        "Reference resolution completed",
        "tokens_resolved" => stats.tokens_resolved,
        "fields_scanned" => stats.fields_scanned,
        "placeholders" => stats.placeholders_substituted
    );

    Ok(Resolution {
        catalog: basic.clone().merge(resolved),
        stats,
    })
}

/// Lookup table over a basic catalog keyed by `(category, name)`
pub struct ReferenceResolver<'a> {
    index: HashMap<(&'a str, &'a str), &'a Token>,
    log_substitutions: bool,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(basic: &'a TokenCatalog) -> Self {
        let index = basic
            .categories
            .iter()
            .flat_map(|category| {
                category
                    .tokens
                    .iter()
                    .map(move |token| ((category.discriminator(), token.name.as_str()), token))
            })
            .collect();

        Self {
            index,
            log_substitutions: false,
        }
    }

    pub fn with_substitution_logging(mut self, enabled: bool) -> Self {
        self.log_substitutions = enabled;
        self
    }

    pub fn lookup(&self, category: &str, name: &str) -> Option<&'a Token> {
        self.index.get(&(category, name)).copied()
    }

    /// Resolve every token of `derived`, keeping category and token order
    pub fn resolve_catalog(
        &self,
        derived: &TokenCatalog,
    ) -> ResolutionResult<(TokenCatalog, ResolutionStats)> {
        let mut stats = ResolutionStats::default();
        let mut resolved = derived.clone();

        for category in &mut resolved.categories {
            for token in &mut category.tokens {
                if !token.is_derived() {
                    continue;
                }
                *token = self.resolve_token(token, &category.kind, &mut stats)?;
                stats.tokens_resolved += 1;
            }
        }

        Ok((resolved, stats))
    }

    /// Resolve a single token; literal tokens are returned unchanged
    pub fn resolve_token(
        &self,
        token: &Token,
        kind: &CategoryKind,
        stats: &mut ResolutionStats,
    ) -> ResolutionResult<Token> {
        let value = match &token.value {
            TokenValue::DerivedString(text) => {
                let resolved = self.resolve_field(text, &token.name, stats)?;
                TokenValue::Measure(ValueUnit::text(resolved))
            }
            TokenValue::DerivedObject(fields) => {
                let resolved = self.resolve_object(fields, &token.name, stats)?;
                self.reshape(resolved, token, kind)?
            }
            _ => return Ok(token.clone()),
        };

        let mut resolved = token.clone();
        resolved.token_type = value.type_name().to_string();
        resolved.value = value;
        Ok(resolved)
    }

    fn resolve_object(
        &self,
        fields: &Map<String, Value>,
        token_name: &str,
        stats: &mut ResolutionStats,
    ) -> ResolutionResult<Map<String, Value>> {
        fields
            .iter()
            .map(|(key, value)| {
                let value = self.resolve_value(value, token_name, stats)?;
                Ok::<_, ResolutionError>((key.clone(), value))
            })
            .collect()
    }

    /// Substitute every string leaf of `value`, at any depth
    fn resolve_value(
        &self,
        value: &Value,
        token_name: &str,
        stats: &mut ResolutionStats,
    ) -> ResolutionResult<Value> {
        match value {
            Value::String(text) if text.contains('{') => {
                Ok(Value::String(self.resolve_field(text, token_name, stats)?))
            }
            Value::Object(fields) => Ok(Value::Object(self.resolve_object(fields, token_name, stats)?)),
            Value::Array(items) => items
                .iter()
                .map(|item| self.resolve_value(item, token_name, stats))
                .collect::<ResolutionResult<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }

    /// Re-read a resolved object as its category's natural shape
    fn reshape(
        &self,
        fields: Map<String, Value>,
        token: &Token,
        kind: &CategoryKind,
    ) -> ResolutionResult<TokenValue> {
        let object = Value::Object(fields);
        match kind.natural_shape() {
            Some(shape) => shape_value(shape, &object).map_err(|message| {
                let error =
                    ResolutionError::malformed_derived_value(&token.name, kind.as_str(), &message);
                log_error!(error.error_code(), "Resolved derived object does not fit its category",
                    "token" => &token.name,
                    "category" => kind,
                    "error" => &message
                );
                error
            }),
            None => Ok(TokenValue::Raw(object)),
        }
    }

    fn resolve_field(
        &self,
        field: &str,
        token_name: &str,
        stats: &mut ResolutionStats,
    ) -> ResolutionResult<String> {
        stats.fields_scanned += 1;

        let (resolved, count) = placeholder::substitute(field, token_name, |placeholder| {
            let text = self.render_reference(placeholder, token_name)?;
            if self.log_substitutions {
                log_debug!("Placeholder substituted",
                    "token" => token_name,
                    "placeholder" => &placeholder.raw,
                    "text" => &text
                );
            }
            Ok(text)
        })
        .map_err(|error| {
            log_error!(error.error_code(), "Reference resolution failed",
                "token" => token_name,
                "placeholder" => error.placeholder().unwrap_or("-"),
                "error" => &error
            );
            error
        })?;

        stats.placeholders_substituted += count;
        Ok(resolved)
    }

    /// Literal text of the token a placeholder names
    fn render_reference(&self, placeholder: &Placeholder, token_name: &str) -> ResolutionResult<String> {
        let referent = self
            .lookup(&placeholder.category, &placeholder.name)
            .ok_or_else(|| {
                ResolutionError::unresolved_reference(
                    &placeholder.raw,
                    &placeholder.reference(),
                    token_name,
                )
            })?;

        match (&referent.value, &placeholder.modifier) {
            (TokenValue::Color(color), None) => Ok(color.to_css()),
            (TokenValue::Color(color), Some(Modifier::Alpha(alpha))) => {
                Ok(color.to_css_with_alpha(alpha))
            }
            (TokenValue::Measure(measure), None) => Ok(measure.to_css()),
            (TokenValue::Measure(_), Some(_)) => Err(ResolutionError::unsupported_modifier(
                &placeholder.raw,
                placeholder.modifier_text.as_deref().unwrap_or_default(),
                token_name,
                "alpha applies to color references only",
            )),
            (other, _) => Err(ResolutionError::unsupported_reference_category(
                &placeholder.raw,
                token_name,
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_str, DocumentRole};
    use crate::tokens::{Focus, Scalar};
    use assert_matches::assert_matches;

    const BASIC: &str = r#"{
        "categories": {
            "colors": {"tokenPrefix": "c"},
            "radiuses": {"tokenPrefix": "r"},
            "typography": {"tokenPrefix": "t"}
        },
        "tokens": {
            "highlightBase": {"category": "colors", "type": "hsl", "value": {"h": 212, "s": 63, "l": 45}},
            "whiteBase": {"category": "colors", "type": "hsl", "value": {"h": 0, "s": 0, "l": 100}},
            "focus": {"category": "radiuses", "type": "px", "value": {"value": 2, "unit": "px"}},
            "bodyText": {
                "category": "typography",
                "value": {
                    "fontFamily": ["Source Sans Pro"],
                    "genericFontFamily": "sans-serif",
                    "fontSize": {"value": 18, "unit": "px"},
                    "lineHeight": {"value": 1.5, "unit": null},
                    "fontWeight": 400
                }
            }
        }
    }"#;

    fn basic() -> TokenCatalog {
        load_str(BASIC, "tokens.json", DocumentRole::Basic).unwrap()
    }

    fn derived(tokens: &str) -> TokenCatalog {
        let source = format!(
            r#"{{
                "categories": {{"shadows": {{"tokenPrefix": "sh"}}, "focuses": {{"tokenPrefix": "f"}}}},
                "tokens": {{ {} }}
            }}"#,
            tokens
        );
        load_str(&source, "derived.json", DocumentRole::Derived).unwrap()
    }

    fn resolve_single(tokens: &str) -> ResolutionResult<Token> {
        let basic = basic();
        let derived = derived(tokens);
        let (resolved, _) = ReferenceResolver::new(&basic).resolve_catalog(&derived)?;
        let token = resolved.tokens().next().cloned().expect("one derived token");
        Ok(token)
    }

    #[test]
    fn test_color_with_alpha_modifier() {
        let token = resolve_single(
            r#""glow": {"category": "shadows", "type": "derived-string", "value": {"value": "{colors.highlightBase, alpha-0.1}"}}"#,
        )
        .unwrap();

        assert_eq!(
            token.value,
            TokenValue::Measure(ValueUnit::text("hsla(212, 63%, 45%, 0.1)"))
        );
        assert_eq!(token.token_type, "value-unit");
    }

    #[test]
    fn test_color_without_modifier() {
        let token = resolve_single(
            r#""line": {"category": "shadows", "type": "derived-string", "value": {"value": "{colors.highlightBase}"}}"#,
        )
        .unwrap();

        assert_eq!(token.value, TokenValue::Measure(ValueUnit::text("hsl(212, 63%, 45%)")));
    }

    #[test]
    fn test_radius_reference() {
        let token = resolve_single(
            r#""round": {"category": "shadows", "type": "derived-string", "value": {"value": "{radiuses.focus}"}}"#,
        )
        .unwrap();

        assert_eq!(token.value, TokenValue::Measure(ValueUnit::text("2px")));
    }

    #[test]
    fn test_multiple_placeholders_leave_no_braces() {
        let token = resolve_single(
            r#""ring": {"category": "shadows", "type": "derived-string", "value": {"value": "0 0 0 {radiuses.focus} {colors.whiteBase, alpha-0.5}, inset 0 0 {radiuses.focus} {colors.highlightBase}"}}"#,
        )
        .unwrap();

        let TokenValue::Measure(measure) = &token.value else {
            panic!("expected a measure, got {:?}", token.value);
        };
        let text = measure.to_css();
        assert!(!text.contains('{'));
        assert_eq!(
            text,
            "0 0 0 2px hsla(0, 0%, 100%, 0.5), inset 0 0 2px hsl(212, 63%, 45%)"
        );
    }

    #[test]
    fn test_derived_object_becomes_focus() {
        let token = resolve_single(
            r#""focusRing": {
                "category": "focuses",
                "type": "derived-object",
                "wrapper": "&:focus",
                "value": {
                    "position": "absolute",
                    "borderRadius": "{radiuses.focus}",
                    "boxShadow": "0 0 0 2px {colors.highlightBase}",
                    "zIndex": 9999
                }
            }"#,
        )
        .unwrap();

        assert_matches!(token.value, TokenValue::Focus(Focus {
            ref wrapper,
            ref border_radius,
            ref box_shadow,
            z_index: Some(Scalar::Number(_)),
            ..
        }) if wrapper.as_deref() == Some("&:focus")
            && border_radius.as_deref() == Some("2px")
            && box_shadow.as_deref() == Some("0 0 0 2px hsl(212, 63%, 45%)"));
    }

    #[test]
    fn test_nested_offset_placeholder_is_resolved() {
        let basic = basic();
        let derived = derived(
            r#""ring": {
                "category": "focuses",
                "type": "derived-object",
                "value": {
                    "position": "absolute",
                    "top": {"value": "{radiuses.focus}", "unit": null},
                    "left": {"value": -2, "unit": "px"}
                }
            }"#,
        );

        let (resolved, stats) = ReferenceResolver::new(&basic).resolve_catalog(&derived).unwrap();
        let token = resolved.tokens().next().cloned().unwrap();

        assert_eq!(stats.placeholders_substituted, 1);
        assert_matches!(token.value, TokenValue::Focus(Focus { ref top, ref left, .. })
            if top.as_ref().map(ValueUnit::to_css).as_deref() == Some("2px")
                && left.as_ref().map(ValueUnit::to_css).as_deref() == Some("-2px"));
    }

    #[test]
    fn test_nested_unresolved_reference_is_fatal() {
        let err = resolve_single(
            r#""ring": {"category": "focuses", "type": "derived-object",
                "value": {"top": {"value": "{radiuses.missing}", "unit": null}}}"#,
        )
        .unwrap_err();

        assert_matches!(
            err,
            ResolutionError::UnresolvedReference { ref reference, .. } if reference == "radiuses.missing"
        );
    }

    #[test]
    fn test_unresolved_reference_names_placeholder() {
        let err = resolve_single(
            r#""broken": {"category": "shadows", "type": "derived-string", "value": {"value": "0 1px {colors.doesNotExist}"}}"#,
        )
        .unwrap_err();

        assert_matches!(
            err,
            ResolutionError::UnresolvedReference { ref reference, .. } if reference == "colors.doesNotExist"
        );
    }

    #[test]
    fn test_alpha_on_measure_is_rejected() {
        let err = resolve_single(
            r#""bad": {"category": "shadows", "type": "derived-string", "value": {"value": "{radiuses.focus, alpha-0.1}"}}"#,
        )
        .unwrap_err();

        assert_matches!(err, ResolutionError::UnsupportedModifier { .. });
    }

    #[test]
    fn test_typography_reference_is_unsupported() {
        let err = resolve_single(
            r#""bad": {"category": "shadows", "type": "derived-string", "value": {"value": "{typography.bodyText}"}}"#,
        )
        .unwrap_err();

        assert_matches!(
            err,
            ResolutionError::UnsupportedReferenceCategory { ref shape, .. } if shape == "typography"
        );
    }

    #[test]
    fn test_resolve_references_merges_after_basic() {
        let basic = basic();
        let derived = derived(
            r#""glow": {"category": "shadows", "type": "derived-string", "value": {"value": "0 0 4px {colors.whiteBase}"}}"#,
        );

        let resolution =
            resolve_references(&basic, &derived, &ResolutionPreferences::default()).unwrap();

        assert_eq!(resolution.stats.tokens_resolved, 1);
        assert_eq!(resolution.stats.placeholders_substituted, 1);
        assert_eq!(resolution.catalog.categories.len(), basic.categories.len() + 2);
        assert_eq!(resolution.catalog.derived_token_count(), 0);
        assert_eq!(resolution.catalog.categories[0].discriminator(), "colors");
    }
}
