//! Typed-source renderer
//!
//! The generated module holds, in order: the static shape interfaces, the
//! raw object constant with its per-category interfaces, then the exported
//! string-flattened constant (which embeds the raw one as `values`) with its
//! own interfaces. Every interface is generated from the same key list as
//! the object it describes.

pub mod interfaces;
pub mod raw;
pub mod string;

use super::registry::CategoryRegistry;
use super::{FormatRenderer, RenderContext, RenderError, RenderOutput, RenderResult, RenderWarning};
use crate::tokens::{Category, CategoryKind, Token, TokenCatalog};
use interfaces::TypedObject;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

pub const FORMAT: &str = "ts";

/// Token to (JSON value, declared type)
pub type TokenHandler = fn(&Token) -> RenderResult<(Value, &'static str)>;

/// Handlers for both typed-source forms of one category
#[derive(Clone, Copy)]
pub struct TsCategory {
    pub raw: TokenHandler,
    pub string: TokenHandler,
}

static REGISTRY: OnceLock<CategoryRegistry<TsCategory>> = OnceLock::new();

pub fn registry() -> &'static CategoryRegistry<TsCategory> {
    REGISTRY.get_or_init(|| {
        let measure = TsCategory {
            raw: raw::measure,
            string: string::measure,
        };

        CategoryRegistry::new(FORMAT)
            .with(
                CategoryKind::Colors,
                TsCategory {
                    raw: raw::color,
                    string: string::color,
                },
            )
            .with(
                CategoryKind::Typography,
                TsCategory {
                    raw: raw::typography,
                    string: string::typography,
                },
            )
            .with(CategoryKind::Spacing, measure)
            .with(CategoryKind::Radiuses, measure)
            .with(CategoryKind::Transitions, measure)
            .with(CategoryKind::Gradients, measure)
            .with(CategoryKind::Shadows, measure)
            .with(CategoryKind::Breakpoints, measure)
            .with(
                CategoryKind::Focuses,
                TsCategory {
                    raw: raw::focus,
                    string: string::focus,
                },
            )
    })
}

/// A category rendered into one typed-source form
pub struct CategoryObject<'c> {
    pub category: &'c Category,
    pub object: TypedObject,
}

/// Run one form's handler over every supported category
pub fn build_objects<'c>(
    catalog: &'c TokenCatalog,
    context: &RenderContext,
    pick: fn(&TsCategory) -> TokenHandler,
) -> RenderResult<(Vec<CategoryObject<'c>>, Vec<RenderWarning>)> {
    let (supported, warnings) = registry().dispatch(catalog);

    let mut objects = Vec::with_capacity(supported.len());
    for (category, handlers) in supported {
        let handler = pick(&handlers);
        let mut object = TypedObject::new();
        for token in &category.tokens {
            let (value, type_name) = handler(token)?;
            object.insert(
                context.names.output_name(&category.kind, &token.name),
                value,
                type_name,
            );
        }
        objects.push(CategoryObject { category, object });
    }

    Ok((objects, warnings))
}

pub(crate) fn mismatch(token: &Token) -> RenderError {
    RenderError::value_shape_mismatch(FORMAT, &token.category, &token.name, token.value.type_name())
}

pub(crate) fn to_json<T: Serialize>(token: &Token, value: &T) -> RenderResult<Value> {
    serde_json::to_value(value).map_err(|e| RenderError::serialization(FORMAT, &token.name, e))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl FormatRenderer for TypeScriptRenderer {
    fn format(&self) -> &'static str {
        FORMAT
    }

    fn render(&self, catalog: &TokenCatalog, context: &RenderContext) -> RenderResult<RenderOutput> {
        let raw_output = raw::render_raw(catalog, context)?;
        let string_output = string::render_string(catalog, context)?;

        let text = format!(
            "{}\n{}\n{}",
            interfaces::STATIC_INTERFACES,
            raw_output.text,
            string_output.text
        );

        // Both forms dispatch through the same registry, so their warnings match
        Ok(RenderOutput::new(text, raw_output.warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_str, DocumentRole};
    use crate::config::GeneratorConfig;

    #[test]
    fn test_module_layout_order() {
        let catalog = load_str(
            r#"{
                "categories": {"spacing": {"tokenPrefix": "s"}},
                "tokens": {"xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}}}
            }"#,
            "tokens.json",
            DocumentRole::Basic,
        )
        .unwrap();
        let config = GeneratorConfig::default();

        let output = TypeScriptRenderer
            .render(&catalog, &RenderContext::new(&config))
            .unwrap();
        let text = output.text;

        let static_at = text.find("export interface ValueUnit").unwrap();
        let raw_at = text.find("const designTokenObjects: RawDesignTokens").unwrap();
        let string_at = text.find("export const designTokens: DesignTokens").unwrap();
        assert!(static_at < raw_at && raw_at < string_at);

        assert!(text.contains(r#""xxl":{"value":40,"unit":"px"}"#));
        assert!(text.contains("  xxl: ValueUnit;\n"));
        assert!(text.contains("  xxl: string;\n"));
        assert!(text.contains(r#""xxl":"40px""#));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_unknown_category_reported_once() {
        let catalog = load_str(
            r#"{
                "categories": {"motion": {"tokenPrefix": "m"}},
                "tokens": {"fast": {"category": "motion", "value": "120ms"}}
            }"#,
            "tokens.json",
            DocumentRole::Basic,
        )
        .unwrap();
        let config = GeneratorConfig::default();

        let output = TypeScriptRenderer
            .render(&catalog, &RenderContext::new(&config))
            .unwrap();

        assert_eq!(output.warnings.len(), 1);
        assert!(!output.text.contains("fast"));
    }
}
