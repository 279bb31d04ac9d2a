//! Raw object form: every token keeps its structured value.

use super::interfaces::{
    category_interface_names, TypedObject, COLOR_TOKEN, FOCUS_TOKEN,
    TYPOGRAPHY_TOKEN, VALUE_UNIT,
};
use super::{build_objects, mismatch, to_json, TsCategory};
use crate::renderers::{RenderContext, RenderOutput, RenderResult};
use crate::tokens::{Token, TokenCatalog, TokenValue};
use serde_json::{Map, Value};

pub fn color(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Color(color) => {
            let mut object = Map::new();
            object.insert("hsl".to_string(), Value::String(color.to_css()));
            object.insert("h".to_string(), Value::Number(color.h.clone()));
            object.insert("s".to_string(), Value::Number(color.s.clone()));
            object.insert("l".to_string(), Value::Number(color.l.clone()));
            Ok((Value::Object(object), COLOR_TOKEN))
        }
        TokenValue::Measure(text) => Ok((to_json(token, text)?, VALUE_UNIT)),
        _ => Err(mismatch(token)),
    }
}

pub fn typography(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Typography(typography) => {
            let mut object = Map::new();
            object.insert("fontFamily".to_string(), Value::String(typography.font_stack()));
            object.insert("fontSize".to_string(), to_json(token, &typography.font_size)?);
            object.insert("lineHeight".to_string(), to_json(token, &typography.line_height)?);
            object.insert("fontWeight".to_string(), to_json(token, &typography.font_weight)?);
            Ok((Value::Object(object), TYPOGRAPHY_TOKEN))
        }
        TokenValue::Measure(text) => Ok((to_json(token, text)?, VALUE_UNIT)),
        _ => Err(mismatch(token)),
    }
}

pub fn measure(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Measure(measure) => Ok((to_json(token, measure)?, VALUE_UNIT)),
        _ => Err(mismatch(token)),
    }
}

pub fn focus(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Focus(focus) => Ok((to_json(token, focus)?, FOCUS_TOKEN)),
        TokenValue::Measure(text) => Ok((to_json(token, text)?, VALUE_UNIT)),
        _ => Err(mismatch(token)),
    }
}

/// `const <raw>: <RawInterface> = {...};` followed by its interfaces
pub fn render_raw(catalog: &TokenCatalog, context: &RenderContext) -> RenderResult<RenderOutput> {
    let names = &context.config.typescript;
    let (objects, warnings) = build_objects(catalog, context, |handlers: &TsCategory| handlers.raw)?;

    let mut root = TypedObject::new();
    let mut category_interfaces = Vec::with_capacity(objects.len());
    for entry in objects {
        let discriminator = entry.category.discriminator();
        let Some((raw_interface, _)) = category_interface_names(discriminator) else {
            continue;
        };
        category_interfaces.push(entry.object.interface(raw_interface));
        root.insert(discriminator, entry.object.into_value(), raw_interface);
    }

    let mut blocks = Vec::with_capacity(category_interfaces.len() + 2);
    blocks.push(format!(
        "const {}: {} = {};\n",
        names.raw_export_name,
        names.raw_interface_name,
        root.to_json_text()
    ));
    blocks.extend(category_interfaces);
    blocks.push(root.interface(&names.raw_interface_name));

    Ok(RenderOutput::new(blocks.join("\n"), warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_str, DocumentRole};
    use crate::config::GeneratorConfig;
    use crate::renderers::RenderError;
    use assert_matches::assert_matches;

    fn render(source: &str) -> RenderResult<RenderOutput> {
        let catalog = load_str(source, "tokens.json", DocumentRole::Basic).unwrap();
        let config = GeneratorConfig::default();
        render_raw(&catalog, &RenderContext::new(&config))
    }

    #[test]
    fn test_raw_spacing_object_and_interfaces() {
        let output = render(
            r#"{
                "categories": {"spacing": {"tokenPrefix": "s"}},
                "tokens": {"xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}}}
            }"#,
        )
        .unwrap();

        assert_eq!(
            output.text,
            "const designTokenObjects: RawDesignTokens = {\"spacing\":{\"xxl\":{\"value\":40,\"unit\":\"px\"}}};\n\
             \n\
             export interface RawSpacingDesignTokens {\n  xxl: ValueUnit;\n}\n\
             \n\
             export interface RawDesignTokens {\n  spacing: RawSpacingDesignTokens;\n}\n"
        );
    }

    #[test]
    fn test_raw_color_carries_components() {
        let output = render(
            r#"{
                "categories": {"colors": {"tokenPrefix": "c"}},
                "tokens": {"highlightBase": {"category": "colors", "value": {"h": 212, "s": 63, "l": 45}}}
            }"#,
        )
        .unwrap();

        assert!(output.text.contains(
            r#""highlightBase":{"hsl":"hsl(212, 63%, 45%)","h":212,"s":63,"l":45}"#
        ));
        assert!(output.text.contains("  highlightBase: ColorToken;\n"));
    }

    #[test]
    fn test_raw_typography_uses_font_stack() {
        let output = render(
            r#"{
                "categories": {"typography": {"tokenPrefix": "t"}},
                "tokens": {"bodyText": {"category": "typography", "value": {
                    "fontFamily": ["Source Sans Pro"],
                    "genericFontFamily": "sans-serif",
                    "fontSize": {"value": 18, "unit": "px"},
                    "lineHeight": {"value": 1.5, "unit": null},
                    "fontWeight": 400
                }}}
            }"#,
        )
        .unwrap();

        assert!(output.text.contains(
            r#""bodyText":{"fontFamily":"'Source Sans Pro', sans-serif","fontSize":{"value":18,"unit":"px"},"lineHeight":{"value":1.5,"unit":null},"fontWeight":400}"#
        ));
        assert!(output.text.contains("  bodyText: TypographyToken;\n"));
    }

    #[test]
    fn test_raw_breakpoint_keys_drop_suffix() {
        let output = render(
            r#"{
                "categories": {"breakpoints": {"tokenPrefix": "bp"}},
                "tokens": {"smallTabletBreakpoint": {"category": "breakpoints", "value": {"value": 600, "unit": "px"}}}
            }"#,
        )
        .unwrap();

        assert!(output.text.contains(r#""smallTablet":{"value":600,"unit":"px"}"#));
        assert!(output.text.contains("  smallTablet: ValueUnit;\n"));
        assert!(output.text.contains("  breakpoints: RawBreakpointDesignTokens;\n"));
    }

    #[test]
    fn test_raw_rejects_wrong_shape() {
        let catalog = load_str(
            r#"{
                "categories": {"colors": {"tokenPrefix": "c"}},
                "tokens": {"x": {"category": "colors", "type": "derived-string", "value": {"value": "{colors.a}"}}}
            }"#,
            "derived.json",
            DocumentRole::Derived,
        )
        .unwrap();
        let config = GeneratorConfig::default();

        assert_matches!(
            render_raw(&catalog, &RenderContext::new(&config)),
            Err(RenderError::ValueShapeMismatch { format: "ts", found: "derived-string", .. })
        );
    }
}
