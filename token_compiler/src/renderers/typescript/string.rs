//! String-flattened form: tokens become ready-to-use CSS strings, focus
//! tokens keep their object. The raw constant is embedded as `values`.

use super::interfaces::{category_interface_names, TypedObject, FOCUS_TOKEN, STRING};
use super::{build_objects, mismatch, to_json, TsCategory};
use crate::renderers::{RenderContext, RenderOutput, RenderResult};
use crate::tokens::{Token, TokenCatalog, TokenValue};
use serde_json::Value;

const VALUES_KEY: &str = "values";

fn text(css: String) -> RenderResult<(Value, &'static str)> {
    Ok((Value::String(css), STRING))
}

pub fn color(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Color(color) => text(color.to_css()),
        TokenValue::Measure(resolved) => text(resolved.to_css()),
        _ => Err(mismatch(token)),
    }
}

pub fn typography(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Typography(typography) => text(typography.to_declarations()),
        TokenValue::Measure(resolved) => text(resolved.to_css()),
        _ => Err(mismatch(token)),
    }
}

pub fn measure(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Measure(measure) => text(measure.to_css()),
        _ => Err(mismatch(token)),
    }
}

pub fn focus(token: &Token) -> RenderResult<(Value, &'static str)> {
    match &token.value {
        TokenValue::Focus(focus) => Ok((to_json(token, focus)?, FOCUS_TOKEN)),
        TokenValue::Measure(resolved) => text(resolved.to_css()),
        _ => Err(mismatch(token)),
    }
}

/// `export const <string>: <Interface> = {..., values: <raw>};` followed by
/// its interfaces
pub fn render_string(catalog: &TokenCatalog, context: &RenderContext) -> RenderResult<RenderOutput> {
    let names = &context.config.typescript;
    let (objects, warnings) =
        build_objects(catalog, context, |handlers: &TsCategory| handlers.string)?;

    let mut root = TypedObject::new();
    let mut category_interfaces = Vec::with_capacity(objects.len());
    for entry in objects {
        let discriminator = entry.category.discriminator();
        let Some((_, string_interface)) = category_interface_names(discriminator) else {
            continue;
        };
        category_interfaces.push(entry.object.interface(string_interface));
        root.insert(discriminator, entry.object.into_value(), string_interface);
    }

    // `values` references the raw constant, so it is written as an
    // identifier rather than JSON
    let mut members: Vec<String> = root
        .values()
        .iter()
        .map(|(key, value)| format!("{}:{}", Value::String(key.clone()), value))
        .collect();
    members.push(format!("{}: {}", VALUES_KEY, names.raw_export_name));

    let mut root_interface = root.clone();
    root_interface.insert(VALUES_KEY, Value::Null, &names.raw_interface_name);

    let mut blocks = Vec::with_capacity(category_interfaces.len() + 2);
    blocks.push(format!(
        "export const {}: {} = {{{}}};\n",
        names.string_export_name,
        names.interface_name,
        members.join(",")
    ));
    blocks.extend(category_interfaces);
    blocks.push(root_interface.interface(&names.interface_name));

    Ok(RenderOutput::new(blocks.join("\n"), warnings))
}
