//! Stylesheet renderer
//!
//! Emits one `$<prefix>-<category prefix>-<name>: <value>;` variable per
//! token, or an `@mixin` block for typography and focus tokens.

use super::registry::CategoryRegistry;
use super::{FormatRenderer, RenderContext, RenderError, RenderOutput, RenderResult};
use crate::tokens::{Category, CategoryKind, Focus, Token, TokenCatalog, TokenValue, Typography};
use std::sync::OnceLock;

pub const FORMAT: &str = "scss";

const INDENT: &str = "  ";

type ScssHandler = fn(&Category, &Token, &RenderContext) -> RenderResult<String>;

static REGISTRY: OnceLock<CategoryRegistry<ScssHandler>> = OnceLock::new();

fn registry() -> &'static CategoryRegistry<ScssHandler> {
    REGISTRY.get_or_init(|| {
        CategoryRegistry::new(FORMAT)
            .with(CategoryKind::Colors, render_color as ScssHandler)
            .with(CategoryKind::Typography, render_typography)
            .with(CategoryKind::Spacing, render_measure)
            .with(CategoryKind::Radiuses, render_measure)
            .with(CategoryKind::Breakpoints, render_measure)
            .with(CategoryKind::Transitions, render_literal)
            .with(CategoryKind::Gradients, render_literal)
            .with(CategoryKind::Shadows, render_literal)
            .with(CategoryKind::Focuses, render_focus)
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScssRenderer;

impl FormatRenderer for ScssRenderer {
    fn format(&self) -> &'static str {
        FORMAT
    }

    fn render(&self, catalog: &TokenCatalog, context: &RenderContext) -> RenderResult<RenderOutput> {
        let (supported, warnings) = registry().dispatch(catalog);

        let mut blocks = Vec::with_capacity(catalog.token_count());
        for (category, handler) in supported {
            for token in &category.tokens {
                blocks.push(handler(category, token, context)?);
            }
        }

        let mut text = blocks.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        Ok(RenderOutput::new(text, warnings))
    }
}

/// `<scss prefix>-<category prefix>-<kebab name>`
fn identifier(category: &Category, token: &Token, context: &RenderContext) -> String {
    format!(
        "{}-{}-{}",
        context.config.scss_prefix,
        token.prefix,
        context.names.kebab_name(&category.kind, &token.name)
    )
}

fn variable(category: &Category, token: &Token, context: &RenderContext, value: &str) -> String {
    format!("${}: {};", identifier(category, token, context), value)
}

fn mismatch(category: &Category, token: &Token) -> RenderError {
    RenderError::value_shape_mismatch(
        FORMAT,
        category.discriminator(),
        &token.name,
        token.value.type_name(),
    )
}

fn render_color(category: &Category, token: &Token, context: &RenderContext) -> RenderResult<String> {
    match &token.value {
        TokenValue::Color(color) => Ok(variable(category, token, context, &color.to_css())),
        TokenValue::Measure(text) => Ok(variable(category, token, context, &text.to_css())),
        _ => Err(mismatch(category, token)),
    }
}

fn render_measure(category: &Category, token: &Token, context: &RenderContext) -> RenderResult<String> {
    match &token.value {
        TokenValue::Measure(measure) => Ok(variable(category, token, context, &measure.to_css())),
        _ => Err(mismatch(category, token)),
    }
}

/// Transitions, gradients and shadows carry a ready literal in `value`
fn render_literal(category: &Category, token: &Token, context: &RenderContext) -> RenderResult<String> {
    match &token.value {
        TokenValue::Measure(measure) => {
            Ok(variable(category, token, context, &measure.value.to_string()))
        }
        _ => Err(mismatch(category, token)),
    }
}

fn render_typography(category: &Category, token: &Token, context: &RenderContext) -> RenderResult<String> {
    match &token.value {
        TokenValue::Typography(typography) => Ok(mixin(
            &identifier(category, token, context),
            &typography_declarations(typography),
        )),
        TokenValue::Measure(text) => Ok(variable(category, token, context, &text.to_css())),
        _ => Err(mismatch(category, token)),
    }
}

fn typography_declarations(typography: &Typography) -> Vec<String> {
    vec![
        format!("font-family: {};", typography.font_stack()),
        format!("font-size: {};", typography.font_size),
        format!("line-height: {};", typography.line_height),
        format!("font-weight: {};", typography.font_weight),
    ]
}

fn render_focus(category: &Category, token: &Token, context: &RenderContext) -> RenderResult<String> {
    match &token.value {
        TokenValue::Focus(focus) => Ok(mixin(
            &identifier(category, token, context),
            &focus_body(focus),
        )),
        TokenValue::Measure(text) => Ok(variable(category, token, context, &text.to_css())),
        _ => Err(mismatch(category, token)),
    }
}

/// Focus body lines: present declarations, then `&:after`, optionally
/// nested inside the wrapper selector
fn focus_body(focus: &Focus) -> Vec<String> {
    let mut lines: Vec<String> = focus
        .declarations()
        .into_iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect();

    if let Some(after) = &focus.after {
        lines.push("&:after {".to_string());
        lines.push(format!("{}{}", INDENT, after));
        lines.push("}".to_string());
    }

    match &focus.wrapper {
        Some(wrapper) => {
            let mut wrapped = Vec::with_capacity(lines.len() + 2);
            wrapped.push(format!("{} {{", wrapper));
            wrapped.extend(lines.into_iter().map(|line| format!("{}{}", INDENT, line)));
            wrapped.push("}".to_string());
            wrapped
        }
        None => lines,
    }
}

fn mixin(name: &str, body: &[String]) -> String {
    let mut block = format!("@mixin {} {{\n", name);
    for line in body {
        block.push_str(INDENT);
        block.push_str(line);
        block.push('\n');
    }
    block.push('}');
    block
}
