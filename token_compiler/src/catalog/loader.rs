//! Token Catalog Loader
//!
//! Groups a document's flat token map into ordered categories. Category order
//! follows the descriptor, token order follows the token map, and every token
//! lands in exactly the category its `category` field names.

use super::document::{TokenDefinition, TokenDocument};
use super::error::{CatalogError, CatalogResult};
use crate::config::constants::compile_time::catalog::{
    MAX_CATEGORIES_PER_CATALOG, MAX_DOCUMENT_SIZE, MAX_TOKENS_PER_CATALOG,
};
use crate::logging::codes;
use crate::reference_resolution::placeholder::find_placeholders;
use crate::reference_resolution::ResolutionResult;
use crate::tokens::{
    Category, CategoryKind, Focus, Hsl, Token, TokenCatalog, TokenValue, Typography, ValueShape,
    ValueUnit, DERIVED_OBJECT, DERIVED_STRING,
};
use crate::{log_debug, log_error, log_success};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Which role a document plays in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// Literal tokens only; the lookup table for references
    Basic,
    /// May contain `derived-string` / `derived-object` tokens
    Derived,
}

impl DocumentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentRole::Basic => "basic",
            DocumentRole::Derived => "derived",
        }
    }
}

/// Read, size-check and load a token document from disk
pub fn load_file(path: &Path, role: DocumentRole) -> CatalogResult<TokenCatalog> {
    let path_str = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|e| {
        let error = CatalogError::document_not_found(&path_str, &e.to_string());
        log_error!(error.error_code(), "Cannot access token document",
            "path" => &path_str,
            "io_error" => e
        );
        error
    })?;

    if metadata.len() > MAX_DOCUMENT_SIZE {
        let error = CatalogError::DocumentTooLarge {
            path: path_str.clone(),
            size: metadata.len(),
            max_size: MAX_DOCUMENT_SIZE,
        };
        log_error!(error.error_code(), "Token document exceeds size limit",
            "path" => &path_str,
            "size_bytes" => metadata.len(),
            "max_size_bytes" => MAX_DOCUMENT_SIZE
        );
        return Err(error);
    }

    let source = fs::read_to_string(path).map_err(|e| {
        let error = CatalogError::document_not_found(&path_str, &e.to_string());
        log_error!(error.error_code(), "Cannot read token document",
            "path" => &path_str,
            "io_error" => e
        );
        error
    })?;

    load_str(&source, &path_str, role)
}

/// Parse and load a token document held in memory
pub fn load_str(source: &str, source_name: &str, role: DocumentRole) -> CatalogResult<TokenCatalog> {
    let document = TokenDocument::parse(source, source_name).map_err(|error| {
        log_error!(error.error_code(), "Token document is not valid JSON",
            "source" => source_name,
            "error" => &error
        );
        error
    })?;
    build_catalog(&document, source_name, role)
}

/// Group a parsed document into categories
pub fn build_catalog(
    document: &TokenDocument,
    source_name: &str,
    role: DocumentRole,
) -> CatalogResult<TokenCatalog> {
    let descriptors = document.descriptors(source_name)?;
    let definitions = document.definitions(source_name)?;

    check_limit(source_name, "categories", descriptors.len(), MAX_CATEGORIES_PER_CATALOG)?;
    check_limit(source_name, "tokens", definitions.len(), MAX_TOKENS_PER_CATALOG)?;

    // Every token must point at a declared category
    let declared: HashSet<&str> = descriptors.iter().map(|(name, _)| *name).collect();
    for (token_name, definition) in &definitions {
        if !declared.contains(definition.category.as_str()) {
            let error = CatalogError::undeclared_category(token_name, &definition.category);
            log_error!(error.error_code(), "Token refers to an undeclared category",
                "source" => source_name,
                "token" => token_name,
                "category" => &definition.category
            );
            return Err(error);
        }
    }

    let mut categories = Vec::with_capacity(descriptors.len());
    for (category_name, descriptor) in &descriptors {
        let kind = CategoryKind::from_discriminator(category_name);
        let mut category = Category::new(kind, &descriptor.token_prefix);

        for (token_name, definition) in definitions
            .iter()
            .filter(|(_, definition)| definition.category == *category_name)
        {
            let token = build_token(token_name, &category, definition, source_name, role)?;
            category.tokens.push(token);
        }

        log_debug!("Category grouped",
            "source" => source_name,
            "category" => category_name,
            "tokens" => category.tokens.len()
        );
        categories.push(category);
    }

    let catalog = TokenCatalog::new(categories);

    log_success!(codes::success::CATALOG_LOADED, "Token catalog loaded",
        "source" => source_name,
        "role" => role.as_str(),
        "categories" => catalog.categories.len(),
        "tokens" => catalog.token_count()
    );

    Ok(catalog)
}

fn check_limit(source_name: &str, what: &'static str, count: usize, max: usize) -> CatalogResult<()> {
    if count > max {
        let error = CatalogError::TooManyEntries {
            source_name: source_name.to_string(),
            what,
            count,
            max,
        };
        log_error!(error.error_code(), "Token document exceeds entry limit",
            "source" => source_name,
            "entries" => what,
            "count" => count,
            "max" => max
        );
        return Err(error);
    }
    Ok(())
}

fn build_token(
    name: &str,
    category: &Category,
    definition: &TokenDefinition,
    source_name: &str,
    role: DocumentRole,
) -> CatalogResult<Token> {
    let value = parse_value(name, &category.kind, definition).map_err(|error| {
        log_error!(error.error_code(), "Token value does not fit its category",
            "source" => source_name,
            "token" => name,
            "category" => category.discriminator(),
            "error" => &error
        );
        error
    })?;

    if role == DocumentRole::Basic && value.is_derived() {
        let error =
            CatalogError::derived_token_in_basic_catalog(source_name, name, value.type_name());
        log_error!(error.error_code(), "Derived token found in basic catalog",
            "source" => source_name,
            "token" => name
        );
        return Err(error);
    }

    if role == DocumentRole::Basic {
        let found = find_placeholder(&definition.value)
            .map_err(|e| CatalogError::invalid_document(source_name, &e.to_string()))?;
        if let Some(placeholder) = found {
            let error = CatalogError::placeholder_in_basic_catalog(source_name, name, &placeholder);
            log_error!(error.error_code(), "Placeholder found in basic catalog",
                "source" => source_name,
                "token" => name,
                "placeholder" => &placeholder
            );
            return Err(error);
        }
    }

    let token = Token::new(name, category.discriminator(), &category.prefix, value);
    Ok(match &definition.token_type {
        Some(token_type) => token.with_type(token_type),
        None => token,
    })
}

/// First placeholder found in any string leaf of `value`
fn find_placeholder(value: &Value) -> ResolutionResult<Option<String>> {
    let leaves: Box<dyn Iterator<Item = &Value>> = match value {
        Value::String(text) => {
            return Ok(find_placeholders(text)?
                .into_iter()
                .next()
                .map(|range| text[range].to_string()))
        }
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(fields) => Box::new(fields.values()),
        _ => return Ok(None),
    };
    for leaf in leaves {
        if let Some(found) = find_placeholder(leaf)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Choose the value shape from the token type (derived shapes) or the category
pub fn parse_value(
    name: &str,
    kind: &CategoryKind,
    definition: &TokenDefinition,
) -> CatalogResult<TokenValue> {
    let invalid = |message: String| CatalogError::invalid_token_value(name, kind.as_str(), &message);

    match definition.token_type.as_deref() {
        Some(DERIVED_STRING) => {
            return match definition.value.get("value") {
                Some(Value::String(text)) => Ok(TokenValue::DerivedString(text.clone())),
                _ => Err(invalid(
                    "derived-string value must be an object with a string 'value'".to_string(),
                )),
            };
        }
        Some(DERIVED_OBJECT) => {
            return match &definition.value {
                Value::Object(map) => {
                    let mut map = map.clone();
                    if let Some(wrapper) = &definition.wrapper {
                        map.entry("wrapper")
                            .or_insert_with(|| Value::String(wrapper.clone()));
                    }
                    Ok(TokenValue::DerivedObject(map))
                }
                _ => Err(invalid("derived-object value must be an object".to_string())),
            };
        }
        _ => {}
    }

    match kind.natural_shape() {
        Some(shape) => {
            let mut value = shape_value(shape, &definition.value).map_err(invalid)?;
            if let TokenValue::Focus(focus) = &mut value {
                if focus.wrapper.is_none() {
                    focus.wrapper = definition.wrapper.clone();
                }
            }
            Ok(value)
        }
        None => Ok(TokenValue::Raw(definition.value.clone())),
    }
}

/// Read a JSON value as the given shape
pub fn shape_value(shape: ValueShape, value: &Value) -> Result<TokenValue, String> {
    Ok(match shape {
        ValueShape::Color => TokenValue::Color(read::<Hsl>(value)?),
        ValueShape::Typography => TokenValue::Typography(read::<Typography>(value)?),
        ValueShape::Measure => TokenValue::Measure(read::<ValueUnit>(value)?),
        ValueShape::Focus => TokenValue::Focus(read::<Focus>(value)?),
    })
}

fn read<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    serde_json::from_value(value.clone()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    const BASIC: &str = r#"{
        "categories": {
            "colors": {"tokenPrefix": "c"},
            "spacing": {"tokenPrefix": "s"},
            "focuses": {"tokenPrefix": "f"}
        },
        "tokens": {
            "xxl": {"category": "spacing", "type": "px", "value": {"value": 40, "unit": "px"}},
            "highlightBase": {"category": "colors", "type": "hsl", "value": {"h": 212, "s": 63, "l": 45}},
            "xs": {"category": "spacing", "value": {"value": 4, "unit": "px"}},
            "boxShadowFocus": {
                "category": "focuses",
                "wrapper": "&:focus",
                "value": {"outline": "none", "boxShadow": "0 0 3px 0 hsl(196, 77%, 44%)"}
            }
        }
    }"#;

    #[test]
    fn test_groups_tokens_in_declaration_order() {
        let catalog = load_str(BASIC, "tokens.json", DocumentRole::Basic).unwrap();

        let discriminators: Vec<&str> = catalog
            .categories
            .iter()
            .map(|c| c.discriminator())
            .collect();
        assert_eq!(discriminators, vec!["colors", "spacing", "focuses"]);

        let spacing = catalog.category("spacing").unwrap();
        let names: Vec<&str> = spacing.tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["xxl", "xs"]);
        assert!(spacing.tokens.iter().all(|t| t.prefix == "s" && t.category == "spacing"));
        assert_eq!(spacing.tokens[0].token_type, "px");
        assert_eq!(spacing.tokens[1].token_type, "value-unit");
        assert_eq!(catalog.token_count(), 4);
    }

    #[test]
    fn test_focus_wrapper_is_folded_into_value() {
        let catalog = load_str(BASIC, "tokens.json", DocumentRole::Basic).unwrap();
        let token = catalog.category("focuses").unwrap().find("boxShadowFocus").unwrap();

        assert_matches!(&token.value, TokenValue::Focus(focus) if focus.wrapper.as_deref() == Some("&:focus"));
    }

    #[test]
    fn test_undeclared_category_is_fatal() {
        let source = r#"{
            "categories": {"colors": {"tokenPrefix": "c"}},
            "tokens": {"xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}}}
        }"#;

        let err = load_str(source, "tokens.json", DocumentRole::Basic).unwrap_err();
        assert_matches!(
            err,
            CatalogError::UndeclaredCategory { ref token, ref category }
                if token == "xxl" && category == "spacing"
        );
        assert!(err.requires_halt());
    }

    #[test]
    fn test_value_shape_mismatch_names_token() {
        let source = r#"{
            "categories": {"colors": {"tokenPrefix": "c"}},
            "tokens": {"brand": {"category": "colors", "value": {"value": 40, "unit": "px"}}}
        }"#;

        assert_matches!(
            load_str(source, "tokens.json", DocumentRole::Basic),
            Err(CatalogError::InvalidTokenValue { ref token, .. }) if token == "brand"
        );
    }

    #[test]
    fn test_basic_catalog_rejects_derived_tokens() {
        let source = r#"{
            "categories": {"shadows": {"tokenPrefix": "sh"}},
            "tokens": {"wide": {"category": "shadows", "type": "derived-string", "value": {"value": "0 1px {colors.highlightBase}"}}}
        }"#;

        assert_matches!(
            load_str(source, "tokens.json", DocumentRole::Basic),
            Err(CatalogError::DerivedTokenInBasicCatalog { .. })
        );

        let derived = load_str(source, "derived.json", DocumentRole::Derived).unwrap();
        let token = &derived.categories[0].tokens[0];
        assert_eq!(token.token_type, "derived-string");
        assert_eq!(
            token.value,
            TokenValue::DerivedString("0 1px {colors.highlightBase}".to_string())
        );
    }

    #[test]
    fn test_basic_catalog_rejects_untyped_placeholder() {
        let source = r#"{
            "categories": {"shadows": {"tokenPrefix": "sh"}},
            "tokens": {"glow": {"category": "shadows", "value": {"value": "0 0 {colors.a}", "unit": null}}}
        }"#;

        assert_matches!(
            load_str(source, "tokens.json", DocumentRole::Basic),
            Err(CatalogError::PlaceholderInBasicCatalog { ref token, ref placeholder, .. })
                if token == "glow" && placeholder == "{colors.a}"
        );
    }

    #[test]
    fn test_category_limit() {
        let categories: Vec<String> = (0..=MAX_CATEGORIES_PER_CATALOG)
            .map(|i| format!(r#""c{}": {{"tokenPrefix": "p{}"}}"#, i, i))
            .collect();
        let source = format!(r#"{{"categories": {{{}}}, "tokens": {{}}}}"#, categories.join(","));

        assert_matches!(
            load_str(&source, "tokens.json", DocumentRole::Basic),
            Err(CatalogError::TooManyEntries { what: "categories", count, max, .. })
                if count == MAX_CATEGORIES_PER_CATALOG + 1 && max == MAX_CATEGORIES_PER_CATALOG
        );
    }

    #[test]
    fn test_token_limit() {
        let tokens: Vec<String> = (0..=MAX_TOKENS_PER_CATALOG)
            .map(|i| format!(r#""t{}": {{"category": "spacing", "value": {}}}"#, i, i))
            .collect();
        let source = format!(
            r#"{{"categories": {{"spacing": {{"tokenPrefix": "s"}}}}, "tokens": {{{}}}}}"#,
            tokens.join(",")
        );

        assert_matches!(
            load_str(&source, "tokens.json", DocumentRole::Basic),
            Err(CatalogError::TooManyEntries { what: "tokens", count, .. })
                if count == MAX_TOKENS_PER_CATALOG + 1
        );
    }

    #[test]
    fn test_oversized_document_is_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_DOCUMENT_SIZE + 1).unwrap();

        assert_matches!(
            load_file(&path, DocumentRole::Basic),
            Err(CatalogError::DocumentTooLarge { size, max_size, .. })
                if size == MAX_DOCUMENT_SIZE + 1 && max_size == MAX_DOCUMENT_SIZE
        );
    }

    #[test]
    fn test_unrecognized_category_keeps_raw_value() {
        let source = r#"{
            "categories": {"motion": {"tokenPrefix": "m"}},
            "tokens": {"fast": {"category": "motion", "value": {"duration": "120ms"}}}
        }"#;

        let catalog = load_str(source, "tokens.json", DocumentRole::Basic).unwrap();
        let token = &catalog.categories[0].tokens[0];
        assert_matches!(&token.value, TokenValue::Raw(_));
    }

    #[test]
    fn test_load_file_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(BASIC.as_bytes()).unwrap();

        let catalog = load_file(&path, DocumentRole::Basic).unwrap();
        assert_eq!(catalog.categories.len(), 3);

        assert_matches!(
            load_file(&dir.path().join("absent.json"), DocumentRole::Basic),
            Err(CatalogError::DocumentNotFound { .. })
        );
    }
}
