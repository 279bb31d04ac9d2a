//! Raw token document shape:
//! `{ categories: { <name>: { tokenPrefix } }, tokens: { <name>: { category, type?, value, wrapper? } } }`
//!
//! Both maps keep declaration order (`serde_json` is built with
//! `preserve_order`), which drives category and token order downstream.

use super::error::{CatalogError, CatalogResult};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct TokenDocument {
    pub categories: Map<String, Value>,
    #[serde(default)]
    pub tokens: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub token_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenDefinition {
    pub category: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    pub value: Value,
    /// Selector wrapping a focus block
    #[serde(default)]
    pub wrapper: Option<String>,
}

impl TokenDocument {
    pub fn parse(source: &str, source_name: &str) -> CatalogResult<Self> {
        serde_json::from_str(source)
            .map_err(|e| CatalogError::invalid_document(source_name, &e.to_string()))
    }

    /// Category descriptors in declaration order
    pub fn descriptors(&self, source_name: &str) -> CatalogResult<Vec<(&str, CategoryDescriptor)>> {
        self.categories
            .iter()
            .map(|(name, raw)| {
                CategoryDescriptor::deserialize(raw)
                    .map(|descriptor| (name.as_str(), descriptor))
                    .map_err(|e| {
                        CatalogError::invalid_document(
                            source_name,
                            &format!("category '{}': {}", name, e),
                        )
                    })
            })
            .collect()
    }

    /// Token definitions in declaration order
    pub fn definitions(&self, source_name: &str) -> CatalogResult<Vec<(&str, TokenDefinition)>> {
        self.tokens
            .iter()
            .map(|(name, raw)| {
                TokenDefinition::deserialize(raw)
                    .map(|definition| (name.as_str(), definition))
                    .map_err(|e| {
                        CatalogError::invalid_document(
                            source_name,
                            &format!("token '{}': {}", name, e),
                        )
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_declaration_order_is_preserved() {
        let document = TokenDocument::parse(
            r#"{
                "categories": {"spacing": {"tokenPrefix": "s"}, "colors": {"tokenPrefix": "c"}},
                "tokens": {
                    "xxl": {"category": "spacing", "value": {"value": 40, "unit": "px"}},
                    "a": {"category": "spacing", "value": {"value": 2, "unit": "px"}}
                }
            }"#,
            "tokens.json",
        )
        .unwrap();

        let descriptors = document.descriptors("tokens.json").unwrap();
        let names: Vec<&str> = descriptors.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["spacing", "colors"]);

        let definitions = document.definitions("tokens.json").unwrap();
        assert_eq!(definitions[0].0, "xxl");
        assert_eq!(definitions[1].0, "a");
        assert_eq!(definitions[0].1.token_type, None);
    }

    #[test]
    fn test_missing_prefix_names_category() {
        let document = TokenDocument::parse(
            r#"{"categories": {"colors": {}}, "tokens": {}}"#,
            "tokens.json",
        )
        .unwrap();

        let err = document.descriptors("tokens.json").unwrap_err();
        assert_matches!(err, CatalogError::InvalidDocument { ref message, .. } if message.contains("colors"));
    }

    #[test]
    fn test_not_an_object() {
        assert_matches!(
            TokenDocument::parse("[1, 2]", "tokens.json"),
            Err(CatalogError::InvalidDocument { .. })
        );
    }
}
