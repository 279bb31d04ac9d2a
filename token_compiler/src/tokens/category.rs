//! Category discriminators and the catalog container.

use super::value::TokenValue;
use std::fmt;

/// Recognized category discriminators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Colors,
    Typography,
    Spacing,
    Radiuses,
    Transitions,
    Gradients,
    Shadows,
    Focuses,
    Breakpoints,
    /// Declared in a document but not modeled; renderers skip it with a warning
    Other(String),
}

/// Value shape a category's basic tokens must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Color,
    Typography,
    Measure,
    Focus,
}

impl CategoryKind {
    pub const RECOGNIZED: [CategoryKind; 9] = [
        CategoryKind::Colors,
        CategoryKind::Typography,
        CategoryKind::Spacing,
        CategoryKind::Radiuses,
        CategoryKind::Transitions,
        CategoryKind::Gradients,
        CategoryKind::Shadows,
        CategoryKind::Focuses,
        CategoryKind::Breakpoints,
    ];

    pub fn from_discriminator(discriminator: &str) -> Self {
        match discriminator {
            "colors" => CategoryKind::Colors,
            "typography" => CategoryKind::Typography,
            "spacing" => CategoryKind::Spacing,
            "radiuses" => CategoryKind::Radiuses,
            "transitions" => CategoryKind::Transitions,
            "gradients" => CategoryKind::Gradients,
            "shadows" => CategoryKind::Shadows,
            "focuses" => CategoryKind::Focuses,
            "breakpoints" => CategoryKind::Breakpoints,
            other => CategoryKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryKind::Colors => "colors",
            CategoryKind::Typography => "typography",
            CategoryKind::Spacing => "spacing",
            CategoryKind::Radiuses => "radiuses",
            CategoryKind::Transitions => "transitions",
            CategoryKind::Gradients => "gradients",
            CategoryKind::Shadows => "shadows",
            CategoryKind::Focuses => "focuses",
            CategoryKind::Breakpoints => "breakpoints",
            CategoryKind::Other(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, CategoryKind::Other(_))
    }

    pub fn natural_shape(&self) -> Option<ValueShape> {
        match self {
            CategoryKind::Colors => Some(ValueShape::Color),
            CategoryKind::Typography => Some(ValueShape::Typography),
            CategoryKind::Focuses => Some(ValueShape::Focus),
            CategoryKind::Spacing
            | CategoryKind::Radiuses
            | CategoryKind::Transitions
            | CategoryKind::Gradients
            | CategoryKind::Shadows
            | CategoryKind::Breakpoints => Some(ValueShape::Measure),
            CategoryKind::Other(_) => None,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Key of the token in its source document, unique within its category
    pub name: String,
    /// Discriminator of the owning category
    pub category: String,
    pub token_type: String,
    /// Prefix of the owning category in the token's source document
    pub prefix: String,
    pub value: TokenValue,
}

impl Token {
    pub fn new(name: &str, category: &str, prefix: &str, value: TokenValue) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            token_type: value.type_name().to_string(),
            prefix: prefix.to_string(),
            value,
        }
    }

    pub fn with_type(mut self, token_type: &str) -> Self {
        self.token_type = token_type.to_string();
        self
    }

    pub fn is_derived(&self) -> bool {
        self.value.is_derived()
    }
}

/// Ordered group of tokens sharing a discriminator
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub kind: CategoryKind,
    pub prefix: String,
    pub tokens: Vec<Token>,
}

impl Category {
    pub fn new(kind: CategoryKind, prefix: &str) -> Self {
        Self {
            kind,
            prefix: prefix.to_string(),
            tokens: Vec::new(),
        }
    }

    pub fn discriminator(&self) -> &str {
        self.kind.as_str()
    }

    pub fn find(&self, name: &str) -> Option<&Token> {
        self.tokens.iter().find(|token| token.name == name)
    }
}

/// Ordered list of categories produced by the loader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCatalog {
    pub categories: Vec<Category>,
}

impl TokenCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, discriminator: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.discriminator() == discriminator)
    }

    pub fn token_count(&self) -> usize {
        self.categories.iter().map(|c| c.tokens.len()).sum()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.categories.iter().flat_map(|c| c.tokens.iter())
    }

    pub fn derived_token_count(&self) -> usize {
        self.tokens().filter(|token| token.is_derived()).count()
    }

    /// Append `other` after `self`.
    ///
    /// Categories of `other` sharing a discriminator with one of `self` are
    /// appended to it (tokens keep their own prefix); the rest follow in
    /// declaration order.
    pub fn merge(mut self, other: TokenCatalog) -> TokenCatalog {
        for category in other.categories {
            match self
                .categories
                .iter_mut()
                .find(|existing| existing.kind == category.kind)
            {
                Some(existing) => existing.tokens.extend(category.tokens),
                None => self.categories.push(category),
            }
        }
        self
    }
}
