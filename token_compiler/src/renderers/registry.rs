//! Category registry
//!
//! Maps category discriminators to a format's category handler. Each
//! renderer builds its registry once and dispatches every category of a
//! catalog through it; categories without a handler are skipped with a
//! [`RenderWarning`].

use super::RenderWarning;
use crate::tokens::{Category, CategoryKind, TokenCatalog};
use std::collections::HashMap;

/// Category handlers for one output format
pub struct CategoryRegistry<H: Copy> {
    format: &'static str,
    handlers: HashMap<CategoryKind, H>,
}

impl<H: Copy> CategoryRegistry<H> {
    /// Create a new empty registry
    pub fn new(format: &'static str) -> Self {
        Self {
            format,
            handlers: HashMap::new(),
        }
    }

    /// Register a handler, returning the one it replaces
    pub fn register(&mut self, kind: CategoryKind, handler: H) -> Option<H> {
        self.handlers.insert(kind, handler)
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, kind: CategoryKind, handler: H) -> Self {
        self.register(kind, handler);
        self
    }

    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn get(&self, kind: &CategoryKind) -> Option<H> {
        self.handlers.get(kind).copied()
    }

    pub fn supports(&self, kind: &CategoryKind) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Pair every supported category with its handler, in catalog order
    pub fn dispatch<'c>(
        &self,
        catalog: &'c TokenCatalog,
    ) -> (Vec<(&'c Category, H)>, Vec<RenderWarning>) {
        let mut supported = Vec::with_capacity(catalog.categories.len());
        let mut warnings = Vec::new();

        for category in &catalog.categories {
            match self.get(&category.kind) {
                Some(handler) => supported.push((category, handler)),
                None => warnings.push(RenderWarning::unsupported_category(
                    self.format,
                    category.discriminator(),
                )),
            }
        }

        (supported, warnings)
    }
}
