//! Token Catalog Loader
//!
//! Turns a token document into a [`TokenCatalog`](crate::tokens::TokenCatalog):
//! categories in descriptor order, each holding its tokens in document order
//! with the category prefix attached.

pub mod document;
pub mod error;
pub mod loader;

pub use document::{CategoryDescriptor, TokenDefinition, TokenDocument};
pub use error::{CatalogError, CatalogResult};
pub use loader::{build_catalog, load_file, load_str, shape_value, DocumentRole};
