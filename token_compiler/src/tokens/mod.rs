//! Design token data model
//!
//! A [`TokenCatalog`] is an ordered list of [`Category`] records, each
//! holding the [`Token`]s whose `category` field names it. Token values are
//! one of the [`TokenValue`] shapes; derived shapes only exist between
//! loading and reference resolution.

pub mod category;
pub mod value;

pub use category::{Category, CategoryKind, Token, TokenCatalog, ValueShape};
pub use value::{
    Focus, Hsl, Scalar, TokenValue, Typography, ValueUnit, DERIVED_OBJECT, DERIVED_STRING,
};
