//! Token value shapes.
//!
//! Numbers are kept as `serde_json::Number` so that `40` stays `40` and
//! `0.5` stays `0.5` in every rendered form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A number or a literal string (`40`, `"bold"`, `"0.2s ease-in"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(number) => write!(f, "{}", number),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

/// Scalar-with-unit value: `{ value: number|string, unit: string|null }`
///
/// A bare scalar is also accepted on input and read as a unitless value,
/// which is what resolved placeholder text turns into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ValueUnitRepr")]
pub struct ValueUnit {
    pub value: Scalar,
    pub unit: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueUnitRepr {
    Full {
        value: Scalar,
        #[serde(default)]
        unit: Option<String>,
    },
    Bare(Scalar),
}

impl From<ValueUnitRepr> for ValueUnit {
    fn from(repr: ValueUnitRepr) -> Self {
        match repr {
            ValueUnitRepr::Full { value, unit } => Self { value, unit },
            ValueUnitRepr::Bare(value) => Self { value, unit: None },
        }
    }
}

impl ValueUnit {
    pub fn new(value: Scalar, unit: Option<&str>) -> Self {
        Self {
            value,
            unit: unit.map(str::to_string),
        }
    }

    /// Unitless text value
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Scalar::text(value),
            unit: None,
        }
    }

    /// `value` immediately followed by `unit` (a null unit renders as nothing)
    pub fn to_css(&self) -> String {
        format!("{}{}", self.value, self.unit.as_deref().unwrap_or(""))
    }
}

impl fmt::Display for ValueUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// HSL color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: Number,
    pub s: Number,
    pub l: Number,
}

impl Hsl {
    /// `hsl(h, s%, l%)`
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    /// `hsla(h, s%, l%, alpha)`
    pub fn to_css_with_alpha(&self, alpha: &str) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, alpha)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: Vec<String>,
    pub generic_font_family: String,
    pub font_size: ValueUnit,
    pub line_height: ValueUnit,
    pub font_weight: Scalar,
}

impl Typography {
    /// Quoted family names followed by the generic family: `'A', 'B', sans-serif`
    pub fn font_stack(&self) -> String {
        let mut stack: String = self
            .font_family
            .iter()
            .map(|family| format!("'{}', ", family))
            .collect();
        stack.push_str(&self.generic_font_family);
        stack
    }

    /// Single declaration string used by the flattened typed-source form
    pub fn to_declarations(&self) -> String {
        format!(
            "font-family: {}; font-size: {}; line-height: {}; font-weight: {};",
            self.font_stack(),
            self.font_size,
            self.line_height,
            self.font_weight
        )
    }
}

/// Focus style. Every field is optional and rendered only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Focus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer_events: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ValueUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<ValueUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ValueUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<ValueUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_sizing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl Focus {
    /// Present CSS declarations in output order, excluding `wrapper` and `after`
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();

        let mut push_text = |property: &'static str, value: &Option<String>| {
            if let Some(value) = value {
                declarations.push((property, value.clone()));
            }
        };
        push_text("content", &self.content);
        push_text("position", &self.position);
        push_text("pointer-events", &self.pointer_events);

        for (property, value) in [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ] {
            if let Some(value) = value {
                declarations.push((property, value.to_css()));
            }
        }

        for (property, value) in [
            ("border-radius", &self.border_radius),
            ("background-color", &self.background_color),
            ("border", &self.border),
            ("box-sizing", &self.box_sizing),
            ("box-shadow", &self.box_shadow),
        ] {
            if let Some(value) = value {
                declarations.push((property, value.clone()));
            }
        }

        if let Some(z_index) = &self.z_index {
            declarations.push(("z-index", z_index.to_string()));
        }
        if let Some(outline) = &self.outline {
            declarations.push(("outline", outline.clone()));
        }

        declarations
    }
}

/// Polymorphic token value
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Color(Hsl),
    Typography(Typography),
    Measure(ValueUnit),
    Focus(Focus),
    /// `{ value: string }` possibly containing placeholders
    DerivedString(String),
    /// Property map whose string entries may contain placeholders
    DerivedObject(Map<String, Value>),
    /// Value of a category this compiler does not model
    Raw(Value),
}

impl TokenValue {
    /// Shape discriminator, as written in a token's `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            TokenValue::Color(_) => "hsl",
            TokenValue::Typography(_) => "typography",
            TokenValue::Measure(_) => "value-unit",
            TokenValue::Focus(_) => "focus",
            TokenValue::DerivedString(_) => DERIVED_STRING,
            TokenValue::DerivedObject(_) => DERIVED_OBJECT,
            TokenValue::Raw(_) => "raw",
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            TokenValue::DerivedString(_) | TokenValue::DerivedObject(_)
        )
    }
}

pub const DERIVED_STRING: &str = "derived-string";
pub const DERIVED_OBJECT: &str = "derived-object";
