//! Structural type declarations for the typed-source module.

use serde_json::{Map, Value};

/// Shape interfaces every generated module starts with
pub const STATIC_INTERFACES: &str = "\
export interface ValueUnit {
  value: number | string;
  unit: string | null;
}

export interface ColorToken {
  hsl: string;
  h: number;
  s: number;
  l: number;
}

export interface TypographyToken {
  fontFamily: string;
  fontSize: ValueUnit;
  lineHeight: ValueUnit;
  fontWeight: number | string;
}

export interface FocusToken {
  wrapper?: string;
  content?: string;
  position?: string;
  pointerEvents?: string;
  top?: ValueUnit;
  right?: ValueUnit;
  bottom?: ValueUnit;
  left?: ValueUnit;
  borderRadius?: string;
  backgroundColor?: string;
  border?: string;
  boxSizing?: string;
  boxShadow?: string;
  zIndex?: number | string;
  outline?: string;
  after?: string;
}
";

pub const VALUE_UNIT: &str = "ValueUnit";
pub const COLOR_TOKEN: &str = "ColorToken";
pub const TYPOGRAPHY_TOKEN: &str = "TypographyToken";
pub const FOCUS_TOKEN: &str = "FocusToken";
pub const STRING: &str = "string";

/// Object key, quoted when it is not a plain identifier
pub fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if is_identifier {
        name.to_string()
    } else {
        Value::String(name.to_string()).to_string()
    }
}

/// Object members and their declared types, kept in lockstep
///
/// Inserting an existing key replaces its value and type in place, so the
/// emitted object and interface always list the same keys in the same order.
#[derive(Debug, Clone, Default)]
pub struct TypedObject {
    values: Map<String, Value>,
    types: Vec<(String, String)>,
}

impl TypedObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: Value, type_name: &str) {
        match self.types.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = type_name.to_string(),
            None => self.types.push((key.to_string(), type_name.to_string())),
        }
        self.values.insert(key.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Compact JSON text of the values
    pub fn to_json_text(&self) -> String {
        Value::Object(self.values.clone()).to_string()
    }

    /// `export interface <name> { key: Type; ... }`
    pub fn interface(&self, name: &str) -> String {
        interface_block(name, self.types.iter().map(|(k, t)| (k.as_str(), t.as_str())))
    }
}

pub fn interface_block<'a>(name: &str, fields: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut block = format!("export interface {} {{\n", name);
    for (key, type_name) in fields {
        block.push_str(&format!("  {}: {};\n", property_key(key), type_name));
    }
    block.push_str("}\n");
    block
}

/// Per-category interface names: (raw form, string form)
pub fn category_interface_names(discriminator: &str) -> Option<(&'static str, &'static str)> {
    Some(match discriminator {
        "colors" => ("RawColorDesignTokens", "ColorDesignTokens"),
        "typography" => ("RawTypographyDesignTokens", "TypographyDesignTokens"),
        "spacing" => ("RawSpacingDesignTokens", "SpacingDesignTokens"),
        "radiuses" => ("RawRadiusDesignTokens", "RadiusDesignTokens"),
        "transitions" => ("RawTransitionDesignTokens", "TransitionDesignTokens"),
        "gradients" => ("RawGradientDesignTokens", "GradientDesignTokens"),
        "shadows" => ("RawShadowDesignTokens", "ShadowDesignTokens"),
        "focuses" => ("RawFocusDesignTokens", "FocusDesignTokens"),
        "breakpoints" => ("RawBreakpointDesignTokens", "BreakpointDesignTokens"),
        _ => return None,
    })
}
