use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declared kind of a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Boolean,
    Number,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
        };
        f.write_str(s)
    }
}

/// A value as captured from a form control: text inputs produce `Text`,
/// checkboxes produce `Flag`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Text(String),
}

impl RawValue {
    pub fn text<S: Into<String>>(s: S) -> Self {
        RawValue::Text(s.into())
    }

    pub fn flag(b: bool) -> Self {
        RawValue::Flag(b)
    }
}

/// Raw field values keyed by field name. Owned and mutated by the calling UI
/// layer; `validate` only borrows it.
pub type RawValues = BTreeMap<String, RawValue>;

/// A value coerced to its declared kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TypedValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Validated field values keyed by field name.
pub type TypedValues = BTreeMap<String, TypedValue>;

/// Coerce a raw value to the declared kind.
///
/// - string: text passes through unmodified; a flag does not coerce
/// - boolean: truthiness (flag as-is, text non-empty)
/// - number: text parsed as a finite float; a flag does not coerce
///
/// Returns `None` when the raw value cannot represent the kind; the caller
/// turns that into a type error.
pub fn coerce(kind: ValueKind, raw: &RawValue) -> Option<TypedValue> {
    match (kind, raw) {
        (ValueKind::String, RawValue::Text(s)) => Some(TypedValue::Text(s.clone())),
        (ValueKind::String, RawValue::Flag(_)) => None,
        (ValueKind::Boolean, RawValue::Flag(b)) => Some(TypedValue::Flag(*b)),
        (ValueKind::Boolean, RawValue::Text(s)) => Some(TypedValue::Flag(!s.is_empty())),
        (ValueKind::Number, RawValue::Text(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(TypedValue::Number(n)),
            _ => None,
        },
        (ValueKind::Number, RawValue::Flag(_)) => None,
    }
}
