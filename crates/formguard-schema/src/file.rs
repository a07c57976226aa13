use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Schema string identifying the v1 schema-file format.
pub const SCHEMA_FILE_V1: &str = "formguard.schema.v1";

/// Schema file format v1.
///
/// This is a *user-facing* model: it is intentionally permissive so
/// forward-compat is easy. [`crate::resolve_schema`] turns it into a
/// [`crate::FormSchema`] and reports anything that does not resolve.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaFileV1 {
    /// Optional schema string for tooling (`formguard.schema.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Field declarations in validation order.
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldConfig {
    pub name: String,

    /// `string`, `boolean`, or `number`.
    pub kind: String,

    /// Defaults to true; optional fields must declare a default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultConfig>,

    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,
}

/// Declared default for an optional field: a text or checkbox value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DefaultConfig {
    Flag(bool),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConstraintConfig {
    /// Constraint kind: `min_length`, `max_length`, `pattern`, `email`,
    /// `min_value`, `max_value`, `one_of`.
    #[serde(rename = "type")]
    pub constraint_type: String,

    /// Numeric limit for length and range constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,

    /// Regex for `pattern`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Allowed values for `one_of`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    /// Override for the default error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Parse a schema file from TOML text.
pub fn parse_schema_toml(text: &str) -> anyhow::Result<SchemaFileV1> {
    let file: SchemaFileV1 = toml::from_str(text)?;
    Ok(file)
}
