use crate::value::TypedValues;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error taxonomy for a field. Failures are reported, never thrown: every
/// variant is an ordinary value carried in the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "constraint", rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field was absent from the raw values.
    RequiredFieldMissing,
    /// The raw value could not be coerced to the declared kind.
    TypeCoercionFailed,
    /// A declared constraint rejected the coerced value. Carries the stable
    /// constraint kind (e.g. `min_length`).
    ConstraintViolated(String),
}

/// The first error recorded for a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    /// Stable snake_case code (see [`crate::ids`]).
    pub code: String,
    pub kind: ErrorKind,
    /// Human-readable message; may be a per-constraint override from the schema.
    pub message: String,
}

/// Outcome of validating raw values against a schema. Immutable once produced.
///
/// `Valid` carries exactly the schema's fields, coerced to their declared
/// kinds. `Invalid` carries only the fields that failed, each with the first
/// error its constraint chain produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid { data: TypedValues },
    Invalid { errors: BTreeMap<String, FieldError> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Typed values when validation succeeded.
    pub fn data(&self) -> Option<&TypedValues> {
        match self {
            ValidationResult::Valid { data } => Some(data),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// Per-field errors when validation failed.
    pub fn errors(&self) -> Option<&BTreeMap<String, FieldError>> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { errors } => Some(errors),
        }
    }

    /// Field name → message view of the errors, for UI layers that only
    /// display text next to each control.
    pub fn error_messages(&self) -> BTreeMap<&str, &str> {
        match self {
            ValidationResult::Valid { .. } => BTreeMap::new(),
            ValidationResult::Invalid { errors } => errors
                .iter()
                .map(|(field, e)| (field.as_str(), e.message.as_str()))
                .collect(),
        }
    }
}
