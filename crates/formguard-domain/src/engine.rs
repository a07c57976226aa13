use crate::constraints;
use formguard_schema::{FieldRule, FormSchema, Presence};
use formguard_types::{
    coerce, ids, ErrorKind, FieldError, RawValue, RawValues, TypedValue, TypedValues,
    ValidationResult,
};
use std::collections::BTreeMap;

/// Validate raw values against a schema.
///
/// Fields are evaluated independently, in schema order. Within a field the
/// first failing step wins: presence, then coercion, then each constraint in
/// declaration order. Raw entries the schema does not name are ignored.
pub fn validate(schema: &FormSchema, raw: &RawValues) -> ValidationResult {
    let mut data = TypedValues::new();
    let mut errors: BTreeMap<String, FieldError> = BTreeMap::new();

    for rule in schema.rules() {
        match evaluate_field(rule, raw.get(rule.name())) {
            Ok(value) => {
                data.insert(rule.name().to_string(), value);
            }
            Err(error) => {
                errors.insert(rule.name().to_string(), error);
            }
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid { data }
    } else {
        ValidationResult::Invalid { errors }
    }
}

fn evaluate_field(rule: &FieldRule, raw: Option<&RawValue>) -> Result<TypedValue, FieldError> {
    let raw = match (raw, rule.presence()) {
        (Some(value), _) => value,
        (None, Presence::Optional { default }) => default,
        (None, Presence::Required) => {
            return Err(FieldError {
                code: ids::CODE_REQUIRED.to_string(),
                kind: ErrorKind::RequiredFieldMissing,
                message: "is required".to_string(),
            });
        }
    };

    let typed = coerce(rule.kind(), raw).ok_or_else(|| FieldError {
        code: ids::CODE_TYPE_MISMATCH.to_string(),
        kind: ErrorKind::TypeCoercionFailed,
        message: format!("must be a {}", rule.kind()),
    })?;

    for constraint in rule.constraints() {
        if let Some(violation) = constraints::check(constraint, &typed) {
            return Err(FieldError {
                code: violation.code.to_string(),
                kind: ErrorKind::ConstraintViolated(constraint.kind().to_string()),
                message: violation.message,
            });
        }
    }

    Ok(typed)
}
