//! Property-based tests for the validation engine.
//!
//! These tests use proptest to verify invariants around:
//! - Success on inputs that satisfy every constraint
//! - Per-field error reporting and field independence
//! - Determinism and idempotence of `validate`

use crate::engine::validate;
use formguard_schema::{Constraint, FieldRule, FormSchema};
use formguard_types::{ids, RawValue, RawValues, TypedValue};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for distinct field names (snake_case identifiers).
fn arb_field_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,15}", 1..8).prop_map(|set| {
        let set: BTreeSet<String> = set;
        set.into_iter().collect()
    })
}

/// Strategy for text that satisfies a min_length(1)/max_length(64) chain.
fn arb_valid_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{1,64}")
        .unwrap()
        .prop_filter("text must not be empty", |s| !s.is_empty())
}

/// A schema of required string fields, each with min_length(1) and
/// max_length(64). The empty string violates it; nothing else does.
fn string_schema(names: &[String]) -> FormSchema {
    let rules = names
        .iter()
        .map(|name| {
            FieldRule::string(name)
                .constraint(Constraint::min_length(1))
                .constraint(Constraint::max_length(64))
        })
        .collect();
    FormSchema::new(rules).expect("generated names are distinct and non-empty")
}

fn raw_for(names: &[String], values: &[String]) -> RawValues {
    names
        .iter()
        .zip(values)
        .map(|(n, v)| (n.clone(), RawValue::Text(v.clone())))
        .collect()
}

proptest! {
    /// Inputs satisfying every constraint always produce the success variant,
    /// with every schema field present and nothing else.
    #[test]
    fn satisfying_inputs_validate(
        names in arb_field_names(),
        seed_values in prop::collection::vec(arb_valid_text(), 8),
    ) {
        let schema = string_schema(&names);
        let values: Vec<String> = seed_values.into_iter().take(names.len())
            .chain(std::iter::repeat("x".to_string()))
            .take(names.len())
            .collect();
        let raw = raw_for(&names, &values);

        let result = validate(&schema, &raw);
        prop_assert!(result.is_valid(), "expected success, got {:?}", result);

        let data = result.data().unwrap();
        let data_keys: BTreeSet<&str> = data.keys().map(String::as_str).collect();
        let schema_keys: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(data_keys, schema_keys);
    }

    /// Dropping any one required field yields failure naming exactly it.
    #[test]
    fn missing_required_field_is_reported(
        names in arb_field_names(),
        drop_index in any::<prop::sample::Index>(),
    ) {
        let schema = string_schema(&names);
        let values: Vec<String> = names.iter().map(|_| "ok".to_string()).collect();
        let mut raw = raw_for(&names, &values);

        let dropped = names[drop_index.index(names.len())].clone();
        raw.remove(&dropped);

        let result = validate(&schema, &raw);
        let errors = result.errors().expect("must fail");
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[&dropped].code.as_str(), ids::CODE_REQUIRED);
    }

    /// Corrupting exactly one field of a valid input produces a failure whose
    /// errors name exactly that field.
    #[test]
    fn field_independence(
        names in arb_field_names(),
        corrupt_index in any::<prop::sample::Index>(),
    ) {
        let schema = string_schema(&names);
        let values: Vec<String> = names.iter().map(|_| "ok".to_string()).collect();
        let mut raw = raw_for(&names, &values);

        let corrupted = names[corrupt_index.index(names.len())].clone();
        raw.insert(corrupted.clone(), RawValue::Text(String::new()));

        let result = validate(&schema, &raw);
        let errors = result.errors().expect("must fail");
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors.contains_key(&corrupted));
        prop_assert_eq!(errors[&corrupted].code.as_str(), ids::CODE_MIN_LENGTH);
    }

    /// Calling validate twice with the same inputs yields structurally equal
    /// results.
    #[test]
    fn validate_is_idempotent(
        names in arb_field_names(),
        values in prop::collection::vec("[a-zA-Z0-9]{0,80}", 8),
    ) {
        let schema = string_schema(&names);
        let values: Vec<String> = values.into_iter()
            .chain(std::iter::repeat(String::new()))
            .take(names.len())
            .collect();
        let raw = raw_for(&names, &values);

        prop_assert_eq!(validate(&schema, &raw), validate(&schema, &raw));
    }

    /// Error keys are always a subset of the schema's field names, and raw
    /// entries outside the schema never leak into data or errors.
    #[test]
    fn result_names_only_schema_fields(
        names in arb_field_names(),
        values in prop::collection::vec("[a-zA-Z0-9]{0,80}", 8),
        extra_key in "[A-Z]{4,8}",
        extra_value in "[a-z]{0,8}",
    ) {
        let schema = string_schema(&names);
        let values: Vec<String> = values.into_iter()
            .chain(std::iter::repeat("x".to_string()))
            .take(names.len())
            .collect();
        let mut raw = raw_for(&names, &values);
        // Uppercase key cannot collide with the generated lowercase names.
        raw.insert(extra_key.clone(), RawValue::Text(extra_value));

        let schema_keys: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        match validate(&schema, &raw) {
            formguard_types::ValidationResult::Valid { data } => {
                let keys: BTreeSet<&str> = data.keys().map(String::as_str).collect();
                prop_assert_eq!(keys, schema_keys);
            }
            formguard_types::ValidationResult::Invalid { errors } => {
                for key in errors.keys() {
                    prop_assert!(schema_keys.contains(key.as_str()));
                }
                prop_assert!(!errors.contains_key(&extra_key));
            }
        }
    }

    /// Numeric fields coerce any parseable finite input and respect range
    /// constraints afterwards.
    #[test]
    fn numbers_round_trip_through_coercion(n in -1_000_000i64..1_000_000i64) {
        let schema = FormSchema::new(vec![
            FieldRule::number("n")
                .constraint(Constraint::min_value(-1_000_000.0))
                .constraint(Constraint::max_value(1_000_000.0)),
        ])
        .unwrap();

        let mut raw = RawValues::new();
        raw.insert("n".to_string(), RawValue::Text(n.to_string()));

        let result = validate(&schema, &raw);
        prop_assert!(result.is_valid());
        prop_assert_eq!(&result.data().unwrap()["n"], &TypedValue::Number(n as f64));
    }
}
