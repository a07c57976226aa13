use formguard_schema::{Constraint, FieldRule, FormSchema};
use formguard_types::{RawValue, RawValues};

/// The login form schema: email + password with message overrides,
/// rememberMe optional with a false default.
pub fn login_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldRule::string("email")
            .constraint(Constraint::email().with_message("please enter a valid email address")),
        FieldRule::string("password")
            .constraint(
                Constraint::min_length(6).with_message("password must be at least 6 characters"),
            )
            .constraint(
                Constraint::max_length(32).with_message("password must be at most 32 characters"),
            ),
        FieldRule::boolean("rememberMe").optional(RawValue::flag(false)),
    ])
    .expect("login schema is well-formed")
}

pub fn raw(pairs: &[(&str, RawValue)]) -> RawValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
