//! Schema-driven form validation with typed values and per-field errors.
//!
//! Declare a [`FormSchema`] (ordered field rules, each with a kind, presence,
//! and ordered constraints), collect raw input into [`RawValues`], and call
//! [`validate`]. The result is either a typed record covering exactly the
//! schema's fields, or a map from field name to the first error that field
//! produced. Validation never panics and never short-circuits across fields.
//!
//! ```
//! use formguard::{validate, Constraint, FieldRule, FormSchema, RawValue, RawValues};
//!
//! let schema = FormSchema::new(vec![
//!     FieldRule::string("email").constraint(Constraint::email()),
//!     FieldRule::string("password").constraint(Constraint::min_length(6)),
//!     FieldRule::boolean("rememberMe").optional(RawValue::flag(false)),
//! ])?;
//!
//! let mut raw = RawValues::new();
//! raw.insert("email".to_string(), RawValue::text("a@b.com"));
//! raw.insert("password".to_string(), RawValue::text("abcdef"));
//!
//! let result = validate(&schema, &raw);
//! assert!(result.is_valid());
//! # Ok::<(), formguard::SchemaError>(())
//! ```

#![forbid(unsafe_code)]

pub use formguard_domain::validate;
pub use formguard_schema::{
    parse_schema_toml, resolve_schema, Constraint, FieldRule, FormSchema, Presence, SchemaError,
    SchemaFileV1, SCHEMA_FILE_V1,
};
pub use formguard_types::{
    coerce, ids, ErrorKind, FieldError, RawValue, RawValues, TypedValue, TypedValues,
    ValidationResult, ValueKind,
};
