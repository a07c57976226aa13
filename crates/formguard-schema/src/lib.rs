//! Schema model and construction for formguard.
//!
//! A [`FormSchema`] is an ordered set of field rules with unique names.
//! Malformed schemas are caller programming errors and fail fast at
//! construction time, never at validation time.

#![forbid(unsafe_code)]

pub mod file;
pub mod model;
mod resolve;

pub use file::{
    parse_schema_toml, ConstraintConfig, DefaultConfig, FieldConfig, SchemaFileV1, SCHEMA_FILE_V1,
};
pub use model::{Constraint, FieldRule, FormSchema, Presence, SchemaError};
pub use resolve::resolve_schema;
