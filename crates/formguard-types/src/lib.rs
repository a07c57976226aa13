//! Stable DTOs and IDs used across the formguard workspace.
//!
//! This crate is intentionally boring:
//! - value kinds and the raw/typed value representations
//! - stable string codes for field errors
//! - the `ValidationResult` returned to callers

#![forbid(unsafe_code)]

pub mod ids;
pub mod result;
pub mod value;

pub use result::{ErrorKind, FieldError, ValidationResult};
pub use value::{coerce, RawValue, RawValues, TypedValue, TypedValues, ValueKind};
