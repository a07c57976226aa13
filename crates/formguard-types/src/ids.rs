//! Stable error codes for field errors.
//!
//! A `code` is a short snake_case discriminator, stable across releases so
//! callers can key message overrides or telemetry on it.

// Presence and coercion
pub const CODE_REQUIRED: &str = "required";
pub const CODE_TYPE_MISMATCH: &str = "type_mismatch";

// String constraints
pub const CODE_MIN_LENGTH: &str = "min_length";
pub const CODE_MAX_LENGTH: &str = "max_length";
pub const CODE_PATTERN_MISMATCH: &str = "pattern_mismatch";
pub const CODE_INVALID_EMAIL: &str = "invalid_email";
pub const CODE_NOT_IN_SET: &str = "not_in_set";

// Numeric constraints
pub const CODE_MIN_VALUE: &str = "min_value";
pub const CODE_MAX_VALUE: &str = "max_value";
