//! Pure form validation (no IO).
//!
//! Input: a schema constructed elsewhere plus the caller's raw values.
//! Output: a typed record or a field-name → first-error mapping.

#![forbid(unsafe_code)]

mod engine;
pub mod constraints;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::validate;
