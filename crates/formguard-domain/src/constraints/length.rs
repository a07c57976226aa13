use super::Violation;
use formguard_types::{ids, TypedValue};

// Lengths are counted in Unicode scalar values, not bytes, so multi-byte
// input is not penalized.

pub(super) fn check_min(limit: usize, value: &TypedValue) -> Option<Violation> {
    let TypedValue::Text(s) = value else {
        return None;
    };
    if s.chars().count() < limit {
        Some(Violation {
            code: ids::CODE_MIN_LENGTH,
            message: format!("must be at least {limit} characters"),
        })
    } else {
        None
    }
}

pub(super) fn check_max(limit: usize, value: &TypedValue) -> Option<Violation> {
    let TypedValue::Text(s) = value else {
        return None;
    };
    if s.chars().count() > limit {
        Some(Violation {
            code: ids::CODE_MAX_LENGTH,
            message: format!("must be at most {limit} characters"),
        })
    } else {
        None
    }
}
