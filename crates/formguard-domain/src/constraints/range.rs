use super::Violation;
use formguard_types::{ids, TypedValue};

pub(super) fn check_min(limit: f64, value: &TypedValue) -> Option<Violation> {
    let TypedValue::Number(n) = value else {
        return None;
    };
    if *n < limit {
        Some(Violation {
            code: ids::CODE_MIN_VALUE,
            message: format!("must be at least {limit}"),
        })
    } else {
        None
    }
}

pub(super) fn check_max(limit: f64, value: &TypedValue) -> Option<Violation> {
    let TypedValue::Number(n) = value else {
        return None;
    };
    if *n > limit {
        Some(Violation {
            code: ids::CODE_MAX_VALUE,
            message: format!("must be at most {limit}"),
        })
    } else {
        None
    }
}
