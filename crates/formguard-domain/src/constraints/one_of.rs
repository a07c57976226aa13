use super::Violation;
use formguard_types::{ids, TypedValue};

pub(super) fn check(values: &[String], value: &TypedValue) -> Option<Violation> {
    let TypedValue::Text(s) = value else {
        return None;
    };
    if values.iter().any(|v| v == s) {
        None
    } else {
        Some(Violation {
            code: ids::CODE_NOT_IN_SET,
            message: format!("must be one of: {}", values.join(", ")),
        })
    }
}
