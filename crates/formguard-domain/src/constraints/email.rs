use super::Violation;
use formguard_types::{ids, TypedValue};

pub(super) fn check(value: &TypedValue) -> Option<Violation> {
    let TypedValue::Text(s) = value else {
        return None;
    };
    if is_valid_email(s) {
        None
    } else {
        Some(Violation {
            code: ids::CODE_INVALID_EMAIL,
            message: "must be a valid email address".to_string(),
        })
    }
}

/// Structural check: one `@`, non-empty local part, domain with a dot that is
/// neither leading nor trailing, no whitespace anywhere.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(0) => false,
        Some(_) => !domain.ends_with('.'),
        None => false,
    }
}
