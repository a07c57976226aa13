use super::Violation;
use formguard_types::{ids, TypedValue};
use regex::Regex;

pub(super) fn check(pattern: &str, value: &TypedValue) -> Option<Violation> {
    let TypedValue::Text(s) = value else {
        return None;
    };
    // Schemas built through FormSchema::new reject bad patterns up front, so
    // a compile failure here passes rather than poisoning the whole field.
    match Regex::new(pattern) {
        Ok(re) if re.is_match(s) => None,
        Ok(_) => Some(Violation {
            code: ids::CODE_PATTERN_MISMATCH,
            message: format!("must match the pattern {pattern}"),
        }),
        Err(_) => None,
    }
}
