use formguard_schema::Constraint;
use formguard_types::TypedValue;

mod email;
mod length;
mod one_of;
mod pattern;
mod range;


/// A failed constraint: the stable code plus the message to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub code: &'static str,
    pub message: String,
}

/// Evaluate one constraint against a coerced value.
///
/// Returns the first (only) violation the constraint produces, with any
/// schema-declared message override already applied.
pub fn check(constraint: &Constraint, value: &TypedValue) -> Option<Violation> {
    let violation = match constraint {
        Constraint::MinLength { limit, .. } => length::check_min(*limit, value),
        Constraint::MaxLength { limit, .. } => length::check_max(*limit, value),
        Constraint::Pattern { pattern, .. } => pattern::check(pattern, value),
        Constraint::Email { .. } => email::check(value),
        Constraint::MinValue { limit, .. } => range::check_min(*limit, value),
        Constraint::MaxValue { limit, .. } => range::check_max(*limit, value),
        Constraint::OneOf { values, .. } => one_of::check(values, value),
    }?;

    Some(match constraint.custom_message() {
        Some(msg) => Violation {
            message: msg.to_string(),
            ..violation
        },
        None => violation,
    })
}
