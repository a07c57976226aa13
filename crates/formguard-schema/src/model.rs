use formguard_types::{coerce, ids, RawValue, ValueKind};
use std::collections::BTreeSet;
use thiserror::Error;

/// A single declarative constraint on a field's coerced value.
///
/// Every variant carries an optional message override; when `None`, the
/// evaluator supplies a default message.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    MinLength { limit: usize, message: Option<String> },
    MaxLength { limit: usize, message: Option<String> },
    Pattern { pattern: String, message: Option<String> },
    Email { message: Option<String> },
    MinValue { limit: f64, message: Option<String> },
    MaxValue { limit: f64, message: Option<String> },
    OneOf { values: Vec<String>, message: Option<String> },
}

impl Constraint {
    pub fn min_length(limit: usize) -> Self {
        Constraint::MinLength { limit, message: None }
    }

    pub fn max_length(limit: usize) -> Self {
        Constraint::MaxLength { limit, message: None }
    }

    pub fn pattern<S: Into<String>>(pattern: S) -> Self {
        Constraint::Pattern {
            pattern: pattern.into(),
            message: None,
        }
    }

    pub fn email() -> Self {
        Constraint::Email { message: None }
    }

    pub fn min_value(limit: f64) -> Self {
        Constraint::MinValue { limit, message: None }
    }

    pub fn max_value(limit: f64) -> Self {
        Constraint::MaxValue { limit, message: None }
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constraint::OneOf {
            values: values.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// Replace the default error message for this constraint.
    pub fn with_message<S: Into<String>>(mut self, msg: S) -> Self {
        let slot = match &mut self {
            Constraint::MinLength { message, .. }
            | Constraint::MaxLength { message, .. }
            | Constraint::Pattern { message, .. }
            | Constraint::Email { message }
            | Constraint::MinValue { message, .. }
            | Constraint::MaxValue { message, .. }
            | Constraint::OneOf { message, .. } => message,
        };
        *slot = Some(msg.into());
        self
    }

    /// Stable constraint kind, shared with the error codes in
    /// `formguard_types::ids`.
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::MinLength { .. } => ids::CODE_MIN_LENGTH,
            Constraint::MaxLength { .. } => ids::CODE_MAX_LENGTH,
            Constraint::Pattern { .. } => ids::CODE_PATTERN_MISMATCH,
            Constraint::Email { .. } => ids::CODE_INVALID_EMAIL,
            Constraint::MinValue { .. } => ids::CODE_MIN_VALUE,
            Constraint::MaxValue { .. } => ids::CODE_MAX_VALUE,
            Constraint::OneOf { .. } => ids::CODE_NOT_IN_SET,
        }
    }

    pub fn custom_message(&self) -> Option<&str> {
        match self {
            Constraint::MinLength { message, .. }
            | Constraint::MaxLength { message, .. }
            | Constraint::Pattern { message, .. }
            | Constraint::Email { message }
            | Constraint::MinValue { message, .. }
            | Constraint::MaxValue { message, .. }
            | Constraint::OneOf { message, .. } => message.as_deref(),
        }
    }

    /// Which value kind this constraint can evaluate.
    fn applies_to(&self) -> ValueKind {
        match self {
            Constraint::MinLength { .. }
            | Constraint::MaxLength { .. }
            | Constraint::Pattern { .. }
            | Constraint::Email { .. }
            | Constraint::OneOf { .. } => ValueKind::String,
            Constraint::MinValue { .. } | Constraint::MaxValue { .. } => ValueKind::Number,
        }
    }
}

/// Whether a field must be present in the raw values.
#[derive(Clone, Debug, PartialEq)]
pub enum Presence {
    Required,
    /// Absent fields take this default (as a raw value, coerced like any
    /// other input).
    Optional { default: RawValue },
}

/// One named field: declared kind, presence, and ordered constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRule {
    name: String,
    kind: ValueKind,
    presence: Presence,
    constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn string<S: Into<String>>(name: S) -> Self {
        Self::new(name, ValueKind::String)
    }

    pub fn boolean<S: Into<String>>(name: S) -> Self {
        Self::new(name, ValueKind::Boolean)
    }

    pub fn number<S: Into<String>>(name: S) -> Self {
        Self::new(name, ValueKind::Number)
    }

    fn new<S: Into<String>>(name: S, kind: ValueKind) -> Self {
        FieldRule {
            name: name.into(),
            kind,
            presence: Presence::Required,
            constraints: Vec::new(),
        }
    }

    /// Mark the field optional with a declared default.
    pub fn optional(mut self, default: RawValue) -> Self {
        self.presence = Presence::Optional { default };
        self
    }

    /// Append a constraint; evaluation order is declaration order.
    pub fn constraint(mut self, c: Constraint) -> Self {
        self.constraints.push(c);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// Schema construction errors. These are programming errors in the caller,
/// surfaced eagerly so `validate` never has to deal with a malformed schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate field name: {0}")]
    DuplicateField(String),

    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("default for optional field '{field}' does not coerce to {expected}")]
    DefaultKindMismatch { field: String, expected: ValueKind },

    #[error("constraint '{constraint}' does not apply to {kind} field '{field}'")]
    ConstraintKindMismatch {
        field: String,
        constraint: &'static str,
        kind: ValueKind,
    },
}

/// An ordered set of field rules with unique names.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSchema {
    rules: Vec<FieldRule>,
}

impl FormSchema {
    /// Build a schema, rejecting malformed rule sets up front.
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, SchemaError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for rule in &rules {
            if rule.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(&rule.name) {
                return Err(SchemaError::DuplicateField(rule.name.clone()));
            }
            if let Presence::Optional { default } = &rule.presence {
                if coerce(rule.kind, default).is_none() {
                    return Err(SchemaError::DefaultKindMismatch {
                        field: rule.name.clone(),
                        expected: rule.kind,
                    });
                }
            }
            for c in &rule.constraints {
                // Boolean fields accept no constraints at all.
                if rule.kind != c.applies_to() {
                    return Err(SchemaError::ConstraintKindMismatch {
                        field: rule.name.clone(),
                        constraint: c.kind(),
                        kind: rule.kind,
                    });
                }
                if let Constraint::Pattern { pattern, .. } = c {
                    regex::Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
                        field: rule.name.clone(),
                        source,
                    })?;
                }
            }
        }
        Ok(FormSchema { rules })
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
