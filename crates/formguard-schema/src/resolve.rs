use crate::file::{ConstraintConfig, DefaultConfig, SchemaFileV1};
use crate::model::{Constraint, FieldRule, FormSchema};
use anyhow::Context;
use formguard_types::{RawValue, ValueKind};

/// Resolve a parsed schema file into a validated [`FormSchema`].
///
/// Unknown kinds and constraint types are errors here, not at validation
/// time: a schema that resolves is a schema `validate` can trust.
pub fn resolve_schema(file: SchemaFileV1) -> anyhow::Result<FormSchema> {
    if let Some(schema) = file.schema.as_deref() {
        if schema != crate::file::SCHEMA_FILE_V1 {
            anyhow::bail!(
                "unsupported schema: {schema} (expected {})",
                crate::file::SCHEMA_FILE_V1
            );
        }
    }

    let mut rules = Vec::with_capacity(file.fields.len());
    for field in file.fields {
        let kind = parse_kind(&field.kind)
            .with_context(|| format!("invalid kind for field '{}'", field.name))?;

        let mut rule = match kind {
            ValueKind::String => FieldRule::string(&field.name),
            ValueKind::Boolean => FieldRule::boolean(&field.name),
            ValueKind::Number => FieldRule::number(&field.name),
        };

        if field.required == Some(false) {
            let default = field.default.clone().with_context(|| {
                format!("optional field '{}' must declare a default", field.name)
            })?;
            rule = rule.optional(match default {
                DefaultConfig::Flag(b) => RawValue::Flag(b),
                DefaultConfig::Text(s) => RawValue::Text(s),
            });
        } else if field.default.is_some() {
            anyhow::bail!(
                "field '{}' declares a default but is not optional",
                field.name
            );
        }

        for cc in &field.constraints {
            let constraint = resolve_constraint(cc)
                .with_context(|| format!("invalid constraint for field '{}'", field.name))?;
            rule = rule.constraint(constraint);
        }

        rules.push(rule);
    }

    FormSchema::new(rules).context("schema construction")
}

fn resolve_constraint(cc: &ConstraintConfig) -> anyhow::Result<Constraint> {
    let constraint = match cc.constraint_type.as_str() {
        "min_length" => Constraint::min_length(length_limit(cc)?),
        "max_length" => Constraint::max_length(length_limit(cc)?),
        "pattern" => {
            let pattern = cc
                .pattern
                .as_deref()
                .context("pattern constraint requires a 'pattern' value")?;
            Constraint::pattern(pattern)
        }
        "email" => Constraint::email(),
        "min_value" => Constraint::min_value(range_limit(cc)?),
        "max_value" => Constraint::max_value(range_limit(cc)?),
        "one_of" => {
            if cc.values.is_empty() {
                anyhow::bail!("one_of constraint requires a non-empty 'values' list");
            }
            Constraint::one_of(cc.values.clone())
        }
        other => anyhow::bail!("unknown constraint type: {other}"),
    };

    Ok(match &cc.message {
        Some(msg) => constraint.with_message(msg),
        None => constraint,
    })
}

fn length_limit(cc: &ConstraintConfig) -> anyhow::Result<usize> {
    let limit = cc
        .limit
        .with_context(|| format!("{} constraint requires a 'limit'", cc.constraint_type))?;
    if limit < 0.0 || limit.fract() != 0.0 || limit > usize::MAX as f64 {
        anyhow::bail!("length limit must be a non-negative integer, got {limit}");
    }
    Ok(limit as usize)
}

fn range_limit(cc: &ConstraintConfig) -> anyhow::Result<f64> {
    let limit = cc
        .limit
        .with_context(|| format!("{} constraint requires a 'limit'", cc.constraint_type))?;
    if !limit.is_finite() {
        anyhow::bail!("range limit must be finite, got {limit}");
    }
    Ok(limit)
}

fn parse_kind(v: &str) -> anyhow::Result<ValueKind> {
    match v {
        "string" => Ok(ValueKind::String),
        "boolean" | "bool" => Ok(ValueKind::Boolean),
        "number" => Ok(ValueKind::Number),
        other => anyhow::bail!("unknown kind: {other} (expected string|boolean|number)"),
    }
}
