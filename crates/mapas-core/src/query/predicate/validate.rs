use crate::{
    error::InternalError,
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    query::predicate::{ComparePredicate, Predicate},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// ValidateError
///
/// Model-aware rejection of a predicate before evaluation.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("operator '{op}' is not supported on {kind} field '{field}'")]
    UnsupportedOperator {
        field: String,
        kind: EntityFieldKind,
        op: &'static str,
    },

    #[error("literal for {kind} field '{field}' has the wrong type")]
    InvalidLiteral { field: String, kind: EntityFieldKind },
}

/// Check that a hand-written model is internally consistent.
pub fn validate_model(model: &EntityModel) -> Result<(), InternalError> {
    if model.primary_key.kind != EntityFieldKind::Id {
        return Err(InternalError::engine_invariant(format!(
            "entity '{}' primary key '{}' is not an id field",
            model.path, model.primary_key.name
        )));
    }

    if model.field(model.primary_key.name).is_none() {
        return Err(InternalError::engine_invariant(format!(
            "entity '{}' primary key '{}' is missing from its field list",
            model.path, model.primary_key.name
        )));
    }

    for (i, field) in model.fields.iter().enumerate() {
        if model.fields[..i].iter().any(|prev| prev.name == field.name) {
            return Err(InternalError::engine_invariant(format!(
                "entity '{}' declares field '{}' more than once",
                model.path, field.name
            )));
        }
    }

    Ok(())
}

/// Validate a predicate against an entity model.
pub fn validate(model: &EntityModel, predicate: &Predicate) -> Result<(), ValidateError> {
    match predicate {
        Predicate::True | Predicate::False => Ok(()),

        Predicate::And(children) | Predicate::Or(children) => children
            .iter()
            .try_for_each(|child| validate(model, child)),
        Predicate::Not(inner) => validate(model, inner),

        Predicate::Compare(cmp) => validate_compare(model, cmp),

        Predicate::TextContainsCi { field, value } => {
            let model_field = field_of(model, field)?;
            if !matches!(
                model_field.kind,
                EntityFieldKind::Text | EntityFieldKind::Categorical
            ) {
                return Err(unsupported(model_field, "contains"));
            }
            if value.as_text().is_none() {
                return Err(invalid_literal(model_field));
            }

            Ok(())
        }

        Predicate::Intersects { field, values } => {
            let model_field = field_of(model, field)?;
            if model_field.kind != EntityFieldKind::TagSet {
                return Err(unsupported(model_field, "intersects"));
            }
            if values.iter().any(|value| value.as_text().is_none()) {
                return Err(invalid_literal(model_field));
            }

            Ok(())
        }
    }
}

fn validate_compare(model: &EntityModel, cmp: &ComparePredicate) -> Result<(), ValidateError> {
    let model_field = field_of(model, &cmp.field)?;

    let literal_ok = match model_field.kind {
        EntityFieldKind::Id => matches!(cmp.value, Value::Uint(_)),
        EntityFieldKind::Text | EntityFieldKind::Categorical => {
            matches!(cmp.value, Value::Text(_))
        }
        EntityFieldKind::Date => matches!(cmp.value, Value::Date(_)),
        EntityFieldKind::TagSet => return Err(unsupported(model_field, cmp.op.symbol())),
    };

    let op_ok = match model_field.kind {
        EntityFieldKind::Id | EntityFieldKind::Date => true,
        _ => !cmp.op.is_ordering(),
    };

    if !op_ok {
        return Err(unsupported(model_field, cmp.op.symbol()));
    }
    if !literal_ok {
        return Err(invalid_literal(model_field));
    }

    Ok(())
}

fn field_of(model: &EntityModel, field: &str) -> Result<&'static EntityFieldModel, ValidateError> {
    model.field(field).ok_or_else(|| ValidateError::UnknownField {
        field: field.to_string(),
    })
}

fn unsupported(field: &EntityFieldModel, op: &'static str) -> ValidateError {
    ValidateError::UnsupportedOperator {
        field: field.name.to_string(),
        kind: field.kind,
        op,
    }
}

fn invalid_literal(field: &EntityFieldModel) -> ValidateError {
    ValidateError::InvalidLiteral {
        field: field.name.to_string(),
        kind: field.kind,
    }
}

