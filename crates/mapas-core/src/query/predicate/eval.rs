use crate::{
    query::predicate::{CompareOp, ComparePredicate, Predicate},
    traits::FieldValues,
    value::{TextMode, Value},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during predicate
/// evaluation. This distinguishes between a missing field and a
/// present field whose value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// This decouples predicate evaluation from concrete entity types.
///

pub(crate) trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl<T: FieldValues> Row for T {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

// Evaluate a field predicate only when the field is present.
fn on_present<R: Row + ?Sized>(row: &R, field: &str, f: impl FnOnce(&Value) -> bool) -> bool {
    match row.field(field) {
        FieldPresence::Present(value) => f(&value),
        FieldPresence::Missing => false,
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no model access, no validation.
/// Any undefined comparison (missing field, null, type mismatch)
/// evaluates to `false`.
/// CONTRACT: predicates must be validated before evaluation.
///
#[must_use]
pub(crate) fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::TextContainsCi { field, value } => on_present(row, field, |actual| {
            actual.text_contains(value, TextMode::Ci).unwrap_or(false)
        }),
        Predicate::Intersects { field, values } => on_present(row, field, |actual| {
            actual.intersects(values).unwrap_or(false)
        }),
    }
}

fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate { field, op, value } = cmp;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => actual.strict_eq(value).unwrap_or(false),
        CompareOp::Ne => actual.strict_eq(value).is_some_and(|v| !v),

        CompareOp::Lt => actual.strict_order(value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => actual.strict_order(value).is_some_and(Ordering::is_le),
        CompareOp::Gt => actual.strict_order(value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => actual.strict_order(value).is_some_and(Ordering::is_ge),
    }
}
