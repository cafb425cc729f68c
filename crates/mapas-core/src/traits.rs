//! Entity traits: how a record type exposes its identity, its fields and
//! its creation draft to the generic query engine.

use crate::{model::EntityModel, types::Id, value::Value};
use time::Date;

///
/// FieldValue
///
/// Conversion of one typed field into the dynamic `Value` the engine
/// evaluates predicates against.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for u64 {
    fn to_value(&self) -> Value {
        Value::Uint(*self)
    }
}

impl FieldValue for Id {
    fn to_value(&self) -> Value {
        Value::Uint(self.get())
    }
}

impl FieldValue for Date {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }
}

///
/// FieldValues
///
/// Read a field by name. `None` means the entity has no such field.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// EntityKind
///
/// A record type the engine can list. `MODEL` is the field-accessor
/// configuration: which fields exist, their filter shape, and which ones
/// the keyword searches.
///

pub trait EntityKind: FieldValues + Clone {
    const MODEL: &'static EntityModel;

    fn id(&self) -> Id;
}

///
/// EntityCreate
///
/// Creation contract: a draft carries every field except the id, which
/// the owning collection assigns.
///

pub trait EntityCreate: EntityKind {
    type Draft;

    fn from_draft(id: Id, draft: Self::Draft) -> Self;
}
