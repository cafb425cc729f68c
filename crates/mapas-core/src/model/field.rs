use std::fmt;

///
/// EntityFieldModel
/// Runtime field metadata used by query validation and keyword search.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntityFieldModel {
    /// Field name as used in filters and `FieldValues::get_value`.
    pub name: &'static str,
    /// Filter shape of the field.
    pub kind: EntityFieldKind,
    /// Whether the keyword search looks at this field.
    pub searchable: bool,
}

impl EntityFieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: EntityFieldKind) -> Self {
        Self {
            name,
            kind,
            searchable: false,
        }
    }

    /// Mark the field as a keyword-search target.
    #[must_use]
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

///
/// EntityFieldKind
///
/// Filter shape of a field; this decides which filters may reference it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    /// Primary key (`Value::Uint`).
    Id,
    /// Free text, only reachable through the keyword.
    Text,
    /// Closed-vocabulary text matched by exact equality.
    Categorical,
    /// Multi-valued text matched by intersection.
    TagSet,
    /// Calendar date matched by ordering.
    Date,
}

impl fmt::Display for EntityFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Id => "id",
            Self::Text => "text",
            Self::Categorical => "categorical",
            Self::TagSet => "tag set",
            Self::Date => "date",
        };
        write!(f, "{label}")
    }
}
