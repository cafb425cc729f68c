use crate::model::field::{EntityFieldKind, EntityFieldModel};

///
/// EntityModel
/// Static runtime model for one entity.
///

pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in configuration and routing.
    pub entity_name: &'static str,
    /// Primary key field (points at an entry in `fields`).
    pub primary_key: &'static EntityFieldModel,
    /// Ordered field list (authoritative for query validation).
    pub fields: &'static [EntityFieldModel],
}

impl EntityModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static EntityFieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields the free-text keyword is matched against, in declaration order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &'static EntityFieldModel> {
        self.fields.iter().filter(|field| field.searchable)
    }

    /// Fields of one kind, in declaration order.
    pub fn fields_of_kind(
        &self,
        kind: EntityFieldKind,
    ) -> impl Iterator<Item = &'static EntityFieldModel> {
        self.fields.iter().filter(move |field| field.kind == kind)
    }
}

///
/// TESTS
///
