use mapas_core::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
    types::Id,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Space
///
/// A venue: theatre, museum, library, cultural centre or gallery.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Space {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub areas_of_operation: Vec<String>,
    pub description: String,
    pub location: String,
}

///
/// SpaceDraft
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SpaceDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub areas_of_operation: Vec<String>,
    pub description: String,
    pub location: String,
}

static FIELDS: [EntityFieldModel; 6] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("name", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("type", EntityFieldKind::Categorical).searchable(),
    EntityFieldModel::new("areas_of_operation", EntityFieldKind::TagSet),
    EntityFieldModel::new("description", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("location", EntityFieldKind::Text).searchable(),
];

static MODEL: EntityModel = EntityModel {
    path: "mapas::entity::Space",
    entity_name: "space",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

impl FieldValues for Space {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "type" => Some(self.kind.to_value()),
            "areas_of_operation" => Some(self.areas_of_operation.to_value()),
            "description" => Some(self.description.to_value()),
            "location" => Some(self.location.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Space {
    const MODEL: &'static EntityModel = &MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Space {
    type Draft = SpaceDraft;

    fn from_draft(id: Id, draft: SpaceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            areas_of_operation: draft.areas_of_operation,
            description: draft.description,
            location: draft.location,
        }
    }
}
