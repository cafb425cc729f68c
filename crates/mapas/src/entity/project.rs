use mapas_core::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
    types::Id,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Project
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub creator: String,
    pub areas_of_interest: Vec<String>,
    pub description: String,
}

///
/// ProjectDraft
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub creator: String,
    pub areas_of_interest: Vec<String>,
    pub description: String,
}

static FIELDS: [EntityFieldModel; 6] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("name", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("type", EntityFieldKind::Categorical).searchable(),
    EntityFieldModel::new("creator", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("areas_of_interest", EntityFieldKind::TagSet),
    EntityFieldModel::new("description", EntityFieldKind::Text).searchable(),
];

static MODEL: EntityModel = EntityModel {
    path: "mapas::entity::Project",
    entity_name: "project",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

impl FieldValues for Project {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "type" => Some(self.kind.to_value()),
            "creator" => Some(self.creator.to_value()),
            "areas_of_interest" => Some(self.areas_of_interest.to_value()),
            "description" => Some(self.description.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Project {
    const MODEL: &'static EntityModel = &MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Project {
    type Draft = ProjectDraft;

    fn from_draft(id: Id, draft: ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            creator: draft.creator,
            areas_of_interest: draft.areas_of_interest,
            description: draft.description,
        }
    }
}
