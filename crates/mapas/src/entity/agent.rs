use mapas_core::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
    types::Id,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Agent
///
/// A person, collective or institution acting in the cultural sector.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Agent {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub areas_of_expertise: Vec<String>,
    pub description: String,
    pub location: String,
}

///
/// AgentDraft
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AgentDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub areas_of_expertise: Vec<String>,
    pub description: String,
    pub location: String,
}

static FIELDS: [EntityFieldModel; 6] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("name", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("type", EntityFieldKind::Categorical).searchable(),
    EntityFieldModel::new("areas_of_expertise", EntityFieldKind::TagSet),
    EntityFieldModel::new("description", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("location", EntityFieldKind::Text).searchable(),
];

static MODEL: EntityModel = EntityModel {
    path: "mapas::entity::Agent",
    entity_name: "agent",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

impl FieldValues for Agent {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "type" => Some(self.kind.to_value()),
            "areas_of_expertise" => Some(self.areas_of_expertise.to_value()),
            "description" => Some(self.description.to_value()),
            "location" => Some(self.location.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Agent {
    const MODEL: &'static EntityModel = &MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Agent {
    type Draft = AgentDraft;

    fn from_draft(id: Id, draft: AgentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            areas_of_expertise: draft.areas_of_expertise,
            description: draft.description,
            location: draft.location,
        }
    }
}
