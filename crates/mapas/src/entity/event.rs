use mapas_core::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
    types::Id,
    value::Value,
};
use serde::{Deserialize, Serialize};
use time::Date;

///
/// Event
///
/// A dated cultural event. `date` is the opening day and `end_date` the
/// closing day; single-day events carry the same date twice.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Event {
    pub id: Id,
    pub name: String,
    pub cultural_languages: Vec<String>,
    pub description: String,
    pub age_classification: String,
    pub date: Date,
    pub end_date: Date,
    pub location: String,
}

///
/// EventDraft
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventDraft {
    pub name: String,
    pub cultural_languages: Vec<String>,
    pub description: String,
    pub age_classification: String,
    pub date: Date,
    pub end_date: Date,
    pub location: String,
}

static FIELDS: [EntityFieldModel; 8] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("name", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("cultural_languages", EntityFieldKind::TagSet),
    EntityFieldModel::new("description", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("age_classification", EntityFieldKind::Categorical),
    EntityFieldModel::new("date", EntityFieldKind::Date),
    EntityFieldModel::new("end_date", EntityFieldKind::Date),
    EntityFieldModel::new("location", EntityFieldKind::Text).searchable(),
];

static MODEL: EntityModel = EntityModel {
    path: "mapas::entity::Event",
    entity_name: "event",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

impl FieldValues for Event {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "cultural_languages" => Some(self.cultural_languages.to_value()),
            "description" => Some(self.description.to_value()),
            "age_classification" => Some(self.age_classification.to_value()),
            "date" => Some(self.date.to_value()),
            "end_date" => Some(self.end_date.to_value()),
            "location" => Some(self.location.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Event {
    const MODEL: &'static EntityModel = &MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Event {
    type Draft = EventDraft;

    fn from_draft(id: Id, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            cultural_languages: draft.cultural_languages,
            description: draft.description,
            age_classification: draft.age_classification,
            date: draft.date,
            end_date: draft.end_date,
            location: draft.location,
        }
    }
}
