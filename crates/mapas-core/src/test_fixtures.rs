use crate::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
    types::Id,
    value::Value,
};
use serde::Serialize;

///
/// Show
///
/// Event-shaped test entity covering every field kind.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct Show {
    pub id: Id,
    pub name: String,
    pub age_rating: String,
    pub languages: Vec<String>,
    pub description: String,
}

///
/// ShowDraft
///

#[derive(Clone, Debug)]
pub(crate) struct ShowDraft {
    pub name: String,
    pub age_rating: String,
    pub languages: Vec<String>,
    pub description: String,
}

impl ShowDraft {
    pub(crate) fn new(name: &str, age_rating: &str, languages: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            age_rating: age_rating.to_string(),
            languages: languages.iter().map(ToString::to_string).collect(),
            description: String::new(),
        }
    }
}

static SHOW_FIELDS: [EntityFieldModel; 5] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("name", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("age_rating", EntityFieldKind::Categorical).searchable(),
    EntityFieldModel::new("languages", EntityFieldKind::TagSet),
    EntityFieldModel::new("description", EntityFieldKind::Text).searchable(),
];

static SHOW_MODEL: EntityModel = EntityModel {
    path: "test_fixtures::Show",
    entity_name: "show",
    primary_key: &SHOW_FIELDS[0],
    fields: &SHOW_FIELDS,
};

impl FieldValues for Show {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "age_rating" => Some(self.age_rating.to_value()),
            "languages" => Some(self.languages.to_value()),
            "description" => Some(self.description.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Show {
    const MODEL: &'static EntityModel = &SHOW_MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Show {
    type Draft = ShowDraft;

    fn from_draft(id: Id, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            age_rating: draft.age_rating,
            languages: draft.languages,
            description: draft.description,
        }
    }
}

/// Build a show with an explicit id.
pub(crate) fn show(id: u64, name: &str, age_rating: &str, languages: &[&str]) -> Show {
    Show::from_draft(Id::new(id), ShowDraft::new(name, age_rating, languages))
}

/// `n` shows with ids `1..=n`, in storage order.
pub(crate) fn shows(n: u64) -> Vec<Show> {
    (1..=n)
        .map(|i| show(i, &format!("Show {i}"), "Livre", &["Música"]))
        .collect()
}
