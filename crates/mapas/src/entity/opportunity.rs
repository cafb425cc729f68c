use mapas_core::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
    types::Id,
    value::Value,
};
use serde::{Deserialize, Serialize};
use time::Date;

///
/// Opportunity
///
/// A call, grant, workshop or other open opportunity. Registration is open
/// while `registration_deadline` is after the current day.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Opportunity {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub areas_of_interest: Vec<String>,
    pub linked_entity: String,
    pub registration_deadline: Date,
}

impl Opportunity {
    /// True while registrations are still accepted on `today`.
    #[must_use]
    pub fn is_registration_open(&self, today: Date) -> bool {
        self.registration_deadline > today
    }
}

///
/// OpportunityDraft
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpportunityDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub areas_of_interest: Vec<String>,
    pub linked_entity: String,
    pub registration_deadline: Date,
}

impl OpportunityDraft {
    /// Blank form state; the deadline defaults to `today`.
    #[must_use]
    pub const fn blank(today: Date) -> Self {
        Self {
            kind: String::new(),
            title: String::new(),
            areas_of_interest: Vec::new(),
            linked_entity: String::new(),
            registration_deadline: today,
        }
    }

    /// Toggle one area of interest on or off.
    pub fn toggle_area(&mut self, area: &str) {
        if let Some(pos) = self.areas_of_interest.iter().position(|a| a == area) {
            self.areas_of_interest.remove(pos);
        } else {
            self.areas_of_interest.push(area.to_string());
        }
    }
}

static FIELDS: [EntityFieldModel; 6] = [
    EntityFieldModel::new("id", EntityFieldKind::Id),
    EntityFieldModel::new("type", EntityFieldKind::Categorical).searchable(),
    EntityFieldModel::new("title", EntityFieldKind::Text).searchable(),
    EntityFieldModel::new("areas_of_interest", EntityFieldKind::TagSet),
    EntityFieldModel::new("linked_entity", EntityFieldKind::Categorical),
    EntityFieldModel::new("registration_deadline", EntityFieldKind::Date),
];

static MODEL: EntityModel = EntityModel {
    path: "mapas::entity::Opportunity",
    entity_name: "opportunity",
    primary_key: &FIELDS[0],
    fields: &FIELDS,
};

impl FieldValues for Opportunity {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.to_value()),
            "type" => Some(self.kind.to_value()),
            "title" => Some(self.title.to_value()),
            "areas_of_interest" => Some(self.areas_of_interest.to_value()),
            "linked_entity" => Some(self.linked_entity.to_value()),
            "registration_deadline" => Some(self.registration_deadline.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Opportunity {
    const MODEL: &'static EntityModel = &MODEL;

    fn id(&self) -> Id {
        self.id
    }
}

impl EntityCreate for Opportunity {
    type Draft = OpportunityDraft;

    fn from_draft(id: Id, draft: OpportunityDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            title: draft.title,
            areas_of_interest: draft.areas_of_interest,
            linked_entity: draft.linked_entity,
            registration_deadline: draft.registration_deadline,
        }
    }
}

///
/// TESTS
///
