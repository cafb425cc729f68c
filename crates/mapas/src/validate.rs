//! Draft validation: the checks a creation form applies before a draft
//! reaches `Collection::insert_new`.

use crate::{
    entity::{AgentDraft, EventDraft, OpportunityDraft, ProjectDraft, SpaceDraft},
    vocab::Vocabulary,
};
use thiserror::Error as ThisError;

///
/// DraftError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DraftError {
    #[error("field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("field '{field}' has value '{value}' outside the {vocabulary} vocabulary")]
    OutOfVocabulary {
        field: &'static str,
        value: String,
        vocabulary: Vocabulary,
    },

    #[error("field '{field}' must not be before '{start}'")]
    EndsBeforeStart {
        field: &'static str,
        start: &'static str,
    },
}

///
/// ValidateDraft
///

pub trait ValidateDraft {
    fn validate(&self) -> Result<(), DraftError>;
}

fn required(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField { field });
    }

    Ok(())
}

// Empty values are allowed; the field is optional on the form.
fn optional_term(field: &'static str, value: &str, vocabulary: Vocabulary) -> Result<(), DraftError> {
    if value.is_empty() {
        return Ok(());
    }

    term(field, value, vocabulary)
}

fn term(field: &'static str, value: &str, vocabulary: Vocabulary) -> Result<(), DraftError> {
    if vocabulary.contains(value) {
        Ok(())
    } else {
        Err(DraftError::OutOfVocabulary {
            field,
            value: value.to_string(),
            vocabulary,
        })
    }
}

fn terms(field: &'static str, values: &[String], vocabulary: Vocabulary) -> Result<(), DraftError> {
    values
        .iter()
        .try_for_each(|value| term(field, value, vocabulary))
}

impl ValidateDraft for AgentDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name)?;
        optional_term("type", &self.kind, Vocabulary::AgentType)?;
        terms(
            "areas_of_expertise",
            &self.areas_of_expertise,
            Vocabulary::AreaOfInterest,
        )
    }
}

impl ValidateDraft for SpaceDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name)?;
        optional_term("type", &self.kind, Vocabulary::SpaceType)?;
        terms(
            "areas_of_operation",
            &self.areas_of_operation,
            Vocabulary::AreaOfInterest,
        )
    }
}

impl ValidateDraft for EventDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name)?;
        optional_term(
            "age_classification",
            &self.age_classification,
            Vocabulary::AgeClassification,
        )?;
        terms(
            "cultural_languages",
            &self.cultural_languages,
            Vocabulary::CulturalLanguage,
        )?;

        if self.end_date < self.date {
            return Err(DraftError::EndsBeforeStart {
                field: "end_date",
                start: "date",
            });
        }

        Ok(())
    }
}

impl ValidateDraft for OpportunityDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("title", &self.title)?;
        required("type", &self.kind)?;
        term("type", &self.kind, Vocabulary::OpportunityType)?;
        terms(
            "areas_of_interest",
            &self.areas_of_interest,
            Vocabulary::AreaOfInterest,
        )?;
        optional_term("linked_entity", &self.linked_entity, Vocabulary::LinkedEntity)
    }
}

impl ValidateDraft for ProjectDraft {
    fn validate(&self) -> Result<(), DraftError> {
        required("name", &self.name)?;
        optional_term("type", &self.kind, Vocabulary::ProjectType)?;
        terms(
            "areas_of_interest",
            &self.areas_of_interest,
            Vocabulary::AreaOfInterest,
        )
    }
}

///
/// TESTS
///
