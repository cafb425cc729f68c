//! Controlled vocabularies offered by the directory's forms and filters.

use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Vocabulary
///
/// Names one closed list of terms. Draft validation checks categorical
/// and tag-set values against the vocabulary their field draws from.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Vocabulary {
    AgeClassification,
    AgentType,
    AreaOfInterest,
    CulturalLanguage,
    LinkedEntity,
    OpportunityType,
    ProjectType,
    SpaceType,
}

impl Vocabulary {
    #[must_use]
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Self::AgeClassification => AGE_CLASSIFICATIONS,
            Self::AgentType => AGENT_TYPES,
            Self::AreaOfInterest => AREAS_OF_INTEREST,
            Self::CulturalLanguage => CULTURAL_LANGUAGES,
            Self::LinkedEntity => LINKED_ENTITIES,
            Self::OpportunityType => OPPORTUNITY_TYPES,
            Self::ProjectType => PROJECT_TYPES,
            Self::SpaceType => SPACE_TYPES,
        }
    }

    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn contains(self, term: &str) -> bool {
        self.terms().contains(&term)
    }
}

pub const AGE_CLASSIFICATIONS: &[&str] = &[
    "Livre", "10 anos", "12 anos", "14 anos", "16 anos", "18 anos",
];

pub const AGENT_TYPES: &[&str] = &["Individual", "Coletivo", "Instituição"];

pub const AREAS_OF_INTEREST: &[&str] = &[
    "Artes Circenses",
    "Artes Integradas",
    "Artes Visuais",
    "Audiovisual",
    "Cinema",
    "Cultura Alimentar",
    "Cultura Digital",
    "Cultura Indígena",
    "Cultura LGBTQIA+",
    "Cultura Negra",
    "Cultura Popular",
    "Dança",
    "Design",
    "Fotografia",
    "Gestão Cultural",
    "Literatura",
    "Livro e Leitura",
    "Moda",
    "Música",
    "Ópera",
    "Patrimônio Imaterial",
    "Patrimônio Material",
    "Pesquisa",
    "Produção Cultural",
    "Rádio",
    "Teatro",
    "Outros",
];

pub const CULTURAL_LANGUAGES: &[&str] = &[
    "Artes Circenses",
    "Artes Visuais",
    "Audiovisual",
    "Cinema",
    "Dança",
    "Exposição",
    "Festival",
    "Hip Hop",
    "Literatura",
    "Música",
    "Oficina",
    "Show",
    "Teatro",
];

/// Kinds of record an opportunity can be linked to.
pub const LINKED_ENTITIES: &[&str] = &["projeto", "evento", "espaco", "agente"];

pub const OPPORTUNITY_TYPES: &[&str] = &[
    "Festival",
    "Edital",
    "Oficina",
    "Convocatória",
    "Concurso",
    "Chamada Pública",
    "Programa",
    "Curso",
    "Encontro",
    "Reunião",
    "Mostra",
    "Seminário",
    "Congresso",
    "Residência",
    "Exposição",
    "Exibição",
    "Consulta Pública",
    "Intercâmbio",
    "Sarau",
    "Feira",
    "Jornada",
    "Conferência",
    "Simpósio",
    "Fórum",
    "Circuito",
    "Outros",
];

pub const PROJECT_TYPES: &[&str] = &[
    "Educacional",
    "Cultural",
    "Social",
    "Ambiental",
    "Tecnológico",
];

pub const SPACE_TYPES: &[&str] = &[
    "Teatro",
    "Museu",
    "Biblioteca",
    "Centro Cultural",
    "Galeria",
];

///
/// TESTS
///
