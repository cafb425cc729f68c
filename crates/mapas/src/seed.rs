//! Sample records each list page starts from, oldest first.

use crate::entity::{Agent, Event, Opportunity, Project, Space};
use mapas_core::types::Id;
use time::macros::date;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: Id::new(1),
            name: "Débora Lima Nóbri de Carvalho".to_string(),
            kind: "Individual".to_string(),
            areas_of_expertise: tags(&["Dança", "Teatro"]),
            description: "Atriz, bailarina e professora de dança. Graduada em Artes Cênicas pela \
                          Universidade de São Paulo (USP) e pós-graduada em Dança Contemporânea \
                          pela PUC-SP."
                .to_string(),
            location: "São Paulo, SP".to_string(),
        },
        Agent {
            id: Id::new(2),
            name: "Escola Livre - OngArteDuca".to_string(),
            kind: "Coletivo".to_string(),
            areas_of_expertise: tags(&["Artes Integradas", "Gestão Cultural"]),
            description: "Organização não-governamental dedicada à educação artística e cultural \
                          para crianças e jovens em comunidades carentes."
                .to_string(),
            location: "Rio de Janeiro, RJ".to_string(),
        },
        Agent {
            id: Id::new(3),
            name: "Associação Rádio Comunitária Aguinaldo - Arco FM".to_string(),
            kind: "Instituição".to_string(),
            areas_of_expertise: tags(&["Rádio", "Cultura Popular"]),
            description: "Rádio comunitária que promove a cultura local e fornece informações \
                          relevantes para a comunidade."
                .to_string(),
            location: "Belo Horizonte, MG".to_string(),
        },
    ]
}

#[must_use]
pub fn spaces() -> Vec<Space> {
    vec![
        Space {
            id: Id::new(1),
            name: "Teatro Livre - OngArteDuca".to_string(),
            kind: "Teatro".to_string(),
            areas_of_operation: tags(&["Teatro", "Dança"]),
            description: "Espaço cultural dedicado às artes cênicas, oferecendo apresentações \
                          teatrais, oficinas e cursos para a comunidade."
                .to_string(),
            location: "São Paulo, SP".to_string(),
        },
        Space {
            id: Id::new(2),
            name: "Associação Comunitária de Quilombo da Família Thomé".to_string(),
            kind: "Centro Cultural".to_string(),
            areas_of_operation: tags(&["Cultura Negra", "Patrimônio Imaterial"]),
            description: "Centro cultural que preserva e promove a cultura quilombola, oferecendo \
                          atividades educativas e culturais."
                .to_string(),
            location: "Salvador, BA".to_string(),
        },
        Space {
            id: Id::new(3),
            name: "Centro Cultural Banco Bradesco".to_string(),
            kind: "Galeria".to_string(),
            areas_of_operation: tags(&["Artes Visuais", "Música"]),
            description: "Espaço multifuncional que abriga exposições de arte, apresentações \
                          musicais e palestras sobre diversos temas culturais."
                .to_string(),
            location: "Rio de Janeiro, RJ".to_string(),
        },
    ]
}

#[must_use]
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: Id::new(1),
            name: "Festival de Jazz".to_string(),
            cultural_languages: tags(&["Música", "Festival"]),
            description: "O maior festival de jazz da América Latina, reunindo artistas \
                          nacionais e internacionais em performances inesquecíveis."
                .to_string(),
            age_classification: "Livre".to_string(),
            date: date!(2023 - 08 - 10),
            end_date: date!(2023 - 08 - 15),
            location: "São Paulo, SP".to_string(),
        },
        Event {
            id: Id::new(2),
            name: "Exposição de Arte Contemporânea".to_string(),
            cultural_languages: tags(&["Artes Visuais", "Exposição"]),
            description: "Uma exposição que reúne obras de artistas emergentes, explorando temas \
                          atuais através de diversas mídias."
                .to_string(),
            age_classification: "12 anos".to_string(),
            date: date!(2023 - 09 - 05),
            end_date: date!(2023 - 09 - 30),
            location: "Rio de Janeiro, RJ".to_string(),
        },
        Event {
            id: Id::new(3),
            name: "Festival de Teatro de Rua".to_string(),
            cultural_languages: tags(&["Teatro", "Festival"]),
            description: "Espetáculos gratuitos de teatro nas praças e ruas da cidade, promovendo \
                          a cultura e a arte acessível a todos."
                .to_string(),
            age_classification: "Livre".to_string(),
            date: date!(2023 - 10 - 20),
            end_date: date!(2023 - 10 - 25),
            location: "Belo Horizonte, MG".to_string(),
        },
    ]
}

#[must_use]
pub fn opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: Id::new(1),
            kind: "Festival".to_string(),
            title: "Festival de Música Independente".to_string(),
            areas_of_interest: tags(&["Música", "Produção Cultural"]),
            linked_entity: "evento".to_string(),
            registration_deadline: date!(2023 - 12 - 31),
        },
        Opportunity {
            id: Id::new(2),
            kind: "Edital".to_string(),
            title: "Edital de Apoio às Artes Visuais".to_string(),
            areas_of_interest: tags(&["Artes Visuais", "Fotografia"]),
            linked_entity: "projeto".to_string(),
            registration_deadline: date!(2023 - 11 - 30),
        },
        Opportunity {
            id: Id::new(3),
            kind: "Oficina".to_string(),
            title: "Oficina de Teatro para Iniciantes".to_string(),
            areas_of_interest: tags(&["Teatro", "Artes Integradas"]),
            linked_entity: "espaco".to_string(),
            registration_deadline: date!(2023 - 10 - 15),
        },
        Opportunity {
            id: Id::new(4),
            kind: "Concurso".to_string(),
            title: "Concurso de Curtas-Metragens".to_string(),
            areas_of_interest: tags(&["Audiovisual", "Cinema"]),
            linked_entity: "agente".to_string(),
            registration_deadline: date!(2023 - 09 - 30),
        },
        Opportunity {
            id: Id::new(5),
            kind: "Residência".to_string(),
            title: "Residência Artística em Dança Contemporânea".to_string(),
            areas_of_interest: tags(&["Dança", "Pesquisa"]),
            linked_entity: "espaco".to_string(),
            registration_deadline: date!(2023 - 11 - 15),
        },
    ]
}

#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: Id::new(1),
            name: "Escola Livre - OngArteDuca".to_string(),
            kind: "Educacional".to_string(),
            creator: "João Silva".to_string(),
            areas_of_interest: tags(&["Teatro", "Música", "Artes Visuais"]),
            description: "Projeto de educação artística para crianças e jovens em comunidades \
                          carentes, oferecendo oficinas de teatro, música e artes visuais."
                .to_string(),
        },
        Project {
            id: Id::new(2),
            name: "Arte e Identidade do Artesanato Campista".to_string(),
            kind: "Cultural".to_string(),
            creator: "Maria Souza".to_string(),
            areas_of_interest: tags(&["Cultura Popular", "Patrimônio Imaterial"]),
            description: "Documentação e preservação das técnicas tradicionais de artesanato da \
                          região de Campos dos Goytacazes, RJ."
                .to_string(),
        },
        Project {
            id: Id::new(3),
            name: "Portal do Povo Pataxó".to_string(),
            kind: "Tecnológico".to_string(),
            creator: "Carlos Pataxó".to_string(),
            areas_of_interest: tags(&["Cultura Indígena", "Cultura Digital"]),
            description: "Plataforma digital para divulgação da cultura, história e lutas do povo \
                          Pataxó, promovendo a visibilidade indígena."
                .to_string(),
        },
    ]
}
