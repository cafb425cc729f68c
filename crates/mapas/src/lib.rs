//! ## Crate layout
//! - `config`: TOML directory configuration.
//! - `core`: the generic list runtime (models, values, queries, engine).
//! - `directory`: list-page controllers and the seeded directory.
//! - `entity`: agents, spaces, events, opportunities, and projects.
//! - `error`: the public error taxonomy.
//! - `seed`: sample records for every entity.
//! - `validate`: creation-draft validation.
//! - `vocab`: controlled vocabularies.
//!
//! The `prelude` module brings the entity types and the list-page surface
//! into scope in one import.

pub use mapas_core as core;

pub mod config;
pub mod directory;
pub mod entity;
pub mod error;
pub mod seed;
pub mod validate;
pub mod vocab;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::DirectoryConfig,
        directory::{Directory, ListPage},
        entity::*,
        error::{Error, ErrorKind, QueryErrorKind},
        validate::ValidateDraft as _,
        vocab::Vocabulary,
    };
    pub use mapas_core::prelude::*;
}
