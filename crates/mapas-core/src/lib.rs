//! Core runtime for Mapas list pages: entity traits, field models, values,
//! the list query engine, collections, and the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod collection;
pub mod engine;
pub mod error;
pub mod model;
pub mod obs;
pub mod query;
pub mod response;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or metrics helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        collection::Collection,
        engine::ListQueryEngine,
        model::{EntityFieldKind, EntityFieldModel, EntityModel},
        query::ListQuery,
        response::{PageLink, PageView},
        traits::{EntityCreate, EntityKind, FieldValue, FieldValues},
        types::Id,
        value::Value,
    };
}
