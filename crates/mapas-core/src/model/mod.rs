//! Runtime entity models: the field-accessor configuration the query
//! engine validates filters against.

pub mod entity;
pub mod field;

pub use entity::EntityModel;
pub use field::{EntityFieldKind, EntityFieldModel};
