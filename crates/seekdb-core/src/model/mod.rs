//! Runtime schema metadata.
//!
//! Types in `model` are the immutable, process-wide facts the pagination
//! engine needs about an entity: its field list, its primary-key shape, and
//! the sortable/filterable allow-lists. They are plain `'static` data wired
//! in through [`crate::traits::EntitySchema::MODEL`]; nothing here is
//! registered or mutated at runtime.

mod entity;
mod field;

pub use entity::EntityModel;
pub use field::{EntityFieldKind, EntityFieldModel};
