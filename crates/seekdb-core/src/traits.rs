use crate::{model::EntityModel, value::Value};
use std::fmt::Debug;

///
/// Path
/// Fully-qualified schema path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EntitySchema
///
/// Declared schema facts for an entity. `MODEL` is immutable configuration
/// established at compile time; the engine never mutates or registers
/// schema state at runtime.
///

pub trait EntitySchema: Path {
    const MODEL: &'static EntityModel;
}

///
/// RowValue
///
/// Field-name lookup on a materialized row. This is the only row capability
/// the engine needs: projection, predicate evaluation, and ordering all go
/// through it.
///

pub trait RowValue {
    /// Return the row's value for `field`, or `None` when the row does not
    /// carry that field.
    fn field_value(&self, field: &str) -> Option<Value>;
}

///
/// EntityKind
///
/// Fully runtime-bound entity: schema facts plus row capabilities. This is
/// the maximum entity contract and should only be required by code that
/// actually plans or executes queries.
///

pub trait EntityKind: EntitySchema + RowValue + Clone + Debug + 'static {}

impl<T> EntityKind for T where T: EntitySchema + RowValue + Clone + Debug + 'static {}
