//! Module: cursor
//! Responsibility: row projection, continuation cursors, and the opaque
//! token protocol (text codec, wire payload, shape signature).
//! Does not own: query rewriting or the list protocol; those consume
//! cursors but live in `query`.

mod codec;
mod signature;
mod token;


use crate::{
    error::{ErrorOrigin, InternalError},
    model::EntityFieldModel,
    traits::EntityKind,
    value::Value,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

// re-exports
pub use codec::{CursorDecodeError, decode_hex, encode_hex};
pub use signature::ContinuationSignature;
pub use token::{ContinuationToken, TokenWireError};

///
/// Cursor
///
/// A row's primary-key projection: ordered `(field, value)` pairs whose
/// field names exactly equal the entity's primary-key shape. Partial
/// cursors are never accepted.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cursor {
    fields: Vec<(String, Value)>,
}

impl Cursor {
    #[must_use]
    pub const fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    /// Extract a row's primary-key projection.
    ///
    /// A row that fails to produce a value for one of its own primary-key
    /// fields violates the schema uniqueness invariant and is reported as
    /// corruption, not caller error.
    pub fn project<E: EntityKind>(row: &E) -> Result<Self, InternalError> {
        let model = E::MODEL;

        let fields = model
            .primary_key
            .iter()
            .map(|field| {
                row.field_value(field)
                    .map(|value| ((*field).to_string(), value))
                    .ok_or_else(|| {
                        InternalError::corruption(
                            ErrorOrigin::Cursor,
                            format!(
                                "row of entity '{}' is missing primary key field '{field}'",
                                model.path
                            ),
                        )
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Look up the recorded value for one field.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Check this cursor against a resolved primary-key shape: exact field
    /// names in declaration order, every value inhabiting its field kind.
    pub(crate) fn check_shape(
        &self,
        entity_path: &'static str,
        pk_fields: &[&'static EntityFieldModel],
    ) -> Result<(), CursorError> {
        let found_names = self.fields.iter().map(|(name, _)| name.as_str());

        if self.fields.len() != pk_fields.len()
            || !found_names.eq(pk_fields.iter().map(|field| field.name))
        {
            return Err(CursorError::ShapeMismatch {
                entity_path,
                expected: pk_fields
                    .iter()
                    .map(|field| field.name)
                    .collect::<Vec<_>>()
                    .join(", "),
                found: self
                    .fields
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        for ((_, value), field) in self.fields.iter().zip(pk_fields) {
            if !value.matches_kind(&field.kind) {
                return Err(CursorError::TypeMismatch {
                    field: field.name.to_string(),
                    expected: field.kind.label(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

///
/// CursorError
///
/// Cursor token and boundary validation failures. Every variant is caller
/// error ("malformed cursor"), never a system fault.
///

#[derive(Debug, ThisError)]
pub enum CursorError {
    /// Cursor token text could not be decoded.
    #[error("invalid continuation cursor: {0}")]
    Token(#[from] CursorDecodeError),

    /// Cursor token payload is invalid after text decode.
    #[error("invalid continuation cursor payload: {0}")]
    Wire(#[from] TokenWireError),

    /// Cursor token does not belong to this canonical query shape.
    #[error(
        "continuation cursor does not match the query shape for '{entity_path}': expected={expected}, actual={actual}"
    )]
    SignatureMismatch {
        entity_path: &'static str,
        expected: String,
        actual: String,
    },

    /// Cursor field set does not equal the primary-key shape.
    #[error("cursor field mismatch for '{entity_path}': expected [{expected}], found [{found}]")]
    ShapeMismatch {
        entity_path: &'static str,
        expected: String,
        found: String,
    },

    /// Cursor value does not inhabit the primary-key field kind.
    #[error("cursor value type mismatch for field '{field}': expected {expected}, found {value:?}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        value: Value,
    },
}
