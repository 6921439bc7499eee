//! Sort-specification validation.
//!
//! Callers hand the engine raw `(field, direction-token)` pairs, usually
//! straight from an API query string. This module normalizes them into a
//! validated [`OrderSpec`] against the entity's sortable-field allow-list.
//! Declaration order is preserved and repeated fields are not deduplicated;
//! tie-break order is exactly the order the caller wrote.

use crate::{MAX_SORT_FIELDS, model::EntityModel};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// OrderDirection
///
/// Canonical traversal direction shared by sort validation, the keyset
/// builder, and storage adapters.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// Parse a caller-supplied direction token.
    ///
    /// Tokens normalize case/whitespace-insensitively to exactly `asc` or
    /// `desc`; anything else is rejected.
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        let token = token.trim();

        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// Stable wire tag used by continuation signatures.
    #[must_use]
    pub(crate) const fn signature_tag(self) -> u8 {
        match self {
            Self::Asc => 0,
            Self::Desc => 1,
        }
    }
}

///
/// SortSpec
///
/// Raw, unvalidated sort input: an ordered sequence of
/// `(field, direction-token)` pairs.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    keys: Vec<(String, String)>,
}

impl SortSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Append one `(field, direction-token)` pair.
    #[must_use]
    pub fn key(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.keys.push((field.into(), direction.into()));
        self
    }

    pub fn from_pairs<F, D>(pairs: impl IntoIterator<Item = (F, D)>) -> Self
    where
        F: Into<String>,
        D: Into<String>,
    {
        Self {
            keys: pairs
                .into_iter()
                .map(|(field, direction)| (field.into(), direction.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> &[(String, String)] {
        &self.keys
    }
}

///
/// OrderSpec
///
/// Validated ordering key: the shape consumed by the keyset builder and
/// forwarded to storage adapters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSpec {
    pub fields: Vec<(String, OrderDirection)>,
}

impl OrderSpec {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Default ordering when the caller supplied no sort: every primary-key
    /// field ascending, in declaration order.
    #[must_use]
    pub fn primary_key(model: &EntityModel) -> Self {
        Self {
            fields: model
                .primary_key
                .iter()
                .map(|field| ((*field).to_string(), OrderDirection::Asc))
                .collect(),
        }
    }

    /// The leading ordering field, if any.
    #[must_use]
    pub fn leading(&self) -> Option<(&str, OrderDirection)> {
        self.fields
            .first()
            .map(|(field, direction)| (field.as_str(), *direction))
    }
}

///
/// SortError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    #[error("invalid sort direction '{token}' for field '{field}': expected 'asc' or 'desc'")]
    InvalidDirection { field: String, token: String },

    #[error("unknown sort field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' is not sortable")]
    FieldNotSortable { field: String },

    #[error("sort specification exceeds {max} keys: {found}")]
    TooManyKeys { found: usize, max: usize },
}

/// Validate a raw sort specification against an entity's schema and
/// sortable-field allow-list.
///
/// Output preserves input order; an empty input yields an empty spec, which
/// the keyset builder resolves to primary-key ascending.
pub fn validate(spec: &SortSpec, model: &EntityModel) -> Result<OrderSpec, SortError> {
    if spec.keys.len() > MAX_SORT_FIELDS {
        return Err(SortError::TooManyKeys {
            found: spec.keys.len(),
            max: MAX_SORT_FIELDS,
        });
    }

    let mut fields = Vec::with_capacity(spec.keys.len());

    for (field, token) in &spec.keys {
        let direction =
            OrderDirection::parse_token(token).ok_or_else(|| SortError::InvalidDirection {
                field: field.clone(),
                token: token.clone(),
            })?;

        if model.field(field).is_none() {
            return Err(SortError::UnknownField {
                field: field.clone(),
            });
        }

        if !model.is_sortable(field) {
            return Err(SortError::FieldNotSortable {
                field: field.clone(),
            });
        }

        fields.push((field.clone(), direction));
    }

    Ok(OrderSpec { fields })
}

///
/// TESTS
///

#[cfg(test)]
mod tests;
