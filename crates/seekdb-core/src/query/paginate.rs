use crate::{
    error::InternalError,
    model::EntityModel,
    query::{Boundary, CmpOp, Predicate, QuerySource},
    sort::{OrderDirection, OrderSpec},
    traits::EntityKind,
};
use thiserror::Error as ThisError;

///
/// PaginateError
///
/// Keyset query construction failures. `MissingPrimaryKey` and
/// `UnsupportedCompoundKey` are configuration errors (the schema is
/// incompatible with keyset pagination); the rest are caller input errors.
///

#[derive(Debug, ThisError)]
pub enum PaginateError {
    #[error("page count must be a positive integer")]
    InvalidCount,

    #[error("entity '{entity}' declares no primary key fields")]
    MissingPrimaryKey { entity: &'static str },

    #[error("unsupported compound-key pagination for '{entity}': {reason}")]
    UnsupportedCompoundKey {
        entity: &'static str,
        reason: String,
    },

    #[error("boundary type mismatch for '{entity}': {reason}")]
    InvalidBoundaryType {
        entity: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Invariant(#[from] InternalError),
}

/// Resolve the effective ordering key for one query.
///
/// An empty caller ordering defaults to every primary-key field ascending.
/// A caller-supplied ordering is used exactly as validated; the primary key
/// is NOT appended, so ties among non-unique sort fields are broken by the
/// storage backend.
#[must_use]
pub fn effective_order(model: &EntityModel, order: &OrderSpec) -> OrderSpec {
    if order.is_empty() {
        OrderSpec::primary_key(model)
    } else {
        order.clone()
    }
}

/// Rewrite a base query into its keyset-paginated form.
///
/// The rewritten query (a) filters to rows at-or-after the boundary in the
/// sort order, (b) orders rows by the full effective ordering key, and
/// (c) limits to `count` rows. No execution happens here.
///
/// The resume predicate is intentionally built from the leading ordering
/// field only. That is exact when the leading field alone is selective
/// (the primary key) and approximate for compound sorts; multi-column
/// lexicographic composition is out of scope.
pub fn paginate<E, Q>(
    source: Q,
    boundary: &Boundary,
    count: usize,
    order: &OrderSpec,
) -> Result<Q, PaginateError>
where
    E: EntityKind,
    Q: QuerySource<E>,
{
    let model = E::MODEL;

    if count == 0 {
        return Err(PaginateError::InvalidCount);
    }

    let pk_fields = model.primary_key_fields()?;
    let Some(first_pk) = pk_fields.first() else {
        return Err(PaginateError::MissingPrimaryKey { entity: model.path });
    };

    let order = effective_order(model, order);

    let source = match boundary {
        Boundary::Unbounded => source,

        Boundary::Offset(value) => {
            if pk_fields.len() > 1 {
                return Err(PaginateError::UnsupportedCompoundKey {
                    entity: model.path,
                    reason: "a scalar offset cannot address a compound primary key".to_string(),
                });
            }

            if !value.matches_kind(&first_pk.kind) {
                return Err(PaginateError::InvalidBoundaryType {
                    entity: model.path,
                    reason: format!(
                        "offset value {value:?} does not inhabit primary key kind {}",
                        first_pk.kind.label()
                    ),
                });
            }

            // Inclusive: resumption starts at the boundary row itself.
            source.filter(Predicate::cmp(first_pk.name, CmpOp::Ge, value.clone()))
        }

        Boundary::Cursor(cursor) => {
            cursor
                .check_shape(model.path, &pk_fields)
                .map_err(|err| PaginateError::InvalidBoundaryType {
                    entity: model.path,
                    reason: err.to_string(),
                })?;

            // Effective order is never empty, so `leading` always resolves.
            let Some((leading_field, direction)) = order.leading() else {
                return Err(InternalError::query_invariant(
                    "effective ordering key resolved to zero fields",
                )
                .into());
            };

            let Some(value) = cursor.value(leading_field) else {
                return Err(PaginateError::UnsupportedCompoundKey {
                    entity: model.path,
                    reason: format!(
                        "leading sort field '{leading_field}' is not part of the cursor \
                         projection; the resume predicate cannot be reduced to a single column"
                    ),
                });
            };

            // Inclusive and direction-aware: the lookahead row peeled off
            // the previous page is the first row of this one.
            let op = match direction {
                OrderDirection::Asc => CmpOp::Ge,
                OrderDirection::Desc => CmpOp::Le,
            };

            source.filter(Predicate::cmp(leading_field, op, value.clone()))
        }
    };

    let source = order
        .fields
        .iter()
        .fold(source, |source, (field, direction)| {
            source.order_by(field, *direction)
        });

    Ok(source.limit(count))
}
