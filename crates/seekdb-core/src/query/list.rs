use crate::{
    cursor::{ContinuationSignature, ContinuationToken, Cursor, CursorError},
    error::InternalError,
    obs::{MetricsEvent, sink::record},
    query::{
        Boundary, FilterError, PaginateError, Predicate, QuerySource, Storage,
        paginate::{effective_order, paginate},
    },
    response::{Continuation, Page, ResponseError},
    serialize,
    sort::{SortError, SortSpec, validate},
    traits::EntityKind,
};
use std::marker::PhantomData;
use thiserror::Error as ThisError;

///
/// ListError
///

#[derive(Debug, ThisError)]
pub enum ListError {
    #[error("page count is required for paginated execution")]
    CountRequired,

    #[error("a cursor token and an explicit boundary cannot be combined")]
    ConflictingBoundary,

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Paginate(#[from] PaginateError),

    #[error(transparent)]
    Cursor(#[from] CursorError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Execute(#[from] InternalError),
}

///
/// ListExecutor
///
/// Fluent paginated-list intent over one storage backend. Caller filters
/// are forwarded to the backend untouched; the executor owns sort
/// validation, boundary resolution, the fetch-`count+1` lookahead, and
/// continuation derivation.
///

pub struct ListExecutor<'a, S: Storage, E: EntityKind> {
    store: &'a S,
    debug: bool,
    predicate: Option<Predicate>,
    sort: SortSpec,
    count: Option<usize>,
    boundary: Boundary,
    cursor_token: Option<String>,
    _marker: PhantomData<E>,
}

impl<'a, S: Storage, E: EntityKind> ListExecutor<'a, S, E> {
    #[must_use]
    pub(crate) const fn new(store: &'a S, debug: bool) -> Self {
        Self {
            store,
            debug,
            predicate: None,
            sort: SortSpec::new(),
            count: None,
            boundary: Boundary::Unbounded,
            cursor_token: None,
            _marker: PhantomData,
        }
    }

    /// Add a caller filter, implicitly AND-ing with any existing filter.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = match self.predicate.take() {
            Some(existing) => Some(existing.and(predicate)),
            None => Some(predicate),
        };
        self
    }

    /// Replace the raw sort specification.
    #[must_use]
    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = spec;
        self
    }

    /// Append one raw `(field, direction-token)` sort key.
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort = self.sort.key(field, direction);
        self
    }

    /// Set the caller-visible page size. Required.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Start from an explicit boundary (offset scalar or decoded cursor).
    #[must_use]
    pub fn start(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Start from an opaque continuation token.
    #[must_use]
    pub fn cursor(mut self, token: impl Into<String>) -> Self {
        self.cursor_token = Some(token.into());
        self
    }

    /// Execute the listing: fetch `count+1` rows and peel the lookahead row
    /// into the next continuation.
    pub fn execute(self) -> Result<Page<E>, ListError> {
        let Self {
            store,
            debug,
            predicate,
            sort,
            count,
            boundary,
            cursor_token,
            _marker,
        } = self;

        let model = E::MODEL;

        let boundary_kind = if cursor_token.is_some() {
            "cursor"
        } else {
            boundary.kind_label()
        };
        record(MetricsEvent::ListStart {
            entity_path: model.path,
            boundary_kind,
        });

        let Some(count) = count else {
            return Err(ListError::CountRequired);
        };
        if count == 0 {
            return Err(ListError::Paginate(PaginateError::InvalidCount));
        }

        if let Some(predicate) = &predicate {
            predicate.validate(model)?;
        }

        let order = validate(&sort, model)?;
        let order = effective_order(model, &order);

        // The signature binds continuation tokens to this exact query shape;
        // windowing (count, boundary) is deliberately excluded.
        let filter_wire = predicate
            .as_ref()
            .map(serialize::serialize)
            .transpose()
            .map_err(InternalError::from)?;
        let signature =
            ContinuationSignature::compute(model.path, &order, filter_wire.as_deref());

        let boundary = match cursor_token {
            Some(token) => {
                if !boundary.is_unbounded() {
                    return Err(ListError::ConflictingBoundary);
                }

                let decoded = match ContinuationToken::decode(&token) {
                    Ok(decoded) => decoded,
                    Err(err) => {
                        record(MetricsEvent::CursorRejected {
                            entity_path: model.path,
                        });
                        return Err(err.into());
                    }
                };

                if let Err(err) = decoded.verify_signature(model.path, signature) {
                    record(MetricsEvent::CursorRejected {
                        entity_path: model.path,
                    });
                    return Err(err.into());
                }

                Boundary::Cursor(decoded.into_cursor())
            }
            None => boundary,
        };

        let fetch_count = count.saturating_add(1);

        let source = store.query::<E>();
        let source = match predicate {
            Some(predicate) => source.filter(predicate),
            None => source,
        };
        let source = paginate::<E, _>(source, &boundary, fetch_count, &order)?;

        let mut items = source.fetch()?;

        if items.len() > fetch_count {
            return Err(InternalError::executor_invariant(format!(
                "storage adapter returned {} rows for a limit of {fetch_count}",
                items.len()
            ))
            .into());
        }

        // Lookahead peel: callers get rows [0..count-1]; the continuation
        // comes from row `count`, which is excluded from the page.
        let next = if items.len() == fetch_count {
            let lookahead = items.pop().ok_or_else(|| {
                InternalError::executor_invariant("lookahead row vanished during peel")
            })?;

            let cursor = Cursor::project(&lookahead)?;
            let token = ContinuationToken::new(signature, cursor.clone());
            let encoded = token.encode().map_err(|err| {
                InternalError::executor_invariant(format!(
                    "continuation token failed to encode: {err}"
                ))
            })?;

            Some(Continuation::new(cursor, encoded))
        } else {
            None
        };

        if debug {
            tracing::debug!(
                entity = model.path,
                rows = items.len(),
                has_more = next.is_some(),
                boundary = boundary_kind,
                "list executed"
            );
        }
        record(MetricsEvent::ListFinish {
            entity_path: model.path,
            rows: items.len() as u64,
            has_more: next.is_some(),
        });

        Ok(Page::new(items, next))
    }
}
