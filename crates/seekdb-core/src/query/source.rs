use crate::{error::InternalError, query::Predicate, sort::OrderDirection, traits::EntityKind};

///
/// QuerySource
///
/// Narrow capability interface over one storage backend's query pipeline.
/// The pagination engine composes queries exclusively through this trait;
/// it never sees connection handles, SQL, or storage internals.
///
/// Contract for implementors:
/// - `filter` calls AND-compose.
/// - `order_by` calls append ordering keys in call order. Ties between rows
///   equal under every ordering key may be broken arbitrarily by the
///   backend; the engine does not append a primary-key tie-break.
/// - `limit` replaces any previous limit.
/// - `fetch` materializes at most `limit` rows in ordering-key order.
///

pub trait QuerySource<E: EntityKind>: Sized {
    /// AND a predicate onto the query.
    #[must_use]
    fn filter(self, predicate: Predicate) -> Self;

    /// Append one ordering key.
    #[must_use]
    fn order_by(self, field: &str, direction: OrderDirection) -> Self;

    /// Cap the number of materialized rows.
    #[must_use]
    fn limit(self, n: usize) -> Self;

    /// Execute and materialize the rows.
    fn fetch(self) -> Result<Vec<E>, InternalError>;
}

///
/// Storage
///
/// A backend capable of opening a query pipeline per entity type. One
/// adapter implements this per storage engine; the engine itself ships only
/// the in-memory reference adapter.
///

pub trait Storage {
    type Query<'a, E: EntityKind>: QuerySource<E>
    where
        Self: 'a;

    /// Open a fresh, unfiltered query over all rows of `E`.
    fn query<E: EntityKind>(&self) -> Self::Query<'_, E>;
}
