use crate::{
    error::InternalError,
    query::{Predicate, QuerySource, Storage},
    sort::OrderDirection,
    traits::{EntityKind, RowValue},
    value::canonical_cmp,
};
use std::{
    any::{Any, TypeId},
    cell::RefCell,
    cmp::Ordering,
    collections::HashMap,
};

///
/// MemoryStore
///
/// Reference adapter: rows per entity type held in insertion order, queried
/// by full scan + canonical stable sort. Like the engine it serves, it is a
/// per-thread structure (interior mutability via `RefCell`, no locking);
/// share one per thread or test.
///

#[derive(Default)]
pub struct MemoryStore {
    tables: RefCell<HashMap<TypeId, Box<dyn Any>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row. No uniqueness is enforced; seeding duplicate
    /// primary keys is allowed so tests can exercise corruption handling.
    pub fn insert<E: EntityKind>(&self, row: E) {
        let mut tables = self.tables.borrow_mut();
        let table = tables
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<E>::new()));

        if let Some(rows) = table.downcast_mut::<Vec<E>>() {
            rows.push(row);
        }
    }

    pub fn insert_many<E: EntityKind>(&self, rows: impl IntoIterator<Item = E>) {
        for row in rows {
            self.insert(row);
        }
    }

    #[must_use]
    pub fn row_count<E: EntityKind>(&self) -> usize {
        self.tables
            .borrow()
            .get(&TypeId::of::<E>())
            .and_then(|table| table.downcast_ref::<Vec<E>>())
            .map_or(0, Vec::len)
    }

    fn snapshot<E: EntityKind>(&self) -> Vec<E> {
        self.tables
            .borrow()
            .get(&TypeId::of::<E>())
            .and_then(|table| table.downcast_ref::<Vec<E>>())
            .cloned()
            .unwrap_or_default()
    }
}

impl Storage for MemoryStore {
    type Query<'a, E: EntityKind> = MemoryQuery<'a, E>;

    fn query<E: EntityKind>(&self) -> MemoryQuery<'_, E> {
        MemoryQuery {
            store: self,
            predicates: Vec::new(),
            order: Vec::new(),
            limit: None,
            _marker: std::marker::PhantomData,
        }
    }
}

///
/// MemoryQuery
///
/// Accumulated query state over a [`MemoryStore`]. Rows equal under every
/// ordering key keep their insertion order (stable sort), which makes this
/// adapter fully deterministic for repeated identical queries.
///

pub struct MemoryQuery<'a, E: EntityKind> {
    store: &'a MemoryStore,
    predicates: Vec<Predicate>,
    order: Vec<(String, OrderDirection)>,
    limit: Option<usize>,
    _marker: std::marker::PhantomData<E>,
}

impl<E: EntityKind> QuerySource<E> for MemoryQuery<'_, E> {
    fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    fn order_by(mut self, field: &str, direction: OrderDirection) -> Self {
        self.order.push((field.to_string(), direction));
        self
    }

    fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    fn fetch(self) -> Result<Vec<E>, InternalError> {
        let mut rows = self.store.snapshot::<E>();

        rows.retain(|row| self.predicates.iter().all(|predicate| predicate.matches(row)));

        if !self.order.is_empty() {
            rows.sort_by(|left, right| compare_rows(left, right, &self.order));
        }

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }
}

// Compare two rows under the ordering key, first non-equal field wins.
// A missing field value sorts before any present value; direction applies
// after the raw comparison.
fn compare_rows<R: RowValue>(left: &R, right: &R, order: &[(String, OrderDirection)]) -> Ordering {
    for (field, direction) in order {
        let raw = match (left.field_value(field), right.field_value(field)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left_value), Some(right_value)) => canonical_cmp(&left_value, &right_value),
        };

        let ordering = match direction {
            OrderDirection::Asc => raw,
            OrderDirection::Desc => raw.reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{
        query::{Predicate, QuerySource as _, Storage as _},
        sort::OrderDirection,
        store::MemoryStore,
        test_support::{Person, seed_people},
    };

    #[test]
    fn fetch_applies_filter_order_and_limit() {
        let store = MemoryStore::new();
        seed_people(&store);
        assert_eq!(store.row_count::<Person>(), 100);

        let rows = store
            .query::<Person>()
            .filter(Predicate::eq("city", "Portland"))
            .order_by("id", OrderDirection::Desc)
            .limit(3)
            .fetch()
            .expect("query should fetch");

        let ids: Vec<u64> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![97, 93, 89]);
        assert!(rows.iter().all(|row| row.city == "Portland"));
    }

    #[test]
    fn unordered_fetch_preserves_insertion_order() {
        let store = MemoryStore::new();
        seed_people(&store);

        let rows = store
            .query::<Person>()
            .limit(5)
            .fetch()
            .expect("query should fetch");

        let ids: Vec<u64> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ties_keep_insertion_order_under_stable_sort() {
        let store = MemoryStore::new();
        seed_people(&store);

        let rows = store
            .query::<Person>()
            .order_by("city", OrderDirection::Asc)
            .fetch()
            .expect("query should fetch");

        // Mountain View sorts first; its members appear in id order.
        let first: Vec<u64> = rows.iter().take(3).map(|row| row.id).collect();
        assert_eq!(first, vec![4, 8, 12]);
    }

    #[test]
    fn empty_table_fetches_empty() {
        let store = MemoryStore::new();

        let rows = store
            .query::<Person>()
            .limit(10)
            .fetch()
            .expect("query should fetch");

        assert!(rows.is_empty());
    }
}
