//! Module: query
//! Responsibility: the storage capability boundary, caller predicates, the
//! keyset query builder, and the paginated list executor.
//! Does not own: row materialization (storage adapters) or cursor token
//! wire formats (`cursor`).

mod boundary;
mod list;
mod paginate;
mod predicate;
mod source;

#[cfg(test)]
mod tests;

pub use boundary::Boundary;
pub use list::{ListError, ListExecutor};
pub use paginate::{PaginateError, effective_order, paginate};
pub use predicate::{CmpOp, FilterError, Predicate};
pub use source::{QuerySource, Storage};
