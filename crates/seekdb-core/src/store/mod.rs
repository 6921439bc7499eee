//! Storage adapters.
//!
//! The engine talks to storage exclusively through
//! [`crate::query::Storage`] / [`crate::query::QuerySource`]; one adapter
//! implements those per backend. Only the in-memory reference adapter ships
//! here — real relational execution is an external collaborator.

mod memory;

pub use memory::{MemoryQuery, MemoryStore};
