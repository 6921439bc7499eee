//! SeekDB — keyset ("seek method") pagination over pluggable row stores.
//!
//! ## Crate layout
//! - `core`: values, schema metadata, sort validation, the keyset query
//!   builder, the paged list protocol, cursor codecs, and observability.
//! - `error`: the stable public error taxonomy mapped from core errors.
//!
//! The `prelude` module mirrors the surface used by calling services:
//! construct a [`prelude::Session`] over a storage adapter, build a listing
//! with filters/sort/count, and round-trip the opaque continuation token.

pub use seekdb_core as core;

mod error;

pub use error::{Error, ErrorKind, ErrorOrigin, QueryErrorKind};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{Error, ErrorKind, QueryErrorKind};
    pub use seekdb_core::{
        cursor::Cursor,
        model::{EntityFieldKind, EntityFieldModel, EntityModel},
        query::{Boundary, CmpOp, Predicate, QuerySource, Storage},
        response::{Continuation, Page},
        session::Session,
        sort::{OrderDirection, SortSpec},
        store::MemoryStore,
        traits::{EntityKind, EntitySchema, Path, RowValue},
        value::Value,
    };
}
