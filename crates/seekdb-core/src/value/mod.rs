mod compare;


use crate::model::EntityFieldKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use uuid::Uuid;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp};

///
/// Value
///
/// Typed scalar carried through predicates, ordering keys, and cursor
/// boundaries. Every orderable variant has a total order defined by its
/// underlying type; `Uuid` and `Ulid` order as fixed-width byte strings.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Ulid(Ulid),
}

impl Value {
    /// Canonical variant rank used to totalize mixed-variant comparisons.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Text(_) => 4,
            Self::Timestamp(_) => 5,
            Self::Uuid(_) => 6,
            Self::Ulid(_) => 7,
        }
    }

    /// Whether this value inhabits the given schema field kind.
    ///
    /// `Null` inhabits no kind; cursor and boundary values must be concrete.
    #[must_use]
    pub const fn matches_kind(&self, kind: &EntityFieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), EntityFieldKind::Bool)
                | (Self::Int(_), EntityFieldKind::Int)
                | (Self::Uint(_), EntityFieldKind::Uint)
                | (Self::Text(_), EntityFieldKind::Text)
                | (Self::Timestamp(_), EntityFieldKind::Timestamp)
                | (Self::Uuid(_), EntityFieldKind::Uuid)
                | (Self::Ulid(_), EntityFieldKind::Ulid)
        )
    }

    /// Short variant label for diagnostics.
    #[must_use]
    pub const fn variant_label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
            Self::Uuid(_) => "uuid",
            Self::Ulid(_) => "ulid",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Ulid> for Value {
    fn from(value: Ulid) -> Self {
        Self::Ulid(value)
    }
}
