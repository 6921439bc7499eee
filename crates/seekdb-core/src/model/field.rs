///
/// EntityFieldModel
/// Runtime field metadata used by planning and validation.
///

#[derive(Debug)]
pub struct EntityFieldModel {
    /// Field name as used in predicates, ordering keys, and cursors.
    pub name: &'static str,
    /// Runtime type shape (a lossy projection of the schema type).
    pub kind: EntityFieldKind,
}

///
/// EntityFieldKind
///
/// Minimal type surface needed by boundary/cursor validation.
/// Aligned with `Value` variants.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    Bool,
    Int,
    Uint,
    Text,
    Timestamp,
    Uuid,
    Ulid,

    /// Marker for fields that are not filterable or sortable.
    Unsupported,
}

impl EntityFieldKind {
    /// Short label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Ulid => "ulid",
            Self::Unsupported => "unsupported",
        }
    }
}
