//! Shared test fixtures: small entities with hand-rolled schema metadata,
//! plus seeding helpers for the in-memory store.

use crate::{
    model::{EntityFieldKind, EntityFieldModel, EntityModel},
    store::MemoryStore,
    traits::{EntitySchema, Path, RowValue},
    value::Value,
};

///
/// Person
/// Single-field primary key; `city` is filterable but not sortable.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Person {
    pub id: u64,
    pub name: String,
    pub city: String,
}

pub(crate) static PERSON_MODEL: EntityModel = EntityModel {
    path: "seekdb_core::test_support::Person",
    entity_name: "person",
    primary_key: &["id"],
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "name",
            kind: EntityFieldKind::Text,
        },
        EntityFieldModel {
            name: "city",
            kind: EntityFieldKind::Text,
        },
    ],
    sortable_fields: &["id", "name"],
    filterable_fields: &["name", "city"],
};

impl Path for Person {
    const PATH: &'static str = "seekdb_core::test_support::Person";
}

impl EntitySchema for Person {
    const MODEL: &'static EntityModel = &PERSON_MODEL;
}

impl RowValue for Person {
    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Uint(self.id)),
            "name" => Some(Value::Text(self.name.clone())),
            "city" => Some(Value::Text(self.city.clone())),
            _ => None,
        }
    }
}

pub(crate) const CITIES: [&str; 4] = ["Portland", "Washington", "Seattle", "Mountain View"];

/// Seed 100 people with ids 1..=100 and cities rotating through [`CITIES`].
pub(crate) fn seed_people(store: &MemoryStore) {
    store.insert_many((1..=100u64).map(|id| Person {
        id,
        name: format!("Person {id:03}"),
        city: CITIES[(id as usize - 1) % CITIES.len()].to_string(),
    }));
}

///
/// Tag
/// Two-valued `label` over a numeric id; both fields sortable.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Tag {
    pub id: u64,
    pub label: String,
}

pub(crate) static TAG_MODEL: EntityModel = EntityModel {
    path: "seekdb_core::test_support::Tag",
    entity_name: "tag",
    primary_key: &["id"],
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "label",
            kind: EntityFieldKind::Text,
        },
    ],
    sortable_fields: &["id", "label"],
    filterable_fields: &["label"],
};

impl Path for Tag {
    const PATH: &'static str = "seekdb_core::test_support::Tag";
}

impl EntitySchema for Tag {
    const MODEL: &'static EntityModel = &TAG_MODEL;
}

impl RowValue for Tag {
    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Uint(self.id)),
            "label" => Some(Value::Text(self.label.clone())),
            _ => None,
        }
    }
}

/// Seed 100 tags: ids 1..=50 labelled `a`, ids 51..=100 labelled `b`.
pub(crate) fn seed_tags(store: &MemoryStore) {
    store.insert_many((1..=100u64).map(|id| Tag {
        id,
        label: if id <= 50 { "a" } else { "b" }.to_string(),
    }));
}

///
/// Pair
/// Compound two-field primary key.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Pair {
    pub field1: u64,
    pub field2: u64,
}

pub(crate) static PAIR_MODEL: EntityModel = EntityModel {
    path: "seekdb_core::test_support::Pair",
    entity_name: "pair",
    primary_key: &["field1", "field2"],
    fields: &[
        EntityFieldModel {
            name: "field1",
            kind: EntityFieldKind::Uint,
        },
        EntityFieldModel {
            name: "field2",
            kind: EntityFieldKind::Uint,
        },
    ],
    sortable_fields: &["field1", "field2"],
    filterable_fields: &["field1", "field2"],
};

impl Path for Pair {
    const PATH: &'static str = "seekdb_core::test_support::Pair";
}

impl EntitySchema for Pair {
    const MODEL: &'static EntityModel = &PAIR_MODEL;
}

impl RowValue for Pair {
    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "field1" => Some(Value::Uint(self.field1)),
            "field2" => Some(Value::Uint(self.field2)),
            _ => None,
        }
    }
}

///
/// NoKey
/// Malformed-by-construction entity with an empty primary-key shape.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NoKey {
    pub id: u64,
}

pub(crate) static NOKEY_MODEL: EntityModel = EntityModel {
    path: "seekdb_core::test_support::NoKey",
    entity_name: "nokey",
    primary_key: &[],
    fields: &[EntityFieldModel {
        name: "id",
        kind: EntityFieldKind::Uint,
    }],
    sortable_fields: &["id"],
    filterable_fields: &["id"],
};

impl Path for NoKey {
    const PATH: &'static str = "seekdb_core::test_support::NoKey";
}

impl EntitySchema for NoKey {
    const MODEL: &'static EntityModel = &NOKEY_MODEL;
}

impl RowValue for NoKey {
    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Uint(self.id)),
            _ => None,
        }
    }
}
