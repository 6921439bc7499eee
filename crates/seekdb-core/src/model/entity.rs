use crate::{error::InternalError, model::field::EntityFieldModel};

///
/// EntityModel
/// Minimal runtime model for one entity.
///
/// `primary_key` is the ordered field set forming the entity's unique
/// identity; its cardinality is fixed per entity type. `sortable_fields`
/// and `filterable_fields` are the caller-facing allow-lists consulted by
/// sort and filter validation.
///

pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in tokens and routing.
    pub entity_name: &'static str,
    /// Ordered primary-key field names (point at entries in `fields`).
    pub primary_key: &'static [&'static str],
    /// Ordered field list (authoritative for runtime planning).
    pub fields: &'static [EntityFieldModel],
    /// Fields callers may sort by.
    pub sortable_fields: &'static [&'static str],
    /// Fields callers may filter by.
    pub filterable_fields: &'static [&'static str],
}

impl EntityModel {
    /// Look up one field model by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static EntityFieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn is_sortable(&self, name: &str) -> bool {
        self.sortable_fields.contains(&name)
    }

    #[must_use]
    pub fn is_filterable(&self, name: &str) -> bool {
        self.filterable_fields.contains(&name)
    }

    /// Resolve the primary-key field models in declaration order.
    ///
    /// A primary-key name that does not resolve to a declared field is a
    /// schema invariant violation, not caller error.
    pub fn primary_key_fields(&self) -> Result<Vec<&'static EntityFieldModel>, InternalError> {
        self.primary_key
            .iter()
            .map(|name| {
                self.field(name).ok_or_else(|| {
                    InternalError::schema_invariant(format!(
                        "primary key field '{name}' is not declared on entity '{}'",
                        self.path
                    ))
                })
            })
            .collect()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::model::{EntityFieldKind, EntityFieldModel, EntityModel};

    const MODEL: EntityModel = EntityModel {
        path: "seekdb_core::model::tests::Widget",
        entity_name: "widget",
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
        ],
        sortable_fields: &["id", "name"],
        filterable_fields: &["name"],
    };

    const BROKEN: EntityModel = EntityModel {
        path: "seekdb_core::model::tests::Widget",
        entity_name: "widget",
        primary_key: &["missing"],
        fields: MODEL.fields,
        sortable_fields: MODEL.sortable_fields,
        filterable_fields: MODEL.filterable_fields,
    };

    #[test]
    fn field_lookup_and_allow_lists() {
        assert_eq!(MODEL.field("id").map(|f| f.kind), Some(EntityFieldKind::Uint));
        assert!(MODEL.field("ghost").is_none());
        assert!(MODEL.is_sortable("name"));
        assert!(!MODEL.is_filterable("id"));
    }

    #[test]
    fn primary_key_fields_resolve_in_order() {
        let fields = MODEL.primary_key_fields().expect("pk should resolve");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "id");
    }

    #[test]
    fn undeclared_primary_key_field_is_a_schema_invariant() {
        let err = BROKEN
            .primary_key_fields()
            .expect_err("undeclared pk field should be rejected");

        assert_eq!(
            err.class,
            crate::error::ErrorClass::InvariantViolation
        );
    }
}
