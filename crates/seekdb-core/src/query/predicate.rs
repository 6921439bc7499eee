use crate::{
    model::EntityModel,
    traits::RowValue,
    value::{Value, strict_order_cmp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// CmpOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CmpOp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

///
/// Predicate
///
/// Equality/range row constraint. Caller-supplied predicates are opaque to
/// the pagination engine and forwarded to the storage adapter as-is; the
/// engine itself only ever constructs `Eq` (retrieve) and `Ge`/`Le`
/// (keyset resume) comparisons.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Predicate {
    Cmp {
        field: String,
        op: CmpOp,
        value: Value,
    },
    And(Vec<Predicate>),
}

impl Predicate {
    #[must_use]
    pub fn cmp(field: impl Into<String>, op: CmpOp, value: impl Into<Value>) -> Self {
        Self::Cmp {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(field, CmpOp::Eq, value)
    }

    #[must_use]
    pub fn ge(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(field, CmpOp::Ge, value)
    }

    #[must_use]
    pub fn le(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(field, CmpOp::Le, value)
    }

    /// AND-compose with another predicate, flattening where possible.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut parts) => {
                parts.push(other);
                Self::And(parts)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Evaluate this predicate against one row.
    ///
    /// A missing field or a variant mismatch between the row value and the
    /// predicate value is a non-match; no implicit coercion is performed.
    pub fn matches<R: RowValue>(&self, row: &R) -> bool {
        match self {
            Self::Cmp { field, op, value } => {
                let Some(actual) = row.field_value(field) else {
                    return false;
                };
                let Some(ordering) = strict_order_cmp(&actual, value) else {
                    return false;
                };

                match op {
                    CmpOp::Eq => ordering == Ordering::Equal,
                    CmpOp::Lt => ordering == Ordering::Less,
                    CmpOp::Le => ordering != Ordering::Greater,
                    CmpOp::Gt => ordering == Ordering::Greater,
                    CmpOp::Ge => ordering != Ordering::Less,
                }
            }
            Self::And(parts) => parts.iter().all(|part| part.matches(row)),
        }
    }

    /// Validate every referenced field against the entity's schema and
    /// filterable allow-list.
    pub(crate) fn validate(&self, model: &EntityModel) -> Result<(), FilterError> {
        match self {
            Self::Cmp { field, .. } => {
                if model.field(field).is_none() {
                    return Err(FilterError::UnknownField {
                        field: field.clone(),
                    });
                }

                if !model.is_filterable(field) {
                    return Err(FilterError::FieldNotFilterable {
                        field: field.clone(),
                    });
                }

                Ok(())
            }
            Self::And(parts) => parts.iter().try_for_each(|part| part.validate(model)),
        }
    }
}

///
/// FilterError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum FilterError {
    #[error("unknown filter field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' is not filterable")]
    FieldNotFilterable { field: String },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{CmpOp, FilterError, Predicate};
    use crate::{
        test_support::{PERSON_MODEL, Person},
        value::Value,
    };

    fn row() -> Person {
        Person {
            id: 10,
            name: "Person 010".to_string(),
            city: "Seattle".to_string(),
        }
    }

    #[test]
    fn comparison_operators_follow_strict_ordering() {
        assert!(Predicate::eq("id", 10u64).matches(&row()));
        assert!(Predicate::ge("id", 10u64).matches(&row()));
        assert!(Predicate::le("id", 10u64).matches(&row()));
        assert!(Predicate::cmp("id", CmpOp::Gt, 9u64).matches(&row()));
        assert!(!Predicate::cmp("id", CmpOp::Lt, 10u64).matches(&row()));
    }

    #[test]
    fn missing_fields_and_variant_mismatches_do_not_match() {
        assert!(!Predicate::eq("ghost", 1u64).matches(&row()));
        // row value is Uint, predicate value is Int: no implicit coercion
        assert!(!Predicate::eq("id", 10i64).matches(&row()));
    }

    #[test]
    fn and_flattens_and_requires_all_parts() {
        let predicate = Predicate::eq("city", "Seattle")
            .and(Predicate::ge("id", 5u64))
            .and(Predicate::le("id", 20u64));

        assert!(matches!(&predicate, Predicate::And(parts) if parts.len() == 3));
        assert!(predicate.matches(&row()));
        assert!(!predicate.and(Predicate::eq("city", "Portland")).matches(&row()));
    }

    #[test]
    fn validate_enforces_schema_and_filterable_allow_list() {
        Predicate::eq("city", "Seattle")
            .validate(&PERSON_MODEL)
            .expect("filterable field should validate");

        assert_eq!(
            Predicate::eq("ghost", 1u64).validate(&PERSON_MODEL),
            Err(FilterError::UnknownField {
                field: "ghost".to_string(),
            })
        );

        // `id` is declared but not in the filterable allow-list
        assert_eq!(
            Predicate::eq("id", 1u64).validate(&PERSON_MODEL),
            Err(FilterError::FieldNotFilterable {
                field: "id".to_string(),
            })
        );

        let nested = Predicate::eq("city", "Seattle").and(Predicate::eq("id", 1u64));
        assert!(nested.validate(&PERSON_MODEL).is_err());
    }

    #[test]
    fn serializes_deterministically_for_signatures() {
        let predicate = Predicate::eq("city", Value::Text("Portland".to_string()));
        let first = crate::serialize::serialize(&predicate).expect("predicate should serialize");
        let second = crate::serialize::serialize(&predicate).expect("predicate should serialize");

        assert_eq!(first, second);
    }
}
