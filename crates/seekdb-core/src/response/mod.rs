pub mod paged;

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    traits::EntityKind,
};
use derive_more::{Deref, IntoIterator};
use thiserror::Error as ThisError;

// re-exports
pub use paged::{Continuation, Page};

///
/// ResponseError
/// Errors related to interpreting a materialized response.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ResponseError {
    #[error("expected exactly one row, found 0 (entity {entity})")]
    NotFound { entity: &'static str },

    #[error("expected exactly one row, found {count} (entity {entity})")]
    NotUnique { entity: &'static str, count: u64 },
}

impl ResponseError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            // More than one row behind a unique key is broken schema state,
            // not caller error; it must abort the call.
            Self::NotUnique { .. } => ErrorClass::Corruption,
        }
    }
}

impl From<ResponseError> for InternalError {
    fn from(err: ResponseError) -> Self {
        Self::new(err.class(), ErrorOrigin::Response, err.to_string())
    }
}

///
/// Response
/// Materialized query result: rows in ordering-key order.
///

#[derive(Debug, Deref, IntoIterator)]
pub struct Response<E: EntityKind>(pub Vec<E>);

impl<E: EntityKind> Response<E> {
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.0.len() as u64
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn require_one(&self) -> Result<(), ResponseError> {
        match self.count() {
            1 => Ok(()),
            0 => Err(ResponseError::NotFound { entity: E::PATH }),
            n => Err(ResponseError::NotUnique {
                entity: E::PATH,
                count: n,
            }),
        }
    }

    /// Consume this response as exactly one row.
    pub fn row(self) -> Result<E, ResponseError> {
        self.require_one()?;

        // Cardinality was just enforced.
        self.0
            .into_iter()
            .next()
            .ok_or(ResponseError::NotFound { entity: E::PATH })
    }

    /// Consume this response as at most one row.
    pub fn try_row(self) -> Result<Option<E>, ResponseError> {
        match self.count() {
            0 => Ok(None),
            1 => Ok(self.0.into_iter().next()),
            n => Err(ResponseError::NotUnique {
                entity: E::PATH,
                count: n,
            }),
        }
    }

    #[must_use]
    pub fn rows(self) -> Vec<E> {
        self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{Response, ResponseError};
    use crate::{
        error::{ErrorClass, InternalError},
        test_support::Person,
        traits::Path as _,
    };

    fn person(id: u64) -> Person {
        Person {
            id,
            name: format!("Person {id:03}"),
            city: "Portland".to_string(),
        }
    }

    #[test]
    fn row_requires_exactly_one() {
        let row = Response(vec![person(1)]).row().expect("one row should pass");
        assert_eq!(row.id, 1);

        let err = Response::<Person>(vec![]).row().expect_err("zero rows");
        assert_eq!(err, ResponseError::NotFound { entity: Person::PATH });

        let err = Response(vec![person(1), person(1)])
            .row()
            .expect_err("two rows");
        assert_eq!(
            err,
            ResponseError::NotUnique {
                entity: Person::PATH,
                count: 2,
            }
        );
    }

    #[test]
    fn try_row_tolerates_absence_but_not_duplication() {
        assert_eq!(
            Response::<Person>(vec![]).try_row().expect("zero rows ok"),
            None
        );
        assert!(Response(vec![person(1), person(1)]).try_row().is_err());
    }

    #[test]
    fn duplicate_unique_match_classifies_as_corruption() {
        let err: InternalError = ResponseError::NotUnique {
            entity: Person::PATH,
            count: 2,
        }
        .into();

        assert_eq!(err.class, ErrorClass::Corruption);
    }
}
