use seekdb_core::{
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
    query::{ListError, PaginateError},
    response::ResponseError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// Whether the caller can remediate this error by fixing the request.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Query(
                QueryErrorKind::Invalid | QueryErrorKind::Unsupported | QueryErrorKind::NotFound
            )
        )
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::Corruption | ErrorClass::InvariantViolation => ErrorKind::Corruption,
            ErrorClass::NotFound => ErrorKind::Query(QueryErrorKind::NotFound),
            ErrorClass::Unsupported => ErrorKind::Query(QueryErrorKind::Unsupported),
            ErrorClass::InvalidInput => ErrorKind::Query(QueryErrorKind::Invalid),
            ErrorClass::Internal => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<ListError> for Error {
    fn from(err: ListError) -> Self {
        match err {
            ListError::CountRequired | ListError::ConflictingBoundary => Self::new(
                ErrorKind::Query(QueryErrorKind::Invalid),
                ErrorOrigin::Query,
                err.to_string(),
            ),

            ListError::Sort(_) => Self::new(
                ErrorKind::Query(QueryErrorKind::Invalid),
                ErrorOrigin::Sort,
                err.to_string(),
            ),

            ListError::Filter(_) => Self::new(
                ErrorKind::Query(QueryErrorKind::Invalid),
                ErrorOrigin::Query,
                err.to_string(),
            ),

            ListError::Cursor(_) => Self::new(
                ErrorKind::Query(QueryErrorKind::Invalid),
                ErrorOrigin::Cursor,
                err.to_string(),
            ),

            ListError::Paginate(inner) => inner.into(),

            ListError::Response(inner) => inner.into(),

            ListError::Execute(inner) => inner.into(),
        }
    }
}

impl From<PaginateError> for Error {
    fn from(err: PaginateError) -> Self {
        match err {
            // Schema incompatible with keyset pagination: a configuration
            // error, not malformed input.
            PaginateError::MissingPrimaryKey { .. }
            | PaginateError::UnsupportedCompoundKey { .. } => Self::new(
                ErrorKind::Query(QueryErrorKind::Unsupported),
                ErrorOrigin::Query,
                err.to_string(),
            ),

            PaginateError::InvalidCount | PaginateError::InvalidBoundaryType { .. } => Self::new(
                ErrorKind::Query(QueryErrorKind::Invalid),
                ErrorOrigin::Query,
                err.to_string(),
            ),

            PaginateError::Invariant(inner) => inner.into(),
        }
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::NotFound { .. } => Self::new(
                ErrorKind::Query(QueryErrorKind::NotFound),
                ErrorOrigin::Response,
                err.to_string(),
            ),

            // A unique key matching more than one row is broken schema
            // state; it must abort, never silently pick a row.
            ResponseError::NotUnique { .. } => Self::new(
                ErrorKind::Corruption,
                ErrorOrigin::Response,
                err.to_string(),
            ),
        }
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and API surfaces.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Query(QueryErrorKind),

    /// A uniqueness or schema invariant is broken in the stored data.
    Corruption,

    /// The caller cannot remediate this.
    Internal,
}

///
/// QueryErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryErrorKind {
    /// Query shape is invalid (unknown fields, bad predicates, malformed
    /// cursors, bad boundaries).
    Invalid,

    /// The query is valid but requests an unsupported feature.
    Unsupported,

    /// Valid query, but no rows matched.
    NotFound,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Serialize,
    Schema,
    Sort,
    Cursor,
    Query,
    Response,
    Executor,
    Store,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Serialize => Self::Serialize,
            CoreErrorOrigin::Schema => Self::Schema,
            CoreErrorOrigin::Sort => Self::Sort,
            CoreErrorOrigin::Cursor => Self::Cursor,
            CoreErrorOrigin::Query => Self::Query,
            CoreErrorOrigin::Response => Self::Response,
            CoreErrorOrigin::Executor => Self::Executor,
            CoreErrorOrigin::Store => Self::Store,
        }
    }
}

///
/// TESTS
///
