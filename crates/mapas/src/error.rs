use crate::{config::ConfigError, validate::DraftError};
use derive_more::Display;
use mapas_core::{
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
    query::QueryError,
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

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::Query(QueryErrorKind::NotFound))
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::NotFound => ErrorKind::Query(QueryErrorKind::NotFound),
            ErrorClass::InvariantViolation => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Validate(_) => Self::new(
                ErrorKind::Query(QueryErrorKind::Invalid),
                ErrorOrigin::Query,
                err.to_string(),
            ),

            QueryError::Page(_) => Self::new(
                ErrorKind::Query(QueryErrorKind::InvalidArgument),
                ErrorOrigin::Query,
                err.to_string(),
            ),

            QueryError::Execute(err) => err.into(),
        }
    }
}

impl From<DraftError> for Error {
    fn from(err: DraftError) -> Self {
        Self::new(ErrorKind::Draft, ErrorOrigin::Draft, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and presentation layers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ErrorKind {
    /// Configuration could not be loaded.
    Config,

    /// A creation draft failed form validation.
    Draft,

    /// The caller cannot remediate this.
    Internal,

    Query(QueryErrorKind),
}

///
/// QueryErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum QueryErrorKind {
    /// Query shape is invalid (unknown fields, wrong field kind).
    Invalid,

    /// A numeric argument is out of range (zero page size).
    InvalidArgument,

    /// The requested record does not exist.
    NotFound,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers and presentation layers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ErrorOrigin {
    Collection,
    Config,
    Draft,
    Engine,
    Query,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Collection => Self::Collection,
            CoreErrorOrigin::Engine => Self::Engine,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use mapas_core::query::{PageError, predicate::ValidateError};

    #[test]
    fn page_error_maps_to_invalid_argument() {
        let err: Error = QueryError::from(PageError::InvalidPageSize).into();

        assert_eq!(err.kind, ErrorKind::Query(QueryErrorKind::InvalidArgument));
        assert_eq!(err.origin, ErrorOrigin::Query);
        assert_eq!(err.message, "page size must be greater than zero");
    }

    #[test]
    fn validate_error_maps_to_invalid_query() {
        let err: Error = QueryError::from(ValidateError::UnknownField {
            field: "genre".to_string(),
        })
        .into();

        assert_eq!(err.kind, ErrorKind::Query(QueryErrorKind::Invalid));
    }

    #[test]
    fn not_found_keeps_collection_origin() {
        let err: Error = InternalError::not_found("agent", 9).into();

        assert!(err.is_not_found());
        assert_eq!(err.origin, ErrorOrigin::Collection);
        assert_eq!(err.to_string(), "agent not found: id 9");
    }

    #[test]
    fn draft_error_serializes_with_kind_and_origin() {
        let err: Error = DraftError::MissingField { field: "name" }.into();
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "Draft");
        assert_eq!(json["origin"], "Draft");
        assert_eq!(json["message"], "field 'name' is required");
    }
}
