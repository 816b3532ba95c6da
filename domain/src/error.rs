//! Error types for the `domain` layer.
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. The intent is to translate errors between layers while maintaining
/// layer boundaries. Ex. `domain` is dependent on `entity_api`, and `web` is dependent on `domain`.
/// but `web` should not be dependent, directly, on `entity_api`. Each layer is free to define its own
/// error kinds to whatever richeness needed at that layer. Ultimately the various `error_kind`s are used
/// by `web` to return appropriate HTTP status codes and messages to the client.
///
/// The optional `message` carries user-facing wording for the response envelope
/// when the kind's default phrasing is too generic (e.g. distinguishing
/// "user account not found" from "venue not found").
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
    pub message: Option<String>,
}

impl Error {
    pub fn new(error_kind: DomainErrorKind) -> Self {
        Error {
            source: None,
            error_kind,
            message: None,
        }
    }

    pub fn with_message(error_kind: DomainErrorKind, message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind,
            message: Some(message.into()),
        }
    }
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    Auth(AuthErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    Config,
    Other(String),
}

/// Enum representing the various kinds of entity errors that can bubble up from the "Entity" layer (`entity_api` and `entity`).
/// These errors are translated from the `entity_api` layer to the `domain` layer and reduced to a subset of error kinds
/// that are relevant to the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    Unauthenticated,
    // A record that must be unique already exists, e.g. an ownership link
    // for an already claimed venue or event.
    Conflict,
    Other(String),
}

/// Enum representing failures while establishing who the caller is and what
/// they are allowed to do. Resolved entirely before business logic runs.
#[derive(Debug, PartialEq)]
pub enum AuthErrorKind {
    // No Authorization header was supplied.
    MissingToken,
    // The Authorization header does not use the Bearer scheme.
    MalformedHeader,
    // Signature, issuer, audience or expiry validation failed. Callers must
    // not be able to distinguish which.
    InvalidToken,
    // The token is valid but its role is not in the endpoint's allowed set.
    Forbidden,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let entity_error_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => EntityErrorKind::NotFound,
            EntityApiErrorKind::InvalidQueryTerm => EntityErrorKind::Invalid,
            EntityApiErrorKind::RecordUnauthenticated => EntityErrorKind::Unauthenticated,
            EntityApiErrorKind::RecordAlreadyExists => EntityErrorKind::Conflict,
            _ => EntityErrorKind::Other("EntityErrorKind".to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(entity_error_kind)),
            message: None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Auth(AuthErrorKind::InvalidToken),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A losing concurrent claim surfaces from the entity layer as
    // RecordAlreadyExists; it must stay distinguishable as a Conflict all the
    // way up so the endpoint can render 409 instead of a generic 500.
    #[test]
    fn record_already_exists_translates_to_conflict() {
        let entity_err = EntityApiError {
            source: None,
            error_kind: EntityApiErrorKind::RecordAlreadyExists,
        };

        let err = Error::from(entity_err);

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict))
        );
    }

    #[test]
    fn record_not_found_translates_to_not_found() {
        let entity_err = EntityApiError {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        };

        let err = Error::from(entity_err);

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
    }

    #[test]
    fn system_errors_translate_to_other() {
        let entity_err = EntityApiError {
            source: None,
            error_kind: EntityApiErrorKind::SystemError,
        };

        let err = Error::from(entity_err);

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Other(
                "EntityErrorKind".to_string()
            )))
        );
    }
}
