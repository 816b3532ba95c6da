use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::controller::ApiResponse;
use domain::error::{
    AuthErrorKind, DomainErrorKind, EntityErrorKind, Error as DomainError, InternalErrorKind,
};
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(pub(crate) DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// The outermost mapping from the domain's error-kind tree to HTTP statuses and
// the generic response envelope. This is a closed set: anything unmapped is a
// 500 and the underlying error stays in the server log, never in the body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_code, default_message) = match &self.0.error_kind {
            DomainErrorKind::Auth(auth_error_kind) => match auth_error_kind {
                AuthErrorKind::MissingToken => {
                    (StatusCode::UNAUTHORIZED, "Unauthorized", "no token provided")
                }
                AuthErrorKind::MalformedHeader => {
                    (StatusCode::BAD_REQUEST, "BadRequest", "wrong format")
                }
                AuthErrorKind::InvalidToken => {
                    (StatusCode::UNAUTHORIZED, "Unauthorized", "invalid token")
                }
                AuthErrorKind::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "not allowed"),
            },
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => (StatusCode::NOT_FOUND, "NotFound", "not found"),
                    EntityErrorKind::Invalid => {
                        (StatusCode::BAD_REQUEST, "BadRequest", "invalid request")
                    }
                    EntityErrorKind::Unauthenticated => (
                        StatusCode::UNAUTHORIZED,
                        "Unauthorized",
                        "invalid email or password",
                    ),
                    EntityErrorKind::Conflict => {
                        (StatusCode::CONFLICT, "AlreadyClaimed", "already claimed")
                    }
                    EntityErrorKind::Other(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "ServerError",
                        "internal server error",
                    ),
                },
                InternalErrorKind::Config | InternalErrorKind::Other(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ServerError",
                    "internal server error",
                ),
            },
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {:?}", self.0);
        }

        let message = self
            .0
            .message
            .clone()
            .unwrap_or_else(|| default_message.to_string());

        (status, Json(ApiResponse::<()>::error(message, error_code))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
