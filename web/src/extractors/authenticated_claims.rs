use crate::{AppState, Error};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use domain::error::{AuthErrorKind, DomainErrorKind, Error as DomainError};
use domain::jwt::{verify_access_token, AccessClaims};
use log::*;

/// Extracts and verifies the bearer token from the `Authorization` header.
///
/// Runs entirely in memory; no repository access happens before a request is
/// denied. The rejection ordering is part of the external contract:
/// no header at all is a 401, a header that is not `Bearer <token>` is a 400,
/// and a token that fails verification is a 401.
pub(crate) struct AuthenticatedClaims(pub AccessClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedClaims {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).ok_or_else(|| {
            debug!("Request rejected: no Authorization header");
            Error::from(DomainError::new(DomainErrorKind::Auth(
                AuthErrorKind::MissingToken,
            )))
        })?;

        let header = header.to_str().map_err(|_| {
            Error::from(DomainError::new(DomainErrorKind::Auth(
                AuthErrorKind::MalformedHeader,
            )))
        })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Request rejected: Authorization header is not a Bearer token");
            Error::from(DomainError::new(DomainErrorKind::Auth(
                AuthErrorKind::MalformedHeader,
            )))
        })?;

        let claims = verify_access_token(&state.config, token)?;

        Ok(AuthenticatedClaims(claims))
    }
}
