use super::{authorize, HasAnyAuthority, Predicate};
use crate::extractors::authenticated_claims::AuthenticatedClaims;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use domain::user::Authority;

/// Gate for `POST /venues/claim-venue/{id}`: every signed-in authority may
/// claim a venue.
pub(crate) async fn claim(
    State(app_state): State<AppState>,
    AuthenticatedClaims(claims): AuthenticatedClaims,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![Predicate::new(HasAnyAuthority(vec![
        Authority::Admin,
        Authority::User,
        Authority::Developer,
        Authority::ClaimsManager,
    ]))];
    authorize(&app_state, claims, request, next, checks).await
}

/// Gate for venue create/update/delete.
pub(crate) async fn modify(
    State(app_state): State<AppState>,
    AuthenticatedClaims(claims): AuthenticatedClaims,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![Predicate::new(HasAnyAuthority(vec![
        Authority::Admin,
        Authority::Developer,
    ]))];
    authorize(&app_state, claims, request, next, checks).await
}
