use super::{authorize, HasAnyAuthority, Predicate};
use crate::extractors::authenticated_claims::AuthenticatedClaims;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use domain::user::Authority;

/// Gate shared by the catalog resources (people, organizers, productions,
/// roles, contributions) for create/update/delete. Reads stay public; this is
/// a listings platform.
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
