use super::{authorize, HasAnyAuthority, Predicate};
use crate::extractors::authenticated_claims::AuthenticatedClaims;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use domain::user::Authority;

/// Account management is admin-only.
pub(crate) async fn manage(
    State(app_state): State<AppState>,
    AuthenticatedClaims(claims): AuthenticatedClaims,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![Predicate::new(HasAnyAuthority(vec![Authority::Admin]))];
    authorize(&app_state, claims, request, next, checks).await
}
