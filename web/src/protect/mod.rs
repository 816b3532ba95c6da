//! Per-route authorization rules.
//!
//! Each submodule pairs an endpoint family with the set of authorities allowed
//! to call it. The rules run as `axum::middleware::from_fn_with_state` route
//! layers after the bearer token has already been verified by the
//! [`AuthenticatedClaims`](crate::extractors::authenticated_claims::AuthenticatedClaims)
//! extractor, so a rule only ever sees a valid claim set.

pub(crate) mod catalog;
pub(crate) mod events;
pub(crate) mod transactions;
pub(crate) mod users;
pub(crate) mod venues;

use crate::{AppState, Error};
use axum::{async_trait, extract::Request, middleware::Next, response::IntoResponse};
use domain::error::{AuthErrorKind, DomainErrorKind, Error as DomainError};
use domain::jwt::AccessClaims;
use domain::user::Authority;

/// Trait representing a single authorization rule.
///
/// Implementors answer "may the holder of these verified claims proceed?".
/// Rules are evaluated in memory against the claim set; none of the current
/// rules touch the database, which keeps every deny side-effect free.
#[async_trait]
pub(crate) trait Check: Send + Sync {
    async fn eval(&self, app_state: &AppState, claims: &AccessClaims) -> bool;
}

/// A boxed [`Check`] ready to be evaluated by [`authorize`].
pub(crate) struct Predicate {
    predicate: Box<dyn Check>,
}

impl Predicate {
    pub(crate) fn new<C: Check + 'static>(predicate: C) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }

    pub(crate) async fn check(&self, app_state: &AppState, claims: &AccessClaims) -> bool {
        self.predicate.eval(app_state, claims).await
    }
}

/// Axum middleware body that enforces one or more [`Predicate`]s.
///
/// Each predicate is evaluated in the order supplied; if any rule returns
/// `false` the request is aborted with 403 and the standard envelope. When all
/// rules pass the wrapped handler (`next`) is executed.
pub(crate) async fn authorize(
    app_state: &AppState,
    claims: AccessClaims,
    request: Request,
    next: Next,
    checks: Vec<Predicate>,
) -> impl IntoResponse {
    for check in checks {
        if !check.check(app_state, &claims).await {
            return Error::from(DomainError::new(DomainErrorKind::Auth(
                AuthErrorKind::Forbidden,
            )))
            .into_response();
        }
    }
    next.run(request).await
}

/// Passes when the token's role is one of the listed authorities.
pub(crate) struct HasAnyAuthority(pub Vec<Authority>);

#[async_trait]
impl Check for HasAnyAuthority {
    async fn eval(&self, _app_state: &AppState, claims: &AccessClaims) -> bool {
        self.0.contains(&claims.role)
    }
}
