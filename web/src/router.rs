use crate::{controller::health_check_controller, params, protect, AppState};
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::controller::{
    contribution_controller, event_controller, organizer_controller, person_controller,
    production_controller, role_controller, transaction_controller, user_controller,
    user_session_controller, venue_controller,
};

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Marquee Platform API"
        ),
        paths(
            contribution_controller::create,
            contribution_controller::update,
            contribution_controller::index,
            contribution_controller::read,
            contribution_controller::delete,
            event_controller::create,
            event_controller::update,
            event_controller::index,
            event_controller::read,
            event_controller::delete,
            event_controller::claim,
            organizer_controller::create,
            organizer_controller::update,
            organizer_controller::index,
            organizer_controller::read,
            organizer_controller::delete,
            person_controller::create,
            person_controller::update,
            person_controller::index,
            person_controller::read,
            person_controller::delete,
            production_controller::create,
            production_controller::update,
            production_controller::index,
            production_controller::read,
            production_controller::delete,
            role_controller::create,
            role_controller::update,
            role_controller::index,
            role_controller::read,
            role_controller::delete,
            transaction_controller::create,
            transaction_controller::index,
            transaction_controller::read,
            user_controller::create,
            user_controller::update,
            user_controller::index,
            user_controller::read,
            user_controller::delete,
            user_session_controller::login,
            venue_controller::create,
            venue_controller::update,
            venue_controller::index,
            venue_controller::read,
            venue_controller::delete,
            venue_controller::claim,
        ),
        components(
            schemas(
                domain::contributions::Model,
                domain::events::Model,
                domain::jwt::Jwt,
                domain::organizers::Model,
                domain::people::Model,
                domain::productions::Model,
                domain::roles::Model,
                domain::transactions::Model,
                domain::user::Credentials,
                domain::user_authorities::Model,
                domain::users::Model,
                domain::venues::Model,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "marquee_platform", description = "Marquee theatrical-event listings API")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Defines the bearer token authentication requirement for gaining access to
// our protected API endpoints for OpenAPI.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned from POST /api/login"))
                        .build(),
                ),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(contribution_routes(app_state.clone()))
        .merge(event_routes(app_state.clone()))
        .merge(health_routes())
        .merge(organizer_routes(app_state.clone()))
        .merge(person_routes(app_state.clone()))
        .merge(production_routes(app_state.clone()))
        .merge(role_routes(app_state.clone()))
        .merge(transaction_routes(app_state.clone()))
        .merge(user_routes(app_state.clone()))
        .merge(venue_routes(app_state.clone()))
        .merge(user_session_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn person_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/people", get(person_controller::index))
        .route("/people/:id", get(person_controller::read))
        .merge(
            Router::new()
                .route("/people", post(person_controller::create))
                .route("/people/:id", put(person_controller::update))
                .route("/people/:id", delete(person_controller::delete))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::catalog::modify,
                )),
        )
        .with_state(app_state)
}

fn organizer_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/organizers", get(organizer_controller::index))
        .route("/organizers/:id", get(organizer_controller::read))
        .merge(
            Router::new()
                .route("/organizers", post(organizer_controller::create))
                .route("/organizers/:id", put(organizer_controller::update))
                .route("/organizers/:id", delete(organizer_controller::delete))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::catalog::modify,
                )),
        )
        .with_state(app_state)
}

fn production_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/productions", get(production_controller::index))
        .route("/productions/:id", get(production_controller::read))
        .merge(
            Router::new()
                .route("/productions", post(production_controller::create))
                .route("/productions/:id", put(production_controller::update))
                .route("/productions/:id", delete(production_controller::delete))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::catalog::modify,
                )),
        )
        .with_state(app_state)
}

fn role_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/roles", get(role_controller::index))
        .route("/roles/:id", get(role_controller::read))
        .merge(
            Router::new()
                .route("/roles", post(role_controller::create))
                .route("/roles/:id", put(role_controller::update))
                .route("/roles/:id", delete(role_controller::delete))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::catalog::modify,
                )),
        )
        .with_state(app_state)
}

fn contribution_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/contributions", get(contribution_controller::index))
        .route("/contributions/:id", get(contribution_controller::read))
        .merge(
            Router::new()
                .route("/contributions", post(contribution_controller::create))
                .route("/contributions/:id", put(contribution_controller::update))
                .route(
                    "/contributions/:id",
                    delete(contribution_controller::delete),
                )
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::catalog::modify,
                )),
        )
        .with_state(app_state)
}

pub fn venue_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/venues", get(venue_controller::index))
        .route("/venues/:id", get(venue_controller::read))
        .merge(
            // POST /venues/claim-venue/:id
            Router::new()
                .route("/venues/claim-venue/:id", post(venue_controller::claim))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::venues::claim,
                )),
        )
        .merge(
            Router::new()
                .route("/venues", post(venue_controller::create))
                .route("/venues/:id", put(venue_controller::update))
                .route("/venues/:id", delete(venue_controller::delete))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::venues::modify,
                )),
        )
        .with_state(app_state)
}

pub fn event_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/events", get(event_controller::index))
        .route("/events/:id", get(event_controller::read))
        .merge(
            // POST /events/claim-event/:id
            Router::new()
                .route("/events/claim-event/:id", post(event_controller::claim))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::events::claim,
                )),
        )
        .merge(
            Router::new()
                .route("/events", post(event_controller::create))
                .route("/events/:id", put(event_controller::update))
                .route("/events/:id", delete(event_controller::delete))
                .route_layer(from_fn_with_state(
                    app_state.clone(),
                    protect::events::modify,
                )),
        )
        .with_state(app_state)
}

pub fn user_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/users", get(user_controller::index))
        .route("/users", post(user_controller::create))
        .route("/users/:id", get(user_controller::read))
        .route("/users/:id", put(user_controller::update))
        .route("/users/:id", delete(user_controller::delete))
        .route_layer(from_fn_with_state(app_state.clone(), protect::users::manage))
        .with_state(app_state)
}

fn transaction_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/transactions", get(transaction_controller::index))
        .route("/transactions", post(transaction_controller::create))
        .route("/transactions/:id", get(transaction_controller::read))
        .route_layer(from_fn_with_state(
            app_state.clone(),
            protect::transactions::manage,
        ))
        .with_state(app_state)
}

pub fn user_session_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(user_session_controller::login))
        .with_state(app_state)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use domain::jwt::issue_access_token;
    use domain::user::Authority;
    use domain::{user_authorities, user_venues, users, venues, Id};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use service::config::Config;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(db: DatabaseConnection) -> Router {
        let app_state = AppState::new(Config::default(), &Arc::new(db));
        Router::new().nest("/api", define_routes(app_state))
    }

    fn test_user(email: &str, authorities: Vec<Authority>) -> users::Model {
        let now = chrono::Utc::now();
        let id = Id::new_v4();
        users::Model {
            id,
            email: email.to_string(),
            first_name: "Mara".to_string(),
            last_name: "Jensen".to_string(),
            password: "irrelevant".to_string(),
            credits: 0,
            created_at: now.into(),
            updated_at: now.into(),
            authorities: authorities
                .into_iter()
                .map(|authority| user_authorities::Model {
                    id: Id::new_v4(),
                    user_id: id,
                    authority,
                    created_at: now.into(),
                })
                .collect(),
        }
    }

    fn test_venue(is_claimed: bool) -> venues::Model {
        let now = chrono::Utc::now();
        venues::Model {
            id: Id::new_v4(),
            name: "Stadttheater".to_string(),
            address: Some("Hirtengasse 4".to_string()),
            city: Some("Vienna".to_string()),
            capacity: Some(820),
            is_claimed,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn bearer_token_for(role: Authority) -> String {
        let user = test_user("box-office@stadttheater.example", vec![role]);
        let jwt = issue_access_token(&Config::default(), &user).unwrap();
        format!("Bearer {}", jwt.token)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn protected_route_without_auth_header_is_rejected_before_any_query() {
        // The mock has no prepared results, so any repository access would
        // surface as a 500 instead of the expected 401.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "no token provided");
    }

    #[tokio::test]
    async fn auth_header_without_bearer_scheme_is_a_bad_request() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .uri("/api/users")
            .header("authorization", "Token abc123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "wrong format");
    }

    #[tokio::test]
    async fn garbage_bearer_token_is_unauthorized() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .uri("/api/users")
            .header("authorization", "Bearer not-a-real-token")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "invalid token");
    }

    #[tokio::test]
    async fn valid_token_with_disallowed_role_is_forbidden() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let app = test_app(db);

        // Account management is admin-only; a plain user token must be denied.
        let request = Request::builder()
            .uri("/api/users")
            .header("authorization", bearer_token_for(Authority::User))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["message"], "not allowed");
    }

    #[tokio::test]
    async fn claiming_an_unclaimed_venue_succeeds() {
        let now = chrono::Utc::now();
        let user = test_user("box-office@stadttheater.example", vec![Authority::User]);
        let venue = test_venue(false);
        let venue_id = venue.id;
        let link = user_venues::Model {
            id: Id::new_v4(),
            user_id: user.id,
            venue_id,
            created_at: now.into(),
        };
        let claimed_venue = venues::Model {
            is_claimed: true,
            ..venue.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // eligibility: resolve account, resolve venue, no existing link
            .append_query_results([vec![(user.clone(), None::<user_authorities::Model>)]])
            .append_query_results([vec![venue.clone()]])
            .append_query_results([Vec::<user_venues::Model>::new()])
            // mutation transaction: insert link, re-read venue, flip the flag
            .append_query_results([vec![link]])
            .append_query_results([vec![venue]])
            .append_query_results([vec![claimed_venue]])
            .into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/venues/claim-venue/{venue_id}"))
            .header("authorization", bearer_token_for(Authority::User))
            .header("x-version", "0.3.0")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "You have successfully claimed this place!");
    }

    #[tokio::test]
    async fn claiming_an_already_claimed_venue_is_a_conflict() {
        let user = test_user("box-office@stadttheater.example", vec![Authority::User]);
        let venue = test_venue(true);
        let venue_id = venue.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(user, None::<user_authorities::Model>)]])
            .append_query_results([vec![venue]])
            .into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/venues/claim-venue/{venue_id}"))
            .header("authorization", bearer_token_for(Authority::User))
            .header("x-version", "0.3.0")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errorCode"], "AlreadyClaimed");
    }

    #[tokio::test]
    async fn claim_with_token_for_deleted_account_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(users::Model, user_authorities::Model)>::new()])
            .into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/venues/claim-venue/{}", Id::new_v4()))
            .header(
                "authorization",
                bearer_token_for(Authority::ClaimsManager),
            )
            .header("x-version", "0.3.0")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "user account not found");
    }

    #[tokio::test]
    async fn login_returns_a_bearer_token_for_valid_credentials() {
        let mut user = test_user("demo@marquee.local", vec![Authority::User]);
        user.password = password_auth::generate_hash("demo-password");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(user, None::<user_authorities::Model>)]])
            .into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("email=demo@marquee.local&password=demo-password"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["token"].is_string());
        assert_eq!(body["data"]["user"]["email"], "demo@marquee.local");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let mut user = test_user("demo@marquee.local", vec![Authority::User]);
        user.password = password_auth::generate_hash("demo-password");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(user, None::<user_authorities::Model>)]])
            .into_connection();
        let app = test_app(db);

        let request = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("email=demo@marquee.local&password=wrong"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "invalid email or password");
    }
}
