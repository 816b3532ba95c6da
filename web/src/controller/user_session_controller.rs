use crate::controller::ApiResponse;
use crate::{AppState, Error};
use axum::extract::State;
use axum::{response::IntoResponse, Form, Json};
use domain::user::{authenticate, Credentials};
use log::*;
use serde_json::json;

/// Logs the user into the platform and returns a freshly minted access token.
///
/// The token must then be sent back on every protected request:
/// curl --header "Authorization: Bearer <token>" --request GET http://localhost:4000/api/users
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = domain::user::Credentials, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logs in and returns the bearer access token with a user summary"),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Form(creds): Form<Credentials>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Login for: {:?}", creds.email);

    let (user, jwt) = authenticate(app_state.db_conn_ref(), &app_state.config, creds).await?;

    let user_session_json = json!({
        "token": jwt.token,
        "user": {
            "id": user.id,
            "email": user.email,
            "first_name": user.first_name,
            "last_name": user.last_name,
            "credits": user.credits,
        }
    });

    Ok(Json(ApiResponse::ok("login successful", user_session_json)))
}
