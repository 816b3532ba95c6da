use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{user as UserApi, users::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new User account. The plaintext password in the request body
/// is hashed before it is stored; the stored hash never serializes back out.
#[utoipa::path(
    post,
    path = "/users",
    params(ApiVersion),
    request_body = users::Model,
    responses(
        (status = 201, description = "Successfully created a new User", body = [users::Model]),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(user_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New User with email: {:?}", user_model.email);

    let user = UserApi::create(app_state.db_conn_ref(), user_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("user created", user)),
    ))
}

/// GET a particular User specified by their id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "User id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific User by their id", body = [users::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET User by id: {id}");

    let user = UserApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("user found", user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of user to update"),
    ),
    request_body = users::Model,
    responses(
        (status = 200, description = "Successfully updated User", body = [users::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(user_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update User with id: {id}");

    let user = UserApi::update(app_state.db_conn_ref(), id, user_model).await?;

    Ok(Json(ApiResponse::ok("user updated", user)))
}

/// GET all Users with their authorities.
#[utoipa::path(
    get,
    path = "/users",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved Users", body = [users::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Users");

    let users = UserApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::ok("users retrieved", users)))
}

/// DELETE a User specified by their primary key.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "User id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain User by their id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE User by id: {id}");

    UserApi::delete(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("user deleted", json!({"id": id}))))
}
