use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::role::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{role as RoleApi, roles::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new theatrical Role
#[utoipa::path(
    post,
    path = "/roles",
    params(ApiVersion),
    request_body = roles::Model,
    responses(
        (status = 201, description = "Successfully created a new Role", body = [roles::Model]),
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
    Json(role_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Role from: {role_model:?}");

    let role = RoleApi::create(app_state.db_conn_ref(), role_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("role created", role)),
    ))
}

/// GET a particular Role specified by its id.
#[utoipa::path(
    get,
    path = "/roles/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Role id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Role by its id", body = [roles::Model]),
        (status = 404, description = "Role not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Role by id: {id}");

    let role = RoleApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("role found", role)))
}

#[utoipa::path(
    put,
    path = "/roles/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of role to update"),
    ),
    request_body = roles::Model,
    responses(
        (status = 200, description = "Successfully updated Role", body = [roles::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Role not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(role_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Role with id: {id}");

    let role = RoleApi::update(app_state.db_conn_ref(), id, role_model).await?;

    Ok(Json(ApiResponse::ok("role updated", role)))
}

/// GET all Roles, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/roles",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Roles", body = [roles::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Roles, filter params: {params:?}");

    let roles = RoleApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::ok("roles retrieved", roles)))
}

/// DELETE a Role specified by its primary key.
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Role id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Role by its id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Role not found")
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
    debug!("DELETE Role by id: {id}");

    RoleApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("role deleted", json!({"id": id}))))
}
