use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::person::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{people::Model, person as PersonApi, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new Person (performer)
#[utoipa::path(
    post,
    path = "/people",
    params(ApiVersion),
    request_body = people::Model,
    responses(
        (status = 201, description = "Successfully created a new Person", body = [people::Model]),
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
    Json(person_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Person from: {person_model:?}");

    let person = PersonApi::create(app_state.db_conn_ref(), person_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("person created", person)),
    ))
}

/// GET a particular Person specified by their id.
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Person id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Person by their id", body = [people::Model]),
        (status = 404, description = "Person not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Person by id: {id}");

    let person = PersonApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("person found", person)))
}

#[utoipa::path(
    put,
    path = "/people/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of person to update"),
    ),
    request_body = people::Model,
    responses(
        (status = 200, description = "Successfully updated Person", body = [people::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Person not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(person_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Person with id: {id}");

    let person = PersonApi::update(app_state.db_conn_ref(), id, person_model).await?;

    Ok(Json(ApiResponse::ok("person updated", person)))
}

/// GET all People, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/people",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved People", body = [people::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all People, filter params: {params:?}");

    let people = PersonApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::ok("people retrieved", people)))
}

/// DELETE a Person specified by their primary key.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Person id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Person by their id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Person not found")
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
    debug!("DELETE Person by id: {id}");

    PersonApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("person deleted", json!({"id": id}))))
}
