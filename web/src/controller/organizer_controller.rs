use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::organizer::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{organizer as OrganizerApi, organizers::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new Organizer
#[utoipa::path(
    post,
    path = "/organizers",
    params(ApiVersion),
    request_body = organizers::Model,
    responses(
        (status = 201, description = "Successfully created a new Organizer", body = [organizers::Model]),
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
    Json(organizer_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Organizer from: {organizer_model:?}");

    let organizer = OrganizerApi::create(app_state.db_conn_ref(), organizer_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("organizer created", organizer)),
    ))
}

/// GET a particular Organizer specified by its id.
#[utoipa::path(
    get,
    path = "/organizers/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Organizer id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Organizer by its id", body = [organizers::Model]),
        (status = 404, description = "Organizer not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Organizer by id: {id}");

    let organizer = OrganizerApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("organizer found", organizer)))
}

#[utoipa::path(
    put,
    path = "/organizers/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of organizer to update"),
    ),
    request_body = organizers::Model,
    responses(
        (status = 200, description = "Successfully updated Organizer", body = [organizers::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Organizer not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(organizer_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Organizer with id: {id}");

    let organizer = OrganizerApi::update(app_state.db_conn_ref(), id, organizer_model).await?;

    Ok(Json(ApiResponse::ok("organizer updated", organizer)))
}

/// GET all Organizers, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/organizers",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Organizers", body = [organizers::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Organizers, filter params: {params:?}");

    let organizers = OrganizerApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::ok("organizers retrieved", organizers)))
}

/// DELETE an Organizer specified by its primary key.
#[utoipa::path(
    delete,
    path = "/organizers/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Organizer id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Organizer by its id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Organizer not found")
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
    debug!("DELETE Organizer by id: {id}");

    OrganizerApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("organizer deleted", json!({"id": id}))))
}
