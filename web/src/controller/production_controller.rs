use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::production::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{production as ProductionApi, productions::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new Production
#[utoipa::path(
    post,
    path = "/productions",
    params(ApiVersion),
    request_body = productions::Model,
    responses(
        (status = 201, description = "Successfully created a new Production", body = [productions::Model]),
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
    Json(production_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Production from: {production_model:?}");

    let production = ProductionApi::create(app_state.db_conn_ref(), production_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("production created", production)),
    ))
}

/// GET a particular Production specified by its id.
#[utoipa::path(
    get,
    path = "/productions/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Production id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Production by its id", body = [productions::Model]),
        (status = 404, description = "Production not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Production by id: {id}");

    let production = ProductionApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("production found", production)))
}

#[utoipa::path(
    put,
    path = "/productions/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of production to update"),
    ),
    request_body = productions::Model,
    responses(
        (status = 200, description = "Successfully updated Production", body = [productions::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Production not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(production_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Production with id: {id}");

    let production = ProductionApi::update(app_state.db_conn_ref(), id, production_model).await?;

    Ok(Json(ApiResponse::ok("production updated", production)))
}

/// GET all Productions, optionally filtered.
#[utoipa::path(
    get,
    path = "/productions",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Productions", body = [productions::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Productions, filter params: {params:?}");

    let productions = ProductionApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::ok("productions retrieved", productions)))
}

/// DELETE a Production specified by its primary key.
#[utoipa::path(
    delete,
    path = "/productions/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Production id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Production by its id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Production not found")
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
    debug!("DELETE Production by id: {id}");

    ProductionApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok(
        "production deleted",
        json!({"id": id}),
    )))
}
