use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::contribution::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{contribution as ContributionApi, contributions::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new Contribution (person × production × role)
#[utoipa::path(
    post,
    path = "/contributions",
    params(ApiVersion),
    request_body = contributions::Model,
    responses(
        (status = 201, description = "Successfully created a new Contribution", body = [contributions::Model]),
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
    Json(contribution_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Contribution from: {contribution_model:?}");

    let contribution = ContributionApi::create(app_state.db_conn_ref(), contribution_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("contribution created", contribution)),
    ))
}

/// GET a particular Contribution specified by its id.
#[utoipa::path(
    get,
    path = "/contributions/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Contribution id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Contribution by its id", body = [contributions::Model]),
        (status = 404, description = "Contribution not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Contribution by id: {id}");

    let contribution = ContributionApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("contribution found", contribution)))
}

#[utoipa::path(
    put,
    path = "/contributions/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of contribution to update"),
    ),
    request_body = contributions::Model,
    responses(
        (status = 200, description = "Successfully updated Contribution", body = [contributions::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Contribution not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(contribution_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Contribution with id: {id}");

    let contribution =
        ContributionApi::update(app_state.db_conn_ref(), id, contribution_model).await?;

    Ok(Json(ApiResponse::ok("contribution updated", contribution)))
}

/// GET all Contributions, optionally filtered.
#[utoipa::path(
    get,
    path = "/contributions",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Contributions", body = [contributions::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Contributions, filter params: {params:?}");

    let contributions = ContributionApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::ok(
        "contributions retrieved",
        contributions,
    )))
}

/// DELETE a Contribution specified by its primary key.
#[utoipa::path(
    delete,
    path = "/contributions/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Contribution id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Contribution by its id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Contribution not found")
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
    debug!("DELETE Contribution by id: {id}");

    ContributionApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok(
        "contribution deleted",
        json!({"id": id}),
    )))
}
