use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_claims::AuthenticatedClaims, compare_api_version::CompareApiVersion,
};
use crate::params::venue::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use domain::{claim as ClaimApi, venue as VenueApi, venues::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new Venue
#[utoipa::path(
    post,
    path = "/venues",
    params(ApiVersion),
    request_body = venues::Model,
    responses(
        (status = 201, description = "Successfully created a new Venue", body = [venues::Model]),
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
    Json(venue_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Venue from: {venue_model:?}");

    let venue = VenueApi::create(app_state.db_conn_ref(), venue_model).await?;
    app_state.read_cache.invalidate_prefix("venues");

    debug!("New Venue: {venue:?}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("venue created", venue)),
    ))
}

/// GET a particular Venue specified by its id.
#[utoipa::path(
    get,
    path = "/venues/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Venue id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Venue by its id", body = [venues::Model]),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Venue by id: {id}");

    let venue = VenueApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("venue found", venue)))
}

#[utoipa::path(
    put,
    path = "/venues/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of venue to update"),
    ),
    request_body = venues::Model,
    responses(
        (status = 200, description = "Successfully updated Venue", body = [venues::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Venue not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(venue_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Venue with id: {id}");

    let venue = VenueApi::update(app_state.db_conn_ref(), id, venue_model).await?;
    app_state.read_cache.invalidate_prefix("venues");

    debug!("Updated Venue: {venue:?}");

    Ok(Json(ApiResponse::ok("venue updated", venue)))
}

/// GET all Venues, optionally filtered, one page at a time.
#[utoipa::path(
    get,
    path = "/venues",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Venues", body = [venues::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Venues, filter params: {params:?}");

    let cache_key = format!("venues:index:{params:?}");
    if let Some(cached) = app_state.read_cache.get(&cache_key) {
        trace!("Venue index served from cache: {cache_key}");
        return Ok(Json(ApiResponse::ok("venues retrieved", cached)));
    }

    let page = params.page();
    let per_page = params.per_page();
    let venues =
        VenueApi::find_by_paginated(app_state.db_conn_ref(), params, page, per_page).await?;

    let payload = serde_json::to_value(&venues).map_err(|err| {
        Error::from(DomainError {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Failed to serialize venue listing".to_string(),
            )),
            message: None,
        })
    })?;
    app_state.read_cache.insert(cache_key, payload.clone());

    Ok(Json(ApiResponse::ok("venues retrieved", payload)))
}

/// DELETE a Venue specified by its primary key.
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Venue id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Venue by its id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Venue not found")
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
    debug!("DELETE Venue by id: {id}");

    VenueApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    app_state.read_cache.invalidate_prefix("venues");

    Ok(Json(ApiResponse::ok("venue deleted", json!({"id": id}))))
}

/// POST claim a Venue for the authenticated account.
#[utoipa::path(
    post,
    path = "/venues/claim-venue/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Venue id to claim")
    ),
    responses(
        (status = 200, description = "Successfully claimed the Venue"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Venue or user account not found"),
        (status = 409, description = "Venue already claimed")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn claim(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedClaims(claims): AuthenticatedClaims,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Claim Venue with id: {id} for {}", claims.email);

    ClaimApi::claim_venue(app_state.db_conn_ref(), &claims.email, id).await?;
    app_state.read_cache.invalidate_prefix("venues");

    Ok(Json(ApiResponse::<()>::message_only(
        "You have successfully claimed this place!",
    )))
}
