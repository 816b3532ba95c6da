use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_claims::AuthenticatedClaims, compare_api_version::CompareApiVersion,
};
use crate::params::event::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use domain::{claim as ClaimApi, event as EventApi, events::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST create a new Event
#[utoipa::path(
    post,
    path = "/events",
    params(ApiVersion),
    request_body = events::Model,
    responses(
        (status = 201, description = "Successfully created a new Event", body = [events::Model]),
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
    Json(event_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Event from: {event_model:?}");

    let event = EventApi::create(app_state.db_conn_ref(), event_model).await?;
    app_state.read_cache.invalidate_prefix("events");

    debug!("New Event: {event:?}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("event created", event)),
    ))
}

/// GET a particular Event specified by its id.
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Event id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Event by its id", body = [events::Model]),
        (status = 404, description = "Event not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Event by id: {id}");

    let event = EventApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("event found", event)))
}

#[utoipa::path(
    put,
    path = "/events/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of event to update"),
    ),
    request_body = events::Model,
    responses(
        (status = 200, description = "Successfully updated Event", body = [events::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Event not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(event_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Event with id: {id}");

    let event = EventApi::update(app_state.db_conn_ref(), id, event_model).await?;
    app_state.read_cache.invalidate_prefix("events");

    debug!("Updated Event: {event:?}");

    Ok(Json(ApiResponse::ok("event updated", event)))
}

/// GET all Events, optionally filtered, one page at a time.
#[utoipa::path(
    get,
    path = "/events",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Events", body = [events::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Events, filter params: {params:?}");

    let cache_key = format!("events:index:{params:?}");
    if let Some(cached) = app_state.read_cache.get(&cache_key) {
        trace!("Event index served from cache: {cache_key}");
        return Ok(Json(ApiResponse::ok("events retrieved", cached)));
    }

    let page = params.page();
    let per_page = params.per_page();
    let events =
        EventApi::find_by_paginated(app_state.db_conn_ref(), params, page, per_page).await?;

    let payload = serde_json::to_value(&events).map_err(|err| {
        Error::from(DomainError {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Failed to serialize event listing".to_string(),
            )),
            message: None,
        })
    })?;
    app_state.read_cache.insert(cache_key, payload.clone());

    Ok(Json(ApiResponse::ok("events retrieved", payload)))
}

/// DELETE an Event specified by its primary key.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Event by its id", body = [Uuid]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Event not found")
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
    debug!("DELETE Event by id: {id}");

    EventApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    app_state.read_cache.invalidate_prefix("events");

    Ok(Json(ApiResponse::ok("event deleted", json!({"id": id}))))
}

/// POST claim an Event for the authenticated account.
#[utoipa::path(
    post,
    path = "/events/claim-event/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Event id to claim")
    ),
    responses(
        (status = 200, description = "Successfully claimed the Event"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Event or user account not found"),
        (status = 409, description = "Event already claimed")
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
    debug!("POST Claim Event with id: {id} for {}", claims.email);

    ClaimApi::claim_event(app_state.db_conn_ref(), &claims.email, id).await?;
    app_state.read_cache.invalidate_prefix("events");

    Ok(Json(ApiResponse::<()>::message_only(
        "You have successfully claimed this place!",
    )))
}
