use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::transaction::IndexParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{transaction as TransactionApi, transactions::Model, Id};
use service::config::ApiVersion;

use log::*;

/// POST record a credit movement. The owning user's balance is adjusted in the
/// same database transaction.
#[utoipa::path(
    post,
    path = "/transactions",
    params(ApiVersion),
    request_body = transactions::Model,
    responses(
        (status = 201, description = "Successfully recorded a Transaction", body = [transactions::Model]),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(transaction_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Transaction from: {transaction_model:?}");

    let transaction = TransactionApi::create(app_state.db_conn_ref(), transaction_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("transaction recorded", transaction)),
    ))
}

/// GET a particular Transaction specified by its id.
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Transaction id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Transaction by its id", body = [transactions::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Transaction not found")
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
    debug!("GET Transaction by id: {id}");

    let transaction = TransactionApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::ok("transaction found", transaction)))
}

/// GET all Transactions, optionally filtered by user.
#[utoipa::path(
    get,
    path = "/transactions",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved Transactions", body = [transactions::Model]),
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
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Transactions, filter params: {params:?}");

    let transactions = TransactionApi::find_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::ok("transactions retrieved", transactions)))
}
