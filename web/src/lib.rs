use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use axum::Router;
use log::*;
use service::config::ApiVersion;
use tower_http::cors::CorsLayer;

pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod extractors;
pub(crate) mod params;
pub(crate) mod protect;
pub mod router;

pub use error::{Error, Result};
pub use service::AppState;

use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};

/// Binds the listener and serves the API router until the process is stopped.
///
/// All endpoints live under `/api`; CORS is restricted to the configured
/// origins since browsers send the Authorization header cross-site.
pub async fn init_server(app_state: AppState) -> Result<()> {
    let interface = app_state.config.interface.clone().unwrap_or_else(|| {
        warn!("No interface configured, defaulting to 127.0.0.1");
        "127.0.0.1".to_string()
    });
    let port = app_state.config.port;
    let listen_address = format!("{interface}:{port}");

    let allowed_origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping unparseable CORS origin {origin:?}: {err}");
                None
            }
        })
        .collect();

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-version"),
        ])
        .allow_origin(allowed_origins);

    let app = Router::new()
        .nest("/api", router::define_routes(app_state))
        .layer(cors_layer);

    info!(
        "Marquee platform listening on {listen_address} (API version {})",
        ApiVersion::default_version()
    );

    let listener = tokio::net::TcpListener::bind(&listen_address)
        .await
        .map_err(|err| {
            Error::from(DomainError {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(format!(
                    "Failed to bind {listen_address}"
                ))),
                message: None,
            })
        })?;

    axum::serve(listener, app).await.map_err(|err| {
        Error::from(DomainError {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Server stopped unexpectedly".to_string(),
            )),
            message: None,
        })
    })?;

    Ok(())
}
