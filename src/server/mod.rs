//! HTTP surface for the lookup service.
//!
//! `POST /process` runs a [`RegionLookup`] for the posted postal code and
//! answers with the `{message, data}` envelope. `GET /health` is a liveness
//! check with no business logic.

use crate::core::RegionLookup;
use crate::domain::model::{ApiResponse, RequestPayload, ResponsePayload};
use crate::utils::error::EiError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub const MALFORMED_BODY_MESSAGE: &str = "Error parsing JSON request body";

pub type SharedLookup = Arc<dyn RegionLookup>;

impl EiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EiError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EiError {
    fn into_response(self) -> Response {
        let body: ApiResponse<ResponsePayload> = ApiResponse::failure(self.to_string(), self.code());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Build the axum Router with CORS on every route.
pub fn router(lookup: SharedLookup) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/process", post(process))
        .layer(cors)
        .with_state(lookup)
}

/// Serve until SIGINT/SIGTERM, then drain in-flight requests.
pub async fn serve(listener: TcpListener, lookup: SharedLookup) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, router(lookup))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server gracefully stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down server...");
}

async fn health() -> &'static str {
    "ok"
}

async fn process(
    State(lookup): State<SharedLookup>,
    body: Bytes,
) -> Result<Json<ApiResponse<ResponsePayload>>, EiError> {
    // Decoded regardless of Content-Type; browsers often post JSON as text/plain.
    let request: RequestPayload = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected /process body: {}", e);
        EiError::MalformedRequest {
            message: MALFORMED_BODY_MESSAGE.to_string(),
        }
    })?;

    match lookup.process(&request.postal_code).await {
        Ok(response) => Ok(Json(ApiResponse::success(response))),
        Err(e) => {
            tracing::error!(
                "Lookup for {} failed [{}]: {}",
                request.postal_code,
                e.code(),
                e
            );
            Err(e)
        }
    }
}
