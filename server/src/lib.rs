//! HTTP API for mycolookup.
//!
//! | Route | Query | Response |
//! |-------|-------|----------|
//! | `GET /api/description` | `name` | `{"description": "..."}` |
//! | `GET /api/vernacular` | `latin` | `{"latinName", "et", "fi", "sv", "en"}` |
//! | `GET /api/suggestions` | `q` | `["Genus epithet", ...]` |
//! | `GET /health` | | `{"status": "ok"}` |
//!
//! A missing or blank name is the only error a caller can see (`400`).

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use mycolookup_resolve::{DescriptionResponse, Resolver, VernacularNames};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Error body returned with a `400`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error: rejected caller input.
#[derive(Debug)]
pub struct ApiError(mycolookup_types::Error);

impl From<mycolookup_types::Error> for ApiError {
    fn from(err: mycolookup_types::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
struct DescriptionParams {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct VernacularParams {
    #[serde(default)]
    latin: String,
}

#[derive(Deserialize)]
struct SuggestParams {
    #[serde(default)]
    q: String,
}

async fn description_handler(
    State(resolver): State<Arc<Resolver>>,
    Query(params): Query<DescriptionParams>,
) -> Result<Json<DescriptionResponse>, ApiError> {
    Ok(Json(resolver.describe(&params.name).await?))
}

async fn vernacular_handler(
    State(resolver): State<Arc<Resolver>>,
    Query(params): Query<VernacularParams>,
) -> Result<Json<VernacularNames>, ApiError> {
    Ok(Json(resolver.vernacular_names(&params.latin).await?))
}

async fn suggestions_handler(
    State(resolver): State<Arc<Resolver>>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<String>> {
    Json(resolver.suggest(&params.q).await)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the HTTP API router over a shared resolver.
pub fn build_router(resolver: Arc<Resolver>) -> Router {
    Router::new()
        .route("/api/description", get(description_handler))
        .route("/api/vernacular", get(vernacular_handler))
        .route("/api/suggestions", get(suggestions_handler))
        .route("/health", get(health_handler))
        .with_state(resolver)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Completes once `signal` reports a shutdown request.
///
/// If the signal handler cannot be installed the error is logged and the
/// future never completes, so the server keeps running.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
