//! Preview server router using Axum
//!
//! Serves the Trunk-built frontend. Client routes fall back to `index.html`;
//! unknown `/api/*` paths are left to the real backend and answer 404.

use axum::extract::OriginalUri;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Create the preview router for a dist directory
pub fn create_router(dist: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health_handler))
        .fallback(api_not_found);

    let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .nest("/api", api)
        .fallback_service(spa)
        .layer(cors)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "keeppt",
    }))
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    tracing::debug!(%uri, "api route not handled by preview server");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "not handled by the preview server",
            "path": uri.path(),
        })),
    )
}
