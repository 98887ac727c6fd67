//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`.
//! Middleware: CORS (any origin, method and header), request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Companies
        .route("/company", post(handlers::company::create_company))
        .route("/company/{company_id}", get(handlers::company::get_company))
        // Personas
        .route("/persona", post(handlers::persona::create_persona))
        .route("/persona/{persona_id}", get(handlers::persona::get_persona))
        // Messages
        .route("/message", post(handlers::message::create_message))
        .route(
            "/messages/{persona_id}",
            get(handlers::message::get_messages),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
