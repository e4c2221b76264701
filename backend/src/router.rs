//! Shared application router builder.
//!
//! Both the production binary and the integration tests build the router
//! here so they exercise the same routes and middleware stack.

use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Router, response::Json, routing::get};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::auth;
use crate::config::{APP_NAME, APP_VERSION};
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    // The reference deployment serves a browser frontend from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .nest("/auth", auth::routes::auth_router())
        .nest("/todos", api::todo::routes::todo_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Root endpoint: the static landing page when present, otherwise a status
/// line.
async fn root_handler() -> Response {
    match tokio::fs::read_to_string("static/index.html").await {
        Ok(page) => Html(page).into_response(),
        Err(_) => Json(json!({ "status": "Todo backend running" })).into_response(),
    }
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": APP_VERSION,
        "app": APP_NAME,
    }))
}
