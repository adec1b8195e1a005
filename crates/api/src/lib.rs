//! HTTP API server for the order service.
//!
//! Exposes liveness and readiness probes plus a small in-memory item
//! registry under `/api/items`, with structured logging (tracing),
//! Prometheus metrics, and a generated OpenAPI document.

pub mod config;
pub mod docs;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use item_store::{InMemoryItemStore, ItemStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use routes::items::AppState;

/// Service identifier reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "fastapi-service-orderservice";

/// API version reported by `/health` and the OpenAPI document.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ItemStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::health_check))
        .route("/ready", get(routes::health::readiness_check))
        .route("/docs", get(routes::docs::openapi))
        .route("/openapi.json", get(routes::docs::openapi))
        .route(
            "/api/items",
            get(routes::items::list::<S>).post(routes::items::create::<S>),
        )
        .route("/api/items/{item_id}", get(routes::items::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        // Mirrors the caller's origin, methods and headers and allows credentials.
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by an empty in-memory store.
pub fn create_default_state() -> Arc<AppState<InMemoryItemStore>> {
    Arc::new(AppState::new(InMemoryItemStore::new()))
}
