//! Router assembly
//!
//! Merges the public and protected route tables, wraps the protected table
//! in the identity middleware, and adds the cross-cutting layers (CORS,
//! request tracing, 404 fallback).

use axum::http::StatusCode;
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::require_auth;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the application router with all routes and layers configured.
pub fn create_router(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes()
        .merge(protected)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
