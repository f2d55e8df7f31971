//! Stride Admin library.
//!
//! This crate provides the admin console as a library, allowing the
//! router to be exercised in-process by integration tests.
//!
//! The console is a presentation-gating shell: what a page shows is
//! decided by the resolvers in `stride-core` (permissions, plan features,
//! translations) bound to the per-session selection held by
//! [`middleware::SessionScope`]. It is not a security boundary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, state::AppState};

/// Builds the full application router with the session layer installed.
///
/// Used by `main` (which adds request tracing on top) and by integration
/// tests (which drive it with `tower::ServiceExt::oneshot`).
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .fallback(not_found)
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for paths outside the routing table.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
