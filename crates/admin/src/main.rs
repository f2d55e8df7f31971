//! Stride Admin - role-aware operations console.
//!
//! This binary serves the console on port 3001.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - `stride-core` resolvers for permissions, plan features, translations
//! - In-memory sessions holding the per-admin selection registers
//!
//! All state is in-process: the only thing that survives a restart is the
//! visitor's language preference, carried in its own durable cookie.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stride_admin::{app, config::AdminConfig, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present; environment variables win.
    dotenvy::dotenv().ok();

    let config = AdminConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stride_admin=info,tower_http=debug".into());

    // Use JSON format in container deployments for structured log parsing,
    // text format locally
    let is_container = std::env::var("STRIDE_JSON_LOGS").is_ok();
    let json_layer = is_container.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_container).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let state = AppState::new(config.clone());

    let app = app(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    status = tracing::field::Empty,
                    latency_ms = tracing::field::Empty,
                )
            })
            .on_response(
                |response: &axum::http::Response<_>, latency: std::time::Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record("latency_ms", latency.as_millis() as u64);
                    DefaultOnResponse::default().on_response(response, latency, span);
                },
            ),
    );

    let addr = config.socket_addr();
    tracing::info!("admin console listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
