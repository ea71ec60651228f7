//! Cakeshop admin - order management dashboard backend.
//!
//! This binary serves the admin API on port 3001 by default.
//!
//! # Architecture
//!
//! - Axum web framework, JSON endpoints consumed by the dashboard UI
//! - Bakery backend API for order data (bearer-token authenticated)
//! - In-memory order store with selection and grid state

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cakeshop_admin::config::AdminConfig;
use cakeshop_admin::routes;
use cakeshop_admin::state::AppState;

#[tokio::main]
async fn main() {
    // .env is optional; real deployments set variables directly.
    dotenvy::dotenv().ok();

    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cakeshop_admin=info,tower_http=debug".into());

    // JSON format for structured log parsing when requested, text locally.
    let wants_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    let json_layer = wants_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!wants_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let config = AdminConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();
    let state = AppState::new(config);

    // Warm the order collection; the dashboard can still refresh on demand
    // if the backend is down at boot.
    if let Err(e) = state.store().write().await.refresh().await {
        tracing::warn!(error = %e, "initial order fetch failed, starting with an empty collection");
    }

    let app = Router::new()
        .merge(routes::routes())
        .layer(CorsLayer::permissive())
        .layer(
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
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", u64::try_from(latency.as_millis()).unwrap_or(u64::MAX));
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state);

    tracing::info!("admin listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install shutdown signal handler");
    }
}
