// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The axum server answering aggregator callbacks.
//!
//! Wires the route table, tracing and CORS middleware, and the shared
//! dialogue machine, then serves until the shutdown token fires.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use opendoor_core::OpendoorError;
use opendoor_menu::SessionMachine;

use crate::handlers;

/// State cloned into every axum handler.
#[derive(Clone)]
pub struct GatewayState {
    /// Dialogue machine answering each callback.
    pub machine: Arc<SessionMachine>,
}

/// Gateway server configuration (mirrors `GatewayConfig` from
/// opendoor-config to avoid a dependency on the config crate).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to listen on.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

/// Build the gateway router:
/// - POST /ussd (aggregator callback)
/// - GET /health (liveness probe)
pub fn routes(state: GatewayState) -> Router {
    Router::new()
        .route("/ussd", post(handlers::post_ussd))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until `cancel` fires, then
/// finishes in-flight requests and returns.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    cancel: CancellationToken,
) -> Result<(), OpendoorError> {
    let app = routes(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| OpendoorError::Channel {
            message: format!("could not bind {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .map_err(|e| OpendoorError::Channel {
            message: format!("gateway exited abnormally: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
