// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `opendoor serve` command implementation.
//!
//! Opens the SQLite store, runs migrations, builds the dialogue machine,
//! and serves the gateway until a shutdown signal arrives. The store is
//! checkpointed and closed on the way out.

use std::sync::Arc;

use tracing::info;

use opendoor_config::OpendoorConfig;
use opendoor_core::{OpendoorError, PropertyStore};
use opendoor_gateway::{GatewayState, ServerConfig};
use opendoor_menu::SessionMachine;
use opendoor_storage::SqliteStore;

use crate::shutdown;

/// Crates whose logs follow the configured log level. Everything else
/// stays at `warn`.
const CRATE_TARGETS: [&str; 6] = [
    "opendoor",
    "opendoor_config",
    "opendoor_core",
    "opendoor_gateway",
    "opendoor_menu",
    "opendoor_storage",
];

/// Runs the `opendoor serve` command.
pub async fn run_serve(config: OpendoorConfig) -> Result<(), OpendoorError> {
    init_tracing(&config.service.log_level);

    info!(service = config.service.name.as_str(), "starting opendoor serve");

    let store = Arc::new(SqliteStore::new(config.storage.clone()));
    store.initialize().await?;

    let machine = Arc::new(SessionMachine::new(store.clone()));
    let state = GatewayState { machine };

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    // Serve until SIGINT/SIGTERM cancels the token, then drain and close.
    let cancel = shutdown::install_signal_handler();
    opendoor_gateway::start_server(&server_config, state, cancel).await?;

    store.close().await?;
    info!("opendoor serve shutdown complete");
    Ok(())
}

/// Sets up the tracing subscriber. RUST_LOG wins when set; otherwise the
/// configured level applies to the opendoor crates only.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={log_level}"))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(format!("{directives},warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
