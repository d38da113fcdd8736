// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signal-driven shutdown for the gateway process.
//!
//! A background task waits for SIGINT or SIGTERM and cancels a shared
//! [`CancellationToken`]; the HTTP server holds the other end and lets
//! in-flight requests finish once it fires.

use tokio_util::sync::CancellationToken;
use tracing::info;

/// Spawns the signal listener and hands back the token it will cancel.
pub fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        let signal = wait_for_signal().await;
        info!("{signal} received, shutting down");
        trigger.cancel();
    });

    token
}

/// Waits until the process receives a termination signal, returning its
/// name for the shutdown log line.
#[cfg(unix)]
async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    tokio::select! {
        _ = tokio::signal::ctrl_c() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    }
}

/// Non-unix targets only get Ctrl+C.
#[cfg(not(unix))]
async fn wait_for_signal() -> &'static str {
    let _ = tokio::signal::ctrl_c().await;
    "Ctrl+C"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_starts_uncancelled() {
        let token = install_signal_handler();
        assert!(!token.is_cancelled());
        // Cancel manually so the background task can exit.
        token.cancel();
    }
}
