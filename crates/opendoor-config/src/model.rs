// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for the Opendoor USSD service.
//!
//! Every section carries `#[serde(deny_unknown_fields)]`, so a typoed key
//! fails the load instead of being silently ignored. The diagnostic layer
//! turns that failure into a "did you mean" report.

use serde::{Deserialize, Serialize};

/// Root of the configuration tree.
///
/// A completely empty file (or no file at all) is valid; each section falls
/// back to its defaults independently.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpendoorConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// USSD gateway HTTP settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Tenant database settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Log verbosity, one of trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "opendoor".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// USSD gateway HTTP configuration.
///
/// The aggregator POSTs session callbacks to this address, so in production
/// it must be reachable from the aggregator's network.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// TCP port for the HTTP listener.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    3001
}

/// Tenant database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Filesystem location of the SQLite database.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Open the database with a write-ahead log instead of rollback journaling.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("opendoor").join("opendoor.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("opendoor.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}
