// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that run after deserialization.
//!
//! Serde can enforce shape but not meaning: a port of 0 or a log level of
//! `"loud"` both deserialize fine. Every violation becomes one
//! [`ConfigError::Validation`] and all of them are reported together.

use crate::diagnostic::ConfigError;
use crate::model::OpendoorConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Check every semantic constraint on an already-deserialized configuration.
///
/// Collects the full list of violations rather than stopping at the first,
/// so one `opendoor config` run surfaces every problem in the file.
pub fn validate_config(config: &OpendoorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    require_nonempty(&mut errors, &config.service.name, "service.name");

    if !VALID_LOG_LEVELS.contains(&config.service.log_level.as_str()) {
        errors.push(reject(format!(
            "service.log_level must be one of {}, got `{}`",
            VALID_LOG_LEVELS.join(", "),
            config.service.log_level
        )));
    }

    require_nonempty(&mut errors, &config.gateway.host, "gateway.host");
    let host = config.gateway.host.trim();
    if !host.is_empty() && !plausible_host(host) {
        errors.push(reject(format!(
            "gateway.host `{host}` is neither an IP address nor a plausible hostname"
        )));
    }

    // Port 0 would ask the OS for an ephemeral port, which the aggregator
    // could never be pointed at.
    if config.gateway.port == 0 {
        errors.push(reject("gateway.port must not be 0".to_string()));
    }

    require_nonempty(
        &mut errors,
        &config.storage.database_path,
        "storage.database_path",
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn reject(message: String) -> ConfigError {
    ConfigError::Validation { message }
}

fn require_nonempty(errors: &mut Vec<ConfigError>, value: &str, key: &str) {
    if value.trim().is_empty() {
        errors.push(reject(format!("{key} must not be empty")));
    }
}

/// A host is plausible when it parses as an IP address or contains only
/// characters a hostname may use.
fn plausible_host(addr: &str) -> bool {
    addr.parse::<std::net::IpAddr>().is_ok()
        || addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':')
}
