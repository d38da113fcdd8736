// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `opendoor config` command implementation.

use opendoor_config::OpendoorConfig;
use opendoor_core::OpendoorError;

/// Prints the effective configuration as TOML.
///
/// The output reflects defaults, file overrides, and environment overrides
/// after validation, so it is exactly what `serve` would run with.
pub fn run_config(config: &OpendoorConfig) -> Result<(), OpendoorError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| OpendoorError::Config(format!("cannot render configuration: {e}")))?;
    print!("{rendered}");
    Ok(())
}
