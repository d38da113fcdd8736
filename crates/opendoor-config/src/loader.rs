// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading built on figment.
//!
//! Four layers merge in increasing precedence: compiled defaults, the
//! system file under `/etc`, the XDG user file, and `./opendoor.toml`,
//! with `OPENDOOR_`-prefixed environment variables on top of everything.

#![allow(clippy::result_large_err)] // figment::Error is large but callers consume it immediately

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::OpendoorConfig;

/// Load configuration from the standard file locations.
///
/// Later layers win: defaults, then `/etc/opendoor/opendoor.toml`, the XDG
/// user file (`~/.config/opendoor/opendoor.toml` on Linux), `./opendoor.toml`,
/// and finally `OPENDOOR_*` environment variables.
pub fn load_config() -> Result<OpendoorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OpendoorConfig::default()))
        .merge(Toml::file("/etc/opendoor/opendoor.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("opendoor/opendoor.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("opendoor.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a literal TOML string, skipping file lookup and
/// environment overrides. Primarily for tests.
pub fn load_config_from_str(toml_content: &str) -> Result<OpendoorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OpendoorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, still honoring `OPENDOOR_*`
/// environment overrides.
pub fn load_config_from_path(path: &Path) -> Result<OpendoorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OpendoorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider mapping flat variable names onto dotted keys.
///
/// `Env::split("_")` would split on every underscore and shred keys like
/// `database_path`, so only the section prefix is rewritten:
/// `OPENDOOR_STORAGE_DATABASE_PATH` becomes `storage.database_path`.
fn env_provider() -> Env {
    Env::prefixed("OPENDOOR_").map(|key| {
        // Figment hands over the lowercased name with the prefix stripped,
        // e.g. OPENDOOR_STORAGE_DATABASE_PATH arrives as "storage_database_path".
        let mut mapped = key.as_str().to_string();
        for section in ["service", "gateway", "storage"] {
            let flat = format!("{section}_");
            if mapped.starts_with(&flat) {
                mapped = mapped.replacen(&flat, &format!("{section}."), 1);
                break;
            }
        }
        mapped.into()
    })
}
