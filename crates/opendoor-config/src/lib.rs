// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Opendoor USSD service.
//!
//! TOML files merge across the XDG hierarchy with `OPENDOOR_*` environment
//! overrides, unknown keys are rejected at load time, and failures render
//! as miette reports with typo suggestions instead of bare serde messages.
//!
//! ```no_run
//! let config = opendoor_config::load_and_validate().expect("config errors");
//! println!("listening on {}:{}", config.gateway.host, config.gateway.port);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::{Path, PathBuf};

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::OpendoorConfig;

/// Load configuration from the standard locations and validate it.
///
/// Extraction failures come back as render-ready diagnostics, with source
/// spans where the offending file could be identified. A configuration that
/// extracts cleanly can still fail the semantic checks in [`validation`].
pub fn load_and_validate() -> Result<OpendoorConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Same as [`load_and_validate`], for a literal TOML string. The string
/// itself backs any source span in the resulting diagnostics.
pub fn load_and_validate_str(toml_content: &str) -> Result<OpendoorConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from an explicit file path and validate it.
///
/// Unlike the XDG lookup, a path the operator names must exist; a missing
/// file is an error rather than a silent fallback to defaults.
pub fn load_and_validate_path(path: &Path) -> Result<OpendoorConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "config file `{}` not found",
            path.display()
        ))]);
    }
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = match std::fs::read_to_string(path) {
                Ok(content) => vec![(path.display().to_string(), content)],
                Err(_) => Vec::new(),
            };
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Gather the contents of every TOML file the XDG lookup may have read, so
/// unknown-key diagnostics can point into the right one.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join("opendoor.toml"))
        .unwrap_or_else(|_| PathBuf::from("opendoor.toml"));
    let user = dirs::config_dir().map(|d| d.join("opendoor/opendoor.toml"));
    let system = PathBuf::from("/etc/opendoor/opendoor.toml");

    [Some(local), user, Some(system)]
        .into_iter()
        .flatten()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path.display().to_string(), content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn valid_inline_config_loads() {
        let config = load_and_validate_str(
            r#"
[service]
log_level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.service.log_level, "warn");
    }

    #[test]
    fn unknown_key_yields_suggestion() {
        let errors = load_and_validate_str(
            r#"
[gateway]
prot = 9090
"#,
        )
        .unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "prot" && suggestion.as_deref() == Some("port")
        )));
    }

    #[test]
    fn invalid_value_fails_validation() {
        let errors = load_and_validate_str(
            r#"
[service]
log_level = "loud"
"#,
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { .. })));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let errors = load_and_validate_path(&missing).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Other(msg) if msg.contains("not found"))));
    }

    #[test]
    fn explicit_path_loads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opendoor.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[gateway]").unwrap();
        writeln!(file, "port = 4000").unwrap();

        let config = load_and_validate_path(&path).unwrap();
        assert_eq!(config.gateway.port, 4000);
    }
}
