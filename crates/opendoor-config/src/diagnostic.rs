// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translates figment extraction failures into miette diagnostics.
//!
//! Every key the figment extraction rejects becomes one [`ConfigError`].
//! Unknown keys get a fuzzy-matched "did you mean" hint (Jaro-Winkler via
//! strsim) and, when the key came from a TOML file we know the contents of,
//! a source span so the rendered report underlines the offending line.

#![allow(unused_assignments)] // the Diagnostic derive expands to code that trips this lint

use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score a candidate must beat before we offer it as a hint.
/// At 0.75, `prot` still maps to `port` and `databse_path` to
/// `database_path`, while unrelated keys stay silent.
const MIN_SIMILARITY: f64 = 0.75;

/// One problem found while loading or validating the configuration.
///
/// Variants carry whatever context miette needs to render them: spans and
/// source text where we could recover them, plain messages where we could not.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key that no section of the configuration accepts.
    #[error("unrecognized configuration key `{key}`")]
    #[diagnostic(
        code(opendoor::config::unknown_key),
        help("{}", describe_valid_keys(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The key as it appeared in the input.
        key: String,
        /// Closest accepted key, when one scores above the similarity cutoff.
        suggestion: Option<String>,
        /// Comma-separated list of keys the section does accept.
        valid_keys: String,
        /// Where the key sits in its TOML source, when known.
        #[label("unknown key")]
        span: Option<SourceSpan>,
        /// Full text of that TOML source, for the span to point into.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value that deserialized to the wrong type.
    #[error("wrong type for key `{key}`: {detail}")]
    #[diagnostic(code(opendoor::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// Dotted path of the offending key.
        key: String,
        /// What was actually found.
        detail: String,
        /// The type the key requires.
        expected: String,
        /// Where the value sits in its TOML source, when known.
        #[label("unexpected type")]
        span: Option<SourceSpan>,
        /// Full text of that TOML source.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A key the configuration requires but no provider supplied.
    #[error("required key `{key}` is not set")]
    #[diagnostic(
        code(opendoor::config::missing_key),
        help("set `{key}` in opendoor.toml or through an OPENDOOR_ environment variable")
    )]
    MissingKey {
        /// The absent key.
        key: String,
    },

    /// A value that parsed fine but fails a semantic check.
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(opendoor::config::validation))]
    Validation {
        /// What the check rejected and why.
        message: String,
    },

    /// Anything that does not fit the variants above.
    #[error("configuration could not be loaded: {0}")]
    #[diagnostic(code(opendoor::config::other))]
    Other(String),
}

fn describe_valid_keys(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(hint) => format!("did you mean `{hint}`? valid keys are: {valid_keys}"),
        None => format!("valid keys are: {valid_keys}"),
    }
}

/// Break a `figment::Error` apart into one [`ConfigError`] per problem.
///
/// Figment chains every extraction failure into a single error value; this
/// walks the chain so callers can report all of them at once. `toml_sources`
/// pairs file paths with their contents and feeds the span lookup for
/// unknown-key reports.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| classify(e, toml_sources))
        .collect()
}

fn classify(error: figment::Error, sources: &[(String, String)]) -> ConfigError {
    use figment::error::Kind;

    match &error.kind {
        Kind::UnknownField(field, allowed) => unknown_key(&error, field, allowed, sources),
        Kind::MissingField(field) => ConfigError::MissingKey {
            key: field.clone().into_owned(),
        },
        Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
            key: error.path.join("."),
            detail: format!("found {actual}"),
            expected: expected.to_string(),
            span: None,
            src: None,
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

fn unknown_key(
    error: &figment::Error,
    field: &str,
    allowed: &[&str],
    sources: &[(String, String)],
) -> ConfigError {
    let (span, src) = locate_key(error, field, sources).unzip();
    ConfigError::UnknownKey {
        key: field.to_string(),
        suggestion: suggest_key(field, allowed),
        valid_keys: allowed.join(", "),
        span,
        src,
    }
}

/// Work out where an unknown key sits in the TOML file figment read it from.
///
/// Only file-backed providers carry a usable source; keys injected through
/// the environment or embedded defaults come back as `None` and the
/// diagnostic renders without a span.
fn locate_key(
    error: &figment::Error,
    field: &str,
    sources: &[(String, String)],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let path = match error.metadata.as_ref()?.source.as_ref()? {
        figment::Source::File(p) => p.display().to_string(),
        _ => return None,
    };
    let (name, content) = sources.iter().find(|(p, _)| *p == path)?;
    let offset = find_key_offset(content, &error.path, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(name, content.clone()),
    ))
}

/// Byte offset of `field` within `content`, scoped to the section named by
/// `path`.
///
/// With `path = ["gateway"]` the scan starts after the `[gateway]` header;
/// with an empty path it starts at the top of the file. A line counts as a
/// hit only when the key is followed by whitespace or `=`, so `port` does
/// not match a line defining `porting`.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        None => 0,
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
    };

    let mut cursor = start;
    for line in content[start..].lines() {
        let key = line.trim_start();
        if let Some(rest) = key.strip_prefix(field)
            && rest.starts_with([' ', '\t', '='])
        {
            return Some(cursor + (line.len() - key.len()));
        }
        cursor += line.len() + 1;
    }
    None
}

/// Pick the accepted key most similar to `unknown`, if any clears the
/// similarity cutoff.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > MIN_SIMILARITY)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, key)| key.to_string())
}

/// Print every error to stderr through miette's graphical report handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut out = String::new();
        match handler.render_report(&mut out, error) {
            Ok(()) => eprint!("{out}"),
            Err(_) => eprintln!("error: {error}"),
        }
    }
}
