// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Opendoor USSD service.

use thiserror::Error;

/// The primary error type used across the Opendoor crates.
#[derive(Debug, Error)]
pub enum OpendoorError {
    /// The configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// The database could not be opened or rejected an operation.
    #[error("storage failure: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A tenant with the same ID number is already registered.
    ///
    /// Surfaced by the store on a unique-key violation so the dialogue can
    /// distinguish a duplicate registration from a technical failure.
    #[error("tenant with ID number {id_number} already exists")]
    DuplicateTenant { id_number: String },

    /// A data operation was invoked before the store was initialized.
    #[error("store not initialized -- call initialize() first")]
    NotInitialized,

    /// Channel errors (bind failure, transport shutdown, malformed callback).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
