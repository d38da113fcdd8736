// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the dialogue machine on top of a real SQLite
//! store in a temp directory. Provides `respond()` to drive dialogue turns
//! the way the gateway would, returning wire-format bodies.

use std::sync::Arc;

use opendoor_config::model::StorageConfig;
use opendoor_core::{OpendoorError, PropertyStore, UssdRequest};
use opendoor_menu::SessionMachine;
use opendoor_storage::SqliteStore;

/// A complete test environment with a temp SQLite store.
///
/// The temp directory is removed when the harness drops, so every test
/// starts from an empty database.
pub struct TestHarness {
    /// SQLite-backed store (temp DB, cleaned up on drop).
    pub store: Arc<SqliteStore>,
    /// Dialogue machine wired to the store.
    pub machine: SessionMachine,
    /// Aggregator session identifier sent with every request.
    pub session_id: String,
    /// Service code sent with every request.
    pub service_code: String,
    /// Caller phone number sent with every request.
    pub phone_number: String,
    /// Temp directory kept alive for cleanup on drop.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a harness backed by a fresh temp database.
    pub async fn new() -> Result<Self, OpendoorError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| OpendoorError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let config = StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        };
        let store = Arc::new(SqliteStore::new(config));
        store.initialize().await?;

        let machine = SessionMachine::new(store.clone());

        Ok(Self {
            store,
            machine,
            session_id: uuid::Uuid::new_v4().to_string(),
            service_code: "*384*1234#".to_string(),
            phone_number: "+254712345678".to_string(),
            _temp_dir: temp_dir,
        })
    }

    /// Drive one dialogue turn with the given accumulated text and return
    /// the wire body (`CON ...` or `END ...`).
    pub async fn respond(&self, text: &str) -> String {
        let request = UssdRequest {
            session_id: self.session_id.clone(),
            service_code: self.service_code.clone(),
            phone_number: self.phone_number.clone(),
            text: text.to_string(),
        };
        self.machine.respond(&request).await.to_wire()
    }
}
