// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the PropertyStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use opendoor_config::model::StorageConfig;
use opendoor_core::{NewIssue, NewPayment, NewTenant, OpendoorError, PropertyStore, Tenant};

use crate::database::Database;
use crate::queries;
use crate::queries::tenants::TenantInsert;

/// SQLite-backed property store.
///
/// Holds the [`Database`] in a `OnceCell` so construction stays cheap and
/// infallible; [`PropertyStore::initialize`] opens the file and runs
/// migrations. The actual SQL lives in the [`queries`] modules, this type
/// only routes calls and maps results onto the domain error.
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// Builds an unopened store. Nothing touches the filesystem until
    /// [`PropertyStore::initialize`] runs.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, OpendoorError> {
        self.db.get().ok_or(OpendoorError::NotInitialized)
    }
}

#[async_trait]
impl PropertyStore for SqliteStore {
    async fn initialize(&self) -> Result<(), OpendoorError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| OpendoorError::Storage {
            source: "store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), OpendoorError> {
        let db = self.db()?;
        // Flush the WAL into the main file so nothing is left behind on exit.
        db.checkpoint().await?;
        debug!("store checkpointed for shutdown");
        Ok(())
    }

    async fn create_tenant(&self, tenant: NewTenant) -> Result<(), OpendoorError> {
        match queries::tenants::insert_tenant(self.db()?, &tenant).await? {
            TenantInsert::Created => Ok(()),
            TenantInsert::DuplicateIdNumber => Err(OpendoorError::DuplicateTenant {
                id_number: tenant.id_number,
            }),
        }
    }

    async fn find_tenant(&self, id_number: &str) -> Result<Option<Tenant>, OpendoorError> {
        queries::tenants::find_by_id_number(self.db()?, id_number).await
    }

    async fn create_issue(&self, issue: NewIssue) -> Result<(), OpendoorError> {
        queries::issues::insert_issue(self.db()?, &issue).await
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<(), OpendoorError> {
        queries::payments::insert_payment(self.db()?, &payment).await
    }
}
