// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background thread.
//! Do NOT create additional Connection instances for writes.

use tokio_rusqlite::Connection;
use tracing::debug;

use opendoor_core::OpendoorError;

/// Helper to convert tokio_rusqlite errors into OpendoorError::Storage.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> OpendoorError {
    OpendoorError::Storage {
        source: Box::new(e),
    }
}

/// Handle to the SQLite database behind a tokio-rusqlite worker thread.
///
/// Opening runs PRAGMA setup and all pending migrations, so a returned
/// `Database` is always ready for queries.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` and bring the schema up to date.
    ///
    /// Parent directories are created if missing, so the default XDG data
    /// path works on a fresh machine.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, OpendoorError> {
        if let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| OpendoorError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        conn.call(move |conn| {
            if wal_mode {
                conn.execute_batch(
                    "PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = 5000;",
                )?;
            } else {
                conn.execute_batch(
                    "PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = 5000;",
                )?;
            }
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        // run_migrations returns a domain error, so carry it out of the
        // closure as a value instead of converting it.
        let migration_result = conn
            .call(|conn| Ok(crate::migrations::run_migrations(conn)))
            .await
            .map_err(map_tr_err)?;
        migration_result?;

        debug!(path, wal_mode, "database opened and migrated");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection for query modules.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Flush the WAL into the main database file.
    pub async fn checkpoint(&self) -> Result<(), OpendoorError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint and release the connection.
    pub async fn close(self) -> Result<(), OpendoorError> {
        self.checkpoint().await?;
        debug!("database closed");
        Ok(())
    }
}
