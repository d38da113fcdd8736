// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema migrations, compiled into the binary by refinery.
//!
//! The SQL files in `migrations/` are embedded at build time and applied
//! whenever a database is opened, so a fresh path and an existing file go
//! through the same code.

use opendoor_core::OpendoorError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Apply any migrations the database has not seen yet. Refinery records
/// what already ran in its `refinery_schema_history` table.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), OpendoorError> {
    embedded::migrations::runner()
        .run(conn)
        .map_err(|e| OpendoorError::Storage {
            source: Box::new(e),
        })?;
    Ok(())
}
