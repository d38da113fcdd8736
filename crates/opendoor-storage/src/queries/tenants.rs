// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tenant insert and lookup operations.

use rusqlite::params;

use opendoor_core::{NewTenant, OpendoorError, Tenant};

use crate::database::{map_tr_err, Database};

/// Result of a tenant insert attempt.
///
/// Duplicate ID numbers are an expected outcome of the registration
/// dialogue, not a query failure, so they are reported as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantInsert {
    Created,
    DuplicateIdNumber,
}

/// True when the error is the UNIQUE constraint on tenants.id_number firing.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// Insert a new tenant row.
pub async fn insert_tenant(
    db: &Database,
    tenant: &NewTenant,
) -> Result<TenantInsert, OpendoorError> {
    let tenant = tenant.clone();
    db.connection()
        .call(move |conn| {
            let result = conn.execute(
                "INSERT INTO tenants (full_name, door_number, id_number, phone_number, session_id, service_code)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    tenant.full_name,
                    tenant.door_number,
                    tenant.id_number,
                    tenant.phone_number,
                    tenant.session_id,
                    tenant.service_code,
                ],
            );
            match result {
                Ok(_) => Ok(TenantInsert::Created),
                Err(e) if is_unique_violation(&e) => Ok(TenantInsert::DuplicateIdNumber),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Look up a tenant by ID number.
pub async fn find_by_id_number(
    db: &Database,
    id_number: &str,
) -> Result<Option<Tenant>, OpendoorError> {
    let id_number = id_number.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, full_name, door_number, id_number, phone_number, session_id, service_code, created_at
                 FROM tenants WHERE id_number = ?1",
            )?;
            let result = stmt.query_row(params![id_number], |row| {
                Ok(Tenant {
                    id: row.get(0)?,
                    full_name: row.get(1)?,
                    door_number: row.get(2)?,
                    id_number: row.get(3)?,
                    phone_number: row.get(4)?,
                    session_id: row.get(5)?,
                    service_code: row.get(6)?,
                    created_at: row.get(7)?,
                })
            });
            match result {
                Ok(tenant) => Ok(Some(tenant)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}
