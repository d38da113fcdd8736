// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage abstraction for tenant, issue, and payment records.

use async_trait::async_trait;

use crate::error::OpendoorError;
use crate::types::{NewIssue, NewPayment, NewTenant, Tenant};

/// Persistence backend for the property service.
///
/// Implementations must be safe to share across request handlers. The
/// dialogue layer only ever calls these methods; it never sees connection
/// handles or SQL.
#[async_trait]
pub trait PropertyStore: Send + Sync + 'static {
    /// Prepare the backend for use (open connections, run migrations).
    /// Must be called once before any other method.
    async fn initialize(&self) -> Result<(), OpendoorError>;

    /// Flush and release backend resources. The store must not be used
    /// after close.
    async fn close(&self) -> Result<(), OpendoorError>;

    /// Insert a new tenant. Fails with [`OpendoorError::DuplicateTenant`]
    /// when a tenant with the same ID number already exists.
    async fn create_tenant(&self, tenant: NewTenant) -> Result<(), OpendoorError>;

    /// Look up a tenant by ID number. Absence is not an error.
    async fn find_tenant(&self, id_number: &str) -> Result<Option<Tenant>, OpendoorError>;

    /// Record an issue report.
    async fn create_issue(&self, issue: NewIssue) -> Result<(), OpendoorError>;

    /// Record a rent payment.
    async fn create_payment(&self, payment: NewPayment) -> Result<(), OpendoorError>;
}
