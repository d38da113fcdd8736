// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock property store for deterministic testing.
//!
//! `MockStore` implements `PropertyStore` with in-memory maps, enabling
//! fast, CI-runnable tests without touching the filesystem. Read and write
//! failures can be injected to exercise the machine's error terminals.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use opendoor_core::{
    NewIssue, NewPayment, NewTenant, OpendoorError, PropertyStore, Tenant,
};

/// Build a tenant row with placeholder contact fields, for seeding tests.
pub fn sample_tenant(id_number: &str, full_name: &str) -> Tenant {
    Tenant {
        id: 1,
        full_name: full_name.to_string(),
        door_number: "B12".to_string(),
        id_number: id_number.to_string(),
        phone_number: "+254700000001".to_string(),
        session_id: "seeded".to_string(),
        service_code: "*384*1234#".to_string(),
        created_at: "2026-01-01T00:00:00.000Z".to_string(),
    }
}

/// An in-memory property store with injectable failures.
#[derive(Default)]
pub struct MockStore {
    tenants: Mutex<HashMap<String, Tenant>>,
    issues: Mutex<Vec<NewIssue>>,
    payments: Mutex<Vec<NewPayment>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store pre-seeded with the given tenants, keyed by
    /// ID number.
    pub fn with_tenants(tenants: impl IntoIterator<Item = Tenant>) -> Self {
        let map = tenants
            .into_iter()
            .map(|t| (t.id_number.clone(), t))
            .collect();
        Self {
            tenants: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Make every subsequent read fail with a storage error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail with a storage error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Issues recorded so far, in insertion order.
    pub async fn recorded_issues(&self) -> Vec<NewIssue> {
        self.issues.lock().await.clone()
    }

    /// Payments recorded so far, in insertion order.
    pub async fn recorded_payments(&self) -> Vec<NewPayment> {
        self.payments.lock().await.clone()
    }

    /// Number of registered tenants.
    pub async fn tenant_count(&self) -> usize {
        self.tenants.lock().await.len()
    }

    fn injected() -> OpendoorError {
        OpendoorError::Storage {
            source: "injected failure".into(),
        }
    }
}

#[async_trait]
impl PropertyStore for MockStore {
    async fn initialize(&self) -> Result<(), OpendoorError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), OpendoorError> {
        Ok(())
    }

    async fn create_tenant(&self, tenant: NewTenant) -> Result<(), OpendoorError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        let mut tenants = self.tenants.lock().await;
        if tenants.contains_key(&tenant.id_number) {
            return Err(OpendoorError::DuplicateTenant {
                id_number: tenant.id_number,
            });
        }
        let stored = Tenant {
            id: (tenants.len() + 1) as i64,
            full_name: tenant.full_name,
            door_number: tenant.door_number,
            id_number: tenant.id_number.clone(),
            phone_number: tenant.phone_number,
            session_id: tenant.session_id,
            service_code: tenant.service_code,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        tenants.insert(tenant.id_number, stored);
        Ok(())
    }

    async fn find_tenant(&self, id_number: &str) -> Result<Option<Tenant>, OpendoorError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        Ok(self.tenants.lock().await.get(id_number).cloned())
    }

    async fn create_issue(&self, issue: NewIssue) -> Result<(), OpendoorError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        self.issues.lock().await.push(issue);
        Ok(())
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<(), OpendoorError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        self.payments.lock().await.push(payment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opendoor_core::PaymentMethod;

    fn new_tenant(id_number: &str) -> NewTenant {
        NewTenant {
            full_name: "Jane Doe".to_string(),
            door_number: "12A".to_string(),
            id_number: id_number.to_string(),
            phone_number: "+254712345678".to_string(),
            session_id: "s1".to_string(),
            service_code: "*384#".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let store = MockStore::new();
        store.create_tenant(new_tenant("ID1")).await.unwrap();

        let found = store.find_tenant("ID1").await.unwrap().unwrap();
        assert_eq!(found.full_name, "Jane Doe");
        assert!(store.find_tenant("ID2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_tenant_is_reported() {
        let store = MockStore::with_tenants([sample_tenant("ID1", "Jane Wanjiku")]);
        let err = store.create_tenant(new_tenant("ID1")).await.unwrap_err();
        match err {
            OpendoorError::DuplicateTenant { id_number } => assert_eq!(id_number, "ID1"),
            other => panic!("expected DuplicateTenant, got {other}"),
        }
    }

    #[tokio::test]
    async fn injected_failures_hit_reads_and_writes() {
        let store = MockStore::new();

        store.fail_writes(true);
        assert!(store.create_tenant(new_tenant("ID1")).await.is_err());
        assert!(store
            .create_issue(NewIssue {
                id_number: "ID1".to_string(),
                description: "leak".to_string(),
            })
            .await
            .is_err());

        store.fail_writes(false);
        store.fail_reads(true);
        assert!(store.find_tenant("ID1").await.is_err());

        store.fail_reads(false);
        assert!(store.find_tenant("ID1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn recorded_accessors_see_writes() {
        let store = MockStore::new();
        store
            .create_issue(NewIssue {
                id_number: "ID1".to_string(),
                description: "broken lock".to_string(),
            })
            .await
            .unwrap();
        store
            .create_payment(NewPayment {
                id_number: "ID1".to_string(),
                method: PaymentMethod::Mpesa,
                amount: 5_000,
                bank_pin: None,
            })
            .await
            .unwrap();

        let issues = store.recorded_issues().await;
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, "broken lock");

        let payments = store.recorded_payments().await;
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].method, PaymentMethod::Mpesa);
    }
}
