// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for the Opendoor USSD service.
//!
//! One `tokio-rusqlite` connection serializes all access to a WAL-mode
//! database whose schema ships as embedded migrations. The typed query
//! modules cover tenants, issue reports, and rent payments.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;

pub use adapter::SqliteStore;
pub use database::Database;
