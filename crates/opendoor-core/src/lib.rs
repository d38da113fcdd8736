// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Opendoor USSD service.
//!
//! This crate provides the error type, the domain types, and the storage
//! trait shared by the rest of the Opendoor workspace. The dialogue engine
//! and the HTTP gateway both build on what is defined here.

pub mod error;
pub mod store;
pub mod types;

pub use error::OpendoorError;
pub use store::PropertyStore;
pub use types::{NewIssue, NewPayment, NewTenant, Outcome, PaymentMethod, Tenant, UssdRequest};
