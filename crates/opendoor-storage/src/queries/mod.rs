// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for tenant, issue, and payment records.

pub mod issues;
pub mod payments;
pub mod tenants;
