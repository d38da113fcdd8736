// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Opendoor integration tests.
//!
//! Provides [`MockStore`], an in-memory `PropertyStore` with injectable
//! failures, and [`TestHarness`], which runs the dialogue machine against
//! a real SQLite store in a temp directory.

pub mod harness;
pub mod mock_store;

pub use harness::TestHarness;
pub use mock_store::{sample_tenant, MockStore};
