// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP channel for the property service.
//!
//! Receives aggregator callbacks on POST /ussd as form-encoded bodies,
//! hands each turn to [`opendoor_menu::SessionMachine`], and answers
//! 200 text/plain with a `CON` or `END` body. GET /health serves as a
//! plain-text liveness probe.

pub mod handlers;
pub mod server;

pub use handlers::UssdForm;
pub use server::{routes, start_server, GatewayState, ServerConfig};
