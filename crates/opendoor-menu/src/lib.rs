// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu dialogue engine for the property service.
//!
//! Turns the accumulated `*`-separated input of a session into the next
//! screen. [`decode`] reconstructs the dialogue position, [`steps`] names
//! the positions each branch can be in, and [`machine`] walks the dialogue
//! against a [`opendoor_core::PropertyStore`].

pub mod decode;
pub mod machine;
pub mod steps;
mod text;

pub use decode::{Branch, Tokens};
pub use machine::{BANK_RENT_AMOUNT, MPESA_RENT_AMOUNT, SessionMachine};
