// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Opendoor crates.

use strum::{Display, EnumString};

/// One inbound USSD callback from the aggregator.
///
/// The channel is stateless: every request carries the full accumulated
/// input in `text`, and the dialogue position is reconstructed from it.
/// `session_id` and `service_code` are opaque pass-through values that are
/// only recorded when a tenant registers.
#[derive(Debug, Clone)]
pub struct UssdRequest {
    pub session_id: String,
    pub service_code: String,
    pub phone_number: String,
    pub text: String,
}

/// The reply produced for one USSD request.
///
/// `Continue` keeps the session open and prompts for another answer;
/// `Terminate` ends the dialogue with a final message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Terminate(String),
}

impl Outcome {
    /// Serialize for the aggregator: `CON ` prefix keeps the session open,
    /// `END ` closes it.
    pub fn to_wire(&self) -> String {
        match self {
            Outcome::Continue(text) => format!("CON {text}"),
            Outcome::Terminate(text) => format!("END {text}"),
        }
    }

    /// The reply text without the wire marker.
    pub fn text(&self) -> &str {
        match self {
            Outcome::Continue(text) | Outcome::Terminate(text) => text,
        }
    }

    /// Whether this outcome ends the dialogue.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Terminate(_))
    }
}

/// A registered tenant, as stored.
///
/// Tenants are created only through the registration dialogue and are never
/// updated or deleted. `id_number` is unique across all tenants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: i64,
    pub full_name: String,
    pub door_number: String,
    pub id_number: String,
    pub phone_number: String,
    pub session_id: String,
    pub service_code: String,
    pub created_at: String,
}

/// A tenant registration submission (everything except the row id and timestamp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    pub full_name: String,
    pub door_number: String,
    pub id_number: String,
    pub phone_number: String,
    pub session_id: String,
    pub service_code: String,
}

/// An issue report submission. Issue records are append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub id_number: String,
    pub description: String,
}

/// Payment instrument chosen in the payment dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum PaymentMethod {
    #[strum(serialize = "M-Pesa")]
    Mpesa,
    #[strum(serialize = "Bank")]
    Bank,
}

/// A payment record submission. Payment records are append-only.
///
/// `bank_pin` is present only for bank payments, exactly as captured from
/// the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub id_number: String,
    pub method: PaymentMethod,
    pub amount: i64,
    pub bank_pin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn outcome_wire_markers() {
        let cont = Outcome::Continue("pick an option".to_string());
        let term = Outcome::Terminate("goodbye".to_string());

        assert_eq!(cont.to_wire(), "CON pick an option");
        assert_eq!(term.to_wire(), "END goodbye");
        assert!(!cont.is_terminal());
        assert!(term.is_terminal());
        assert_eq!(cont.text(), "pick an option");
        assert_eq!(term.text(), "goodbye");
    }

    #[test]
    fn payment_method_display_matches_stored_form() {
        assert_eq!(PaymentMethod::Mpesa.to_string(), "M-Pesa");
        assert_eq!(PaymentMethod::Bank.to_string(), "Bank");
    }

    #[test]
    fn payment_method_parses_back() {
        assert_eq!(
            PaymentMethod::from_str("M-Pesa").unwrap(),
            PaymentMethod::Mpesa
        );
        assert_eq!(PaymentMethod::from_str("Bank").unwrap(), PaymentMethod::Bank);
        assert!(PaymentMethod::from_str("Cheque").is_err());
    }
}
