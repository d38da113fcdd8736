// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the aggregator-facing API.
//!
//! Handles POST /ussd and GET /health.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Form;
use serde::Deserialize;
use tracing::debug;

use opendoor_core::UssdRequest;

use crate::server::GatewayState;

/// Form body of the aggregator callback.
///
/// Field names are camelCase on the wire. `text` is absent on the first
/// request of a session and defaults to the empty string, which the decoder
/// maps to the main menu.
#[derive(Debug, Deserialize)]
pub struct UssdForm {
    /// Aggregator-assigned session identifier.
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    /// Service code the caller dialled.
    #[serde(rename = "serviceCode", default)]
    pub service_code: String,
    /// Caller's phone number in international format.
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    /// Accumulated `*`-separated input for this session.
    #[serde(default)]
    pub text: String,
}

impl From<UssdForm> for UssdRequest {
    fn from(form: UssdForm) -> Self {
        UssdRequest {
            session_id: form.session_id,
            service_code: form.service_code,
            phone_number: form.phone_number,
            text: form.text,
        }
    }
}

/// POST /ussd
///
/// Runs one dialogue turn and answers 200 text/plain with a `CON` or `END`
/// body. Store failures are already folded into END texts by the machine,
/// so this handler never produces an error status.
pub async fn post_ussd(
    State(state): State<GatewayState>,
    Form(form): Form<UssdForm>,
) -> impl IntoResponse {
    debug!(
        session_id = %form.session_id,
        phone_number = %form.phone_number,
        text = %form.text,
        "ussd callback received"
    );
    let request = UssdRequest::from(form);
    state.machine.respond(&request).await.to_wire()
}

/// GET /health
///
/// Plain-text liveness probe.
pub async fn get_health() -> &'static str {
    "Connection was established"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_decodes_camel_case_fields() {
        let body =
            "sessionId=ATUid_1&serviceCode=*384*1234%23&phoneNumber=%2B254712345678&text=1*Jane";
        let form: UssdForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.session_id, "ATUid_1");
        assert_eq!(form.service_code, "*384*1234#");
        assert_eq!(form.phone_number, "+254712345678");
        assert_eq!(form.text, "1*Jane");
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let body = "sessionId=s1&serviceCode=*384%23&phoneNumber=%2B254700000001";
        let form: UssdForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.text, "");
    }

    #[test]
    fn form_converts_into_request() {
        let form = UssdForm {
            session_id: "s1".to_string(),
            service_code: "*384#".to_string(),
            phone_number: "+254700000001".to_string(),
            text: "4*ID1*2".to_string(),
        };
        let request = UssdRequest::from(form);
        assert_eq!(request.session_id, "s1");
        assert_eq!(request.service_code, "*384#");
        assert_eq!(request.phone_number, "+254700000001");
        assert_eq!(request.text, "4*ID1*2");
    }
}
