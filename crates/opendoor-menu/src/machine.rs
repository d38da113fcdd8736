// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The session state machine.
//!
//! Every request reconstructs the dialogue position from the accumulated
//! input alone, performs at most one store read and/or one store write, and
//! answers with an [`Outcome`]. Failures never escape to the transport:
//! each one is folded into a terminal message here, and the caller starts
//! over from an empty string.

use std::sync::Arc;

use tracing::{debug, error};

use opendoor_core::{
    NewIssue, NewPayment, NewTenant, OpendoorError, Outcome, PaymentMethod, PropertyStore,
    UssdRequest,
};

use crate::decode::{Branch, Tokens};
use crate::steps::{HelpStep, IssueStep, LookupStep, PaymentStep, RegisterStep, TermsStep};
use crate::text;

/// Fixed rent recorded for mobile money payments.
pub const MPESA_RENT_AMOUNT: i64 = 5_000;

/// Fixed rent plus utilities recorded for bank payments.
pub const BANK_RENT_AMOUNT: i64 = 15_000;

/// Drives the menu dialogue against an injected store.
///
/// The machine is stateless between requests and safe to share across
/// concurrent request handlers.
pub struct SessionMachine {
    store: Arc<dyn PropertyStore>,
}

impl SessionMachine {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    /// Produce the reply for one request. Infallible by design: store
    /// failures become terminal outcomes, logged here with context.
    pub async fn respond(&self, request: &UssdRequest) -> Outcome {
        let tokens = Tokens::parse(&request.text);
        let branch = Branch::parse(tokens.branch_token());
        debug!(
            session_id = %request.session_id,
            ?branch,
            step = tokens.step(),
            "dialogue request"
        );

        match branch {
            Branch::Root => Outcome::Continue(text::MAIN_MENU.to_string()),
            Branch::Register => self.register(&tokens, request).await,
            Branch::Lookup => self.lookup(&tokens).await,
            Branch::ReportIssue => self.report_issue(&tokens).await,
            Branch::Payment => self.payment(&tokens).await,
            Branch::Help => self.help(&tokens, request),
            Branch::Terms => self.terms(&tokens),
            Branch::Unknown => Outcome::Terminate(text::DEFAULT_INVALID.to_string()),
        }
    }

    async fn register(&self, tokens: &Tokens, request: &UssdRequest) -> Outcome {
        match RegisterStep::from_step(tokens.step()) {
            Some(RegisterStep::AskFullName) => {
                Outcome::Continue(text::REGISTER_ASK_FULL_NAME.to_string())
            }
            Some(RegisterStep::AskDoorNumber) => {
                Outcome::Continue(text::register_ask_door_number(tokens.answer(1)))
            }
            Some(RegisterStep::AskIdNumber) => Outcome::Continue(text::register_ask_id_number(
                tokens.answer(1),
                tokens.answer(2),
            )),
            Some(RegisterStep::Submit) => {
                let tenant = NewTenant {
                    full_name: tokens.answer(1).to_string(),
                    door_number: tokens.answer(2).to_string(),
                    id_number: tokens.answer(3).to_string(),
                    phone_number: request.phone_number.clone(),
                    session_id: request.session_id.clone(),
                    service_code: request.service_code.clone(),
                };
                match self.store.create_tenant(tenant).await {
                    Ok(()) => Outcome::Terminate(text::register_success(
                        tokens.answer(1),
                        tokens.answer(2),
                        tokens.answer(3),
                    )),
                    Err(OpendoorError::DuplicateTenant { .. }) => {
                        Outcome::Terminate(text::REGISTER_DUPLICATE.to_string())
                    }
                    Err(e) => {
                        error!(error = %e, "tenant registration failed");
                        Outcome::Terminate(text::REGISTER_FAILED.to_string())
                    }
                }
            }
            None => Outcome::Terminate(text::REGISTER_INVALID.to_string()),
        }
    }

    async fn lookup(&self, tokens: &Tokens) -> Outcome {
        match LookupStep::from_step(tokens.step()) {
            Some(LookupStep::AskIdNumber) => Outcome::Continue(text::ASK_ID_NUMBER.to_string()),
            Some(LookupStep::Fetch) => {
                let id_number = tokens.answer(1);
                match self.store.find_tenant(id_number).await {
                    Ok(Some(tenant)) => Outcome::Terminate(text::tenant_details(&tenant)),
                    Ok(None) => Outcome::Terminate(text::tenant_not_found(id_number)),
                    Err(e) => {
                        error!(error = %e, "tenant lookup failed");
                        Outcome::Terminate(text::LOOKUP_FAILED.to_string())
                    }
                }
            }
            None => Outcome::Terminate(text::LOOKUP_INVALID.to_string()),
        }
    }

    async fn report_issue(&self, tokens: &Tokens) -> Outcome {
        match IssueStep::from_step(tokens.step()) {
            Some(IssueStep::AskIdNumber) => Outcome::Continue(text::ASK_ID_NUMBER.to_string()),
            Some(IssueStep::AskDescription) => {
                Outcome::Continue(text::ISSUE_ASK_DESCRIPTION.to_string())
            }
            Some(IssueStep::Submit) => {
                let issue = NewIssue {
                    id_number: tokens.answer(1).to_string(),
                    description: tokens.answer(2).to_string(),
                };
                match self.store.create_issue(issue).await {
                    Ok(()) => Outcome::Terminate(text::ISSUE_SUCCESS.to_string()),
                    Err(e) => {
                        error!(error = %e, "issue report failed");
                        Outcome::Terminate(text::ISSUE_FAILED.to_string())
                    }
                }
            }
            None => Outcome::Terminate(text::ISSUE_INVALID.to_string()),
        }
    }

    async fn payment(&self, tokens: &Tokens) -> Outcome {
        match PaymentStep::from_step(tokens.step()) {
            Some(PaymentStep::AskIdNumber) => Outcome::Continue(text::ASK_ID_NUMBER.to_string()),
            Some(PaymentStep::ChooseMethod) => {
                let id_number = tokens.answer(1);
                match self.store.find_tenant(id_number).await {
                    Ok(Some(tenant)) => {
                        Outcome::Continue(text::payment_choose_method(&tenant.full_name))
                    }
                    Ok(None) => Outcome::Terminate(text::payment_register_first(id_number)),
                    Err(e) => {
                        error!(error = %e, "tenant lookup for payment failed");
                        Outcome::Terminate(text::PAYMENT_RETRIEVAL_FAILED.to_string())
                    }
                }
            }
            Some(PaymentStep::TakeMethod) => match tokens.answer(2) {
                "1" => self.settle_mpesa(tokens).await,
                "2" => Outcome::Continue(text::PAYMENT_ASK_BANK_PIN.to_string()),
                _ => Outcome::Terminate(text::PAYMENT_INVALID_METHOD.to_string()),
            },
            Some(PaymentStep::TakeBankPin) => {
                // Step 4 exists only on the bank path.
                if tokens.answer(2) != "2" {
                    return Outcome::Terminate(text::PAYMENT_INVALID.to_string());
                }
                self.settle_bank(tokens).await
            }
            None => Outcome::Terminate(text::PAYMENT_INVALID.to_string()),
        }
    }

    async fn settle_mpesa(&self, tokens: &Tokens) -> Outcome {
        let id_number = tokens.answer(1);
        match self.store.find_tenant(id_number).await {
            Ok(Some(_)) => {
                let payment = NewPayment {
                    id_number: id_number.to_string(),
                    method: PaymentMethod::Mpesa,
                    amount: MPESA_RENT_AMOUNT,
                    bank_pin: None,
                };
                match self.store.create_payment(payment).await {
                    Ok(()) => Outcome::Terminate(text::PAYMENT_MPESA_SUCCESS.to_string()),
                    Err(e) => {
                        error!(error = %e, "mobile money payment failed");
                        Outcome::Terminate(text::PAYMENT_FAILED.to_string())
                    }
                }
            }
            Ok(None) => Outcome::Terminate(text::tenant_not_found(id_number)),
            Err(e) => {
                error!(error = %e, "tenant lookup for payment failed");
                Outcome::Terminate(text::PAYMENT_FAILED.to_string())
            }
        }
    }

    async fn settle_bank(&self, tokens: &Tokens) -> Outcome {
        let id_number = tokens.answer(1);
        match self.store.find_tenant(id_number).await {
            Ok(Some(_)) => {
                let payment = NewPayment {
                    id_number: id_number.to_string(),
                    method: PaymentMethod::Bank,
                    amount: BANK_RENT_AMOUNT,
                    bank_pin: Some(tokens.answer(3).to_string()),
                };
                match self.store.create_payment(payment).await {
                    Ok(()) => Outcome::Terminate(text::PAYMENT_BANK_SUCCESS.to_string()),
                    Err(e) => {
                        error!(error = %e, "bank payment failed");
                        Outcome::Terminate(text::PAYMENT_FAILED.to_string())
                    }
                }
            }
            Ok(None) => Outcome::Terminate(text::tenant_not_found(id_number)),
            Err(e) => {
                error!(error = %e, "tenant lookup for payment failed");
                Outcome::Terminate(text::PAYMENT_FAILED.to_string())
            }
        }
    }

    fn help(&self, tokens: &Tokens, request: &UssdRequest) -> Outcome {
        match HelpStep::from_step(tokens.step()) {
            Some(HelpStep::ShowOptions) => Outcome::Continue(text::HELP_MENU.to_string()),
            Some(HelpStep::Answer) => match tokens.answer(1) {
                "1" => Outcome::Terminate(text::HELP_PAY_RENT.to_string()),
                "2" => Outcome::Terminate(text::HELP_MAINTENANCE.to_string()),
                "3" => Outcome::Terminate(text::help_contact_landlord(&request.phone_number)),
                _ => Outcome::Terminate(text::HELP_INVALID_OPTION.to_string()),
            },
            None => Outcome::Terminate(text::HELP_INVALID.to_string()),
        }
    }

    fn terms(&self, tokens: &Tokens) -> Outcome {
        match TermsStep::from_step(tokens.step()) {
            Some(TermsStep::Show) => Outcome::Terminate(text::TERMS.to_string()),
            None => Outcome::Terminate(text::TERMS_INVALID.to_string()),
        }
    }
}
