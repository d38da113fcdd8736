// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Every prompt and terminal message the service can send.
//!
//! Texts are kept in one place so the dialogue logic in `machine` reads as
//! flow control. Multi-line screens use embedded newlines; handsets render
//! them as-is.

use opendoor_core::Tenant;

pub(crate) const MAIN_MENU: &str = "Welcome to OPEN DOOR PROPERTY\n\
    1. New Tenant (Register)\n\
    2. Existing Tenant\n\
    3. Report an Issue\n\
    4. Pay Rent and Utilities\n\
    5. Need Help\n\
    6. Terms of Service";

// Shared by the lookup, issue, and payment branches.
pub(crate) const ASK_ID_NUMBER: &str = "Enter your ID Number:";

pub(crate) const REGISTER_ASK_FULL_NAME: &str = "Please provide your full name:";

pub(crate) fn register_ask_door_number(full_name: &str) -> String {
    format!("Hello {full_name}, please enter your door number:")
}

pub(crate) fn register_ask_id_number(full_name: &str, door_number: &str) -> String {
    format!(
        "Thank you, {full_name}. Your door number is {door_number}.\nPlease enter your ID number:"
    )
}

pub(crate) fn register_success(full_name: &str, door_number: &str, id_number: &str) -> String {
    format!(
        "Registration successful!\n\
         Full Name: {full_name}\n\
         Door Number: {door_number}\n\
         ID Number: {id_number}\n\
         Thank you for joining OPEN DOOR PROPERTY."
    )
}

pub(crate) const REGISTER_DUPLICATE: &str = "Registration failed. ID number already exists.";
pub(crate) const REGISTER_FAILED: &str = "Registration failed due to a technical issue.";
pub(crate) const REGISTER_INVALID: &str = "Invalid input for registration.";

pub(crate) fn tenant_not_found(id_number: &str) -> String {
    format!("No tenant found with ID number: {id_number}.")
}

pub(crate) fn tenant_details(tenant: &Tenant) -> String {
    format!(
        "Tenant Details:\n\
         Name: {}\n\
         Door Number: {}\n\
         Phone: {}\n\
         ID Number: {}\n\
         Thank you.",
        tenant.full_name, tenant.door_number, tenant.phone_number, tenant.id_number
    )
}

pub(crate) const LOOKUP_FAILED: &str = "Failed to retrieve tenant details.";
pub(crate) const LOOKUP_INVALID: &str = "Invalid input for existing tenant.";

pub(crate) const ISSUE_ASK_DESCRIPTION: &str = "Thank you. Please describe the issue:";
pub(crate) const ISSUE_SUCCESS: &str =
    "Thank you for reporting the issue. Our team will address it shortly.";
pub(crate) const ISSUE_FAILED: &str =
    "Failed to report the issue due to a technical error. Please try again later.";
pub(crate) const ISSUE_INVALID: &str = "Invalid input for reporting an issue.";

pub(crate) fn payment_register_first(id_number: &str) -> String {
    format!(
        "No tenant found with ID number: {id_number}.\nPlease register as a new tenant to proceed."
    )
}

pub(crate) fn payment_choose_method(full_name: &str) -> String {
    format!("Hello {full_name}, kindly choose a payment method:\n1. M-Pesa\n2. Bank")
}

pub(crate) const PAYMENT_RETRIEVAL_FAILED: &str =
    "Failed to retrieve tenant details. Please try again later.";
pub(crate) const PAYMENT_ASK_BANK_PIN: &str = "Enter your Bank PIN:";
pub(crate) const PAYMENT_INVALID_METHOD: &str = "Invalid payment method selected.";
pub(crate) const PAYMENT_MPESA_SUCCESS: &str =
    "Payment successful via M-Pesa.\nThank you for paying your rent.";
pub(crate) const PAYMENT_BANK_SUCCESS: &str =
    "Payment successful via Bank.\nThank you for paying your rent.";
pub(crate) const PAYMENT_FAILED: &str =
    "Payment failed due to a technical issue. Please try again later.";
pub(crate) const PAYMENT_INVALID: &str = "Invalid input for payment.";

pub(crate) const HELP_MENU: &str = "Choose Help Option:\n\
    1. Pay Rent and Utilities.\n\
    2. Maintenance.\n\
    3. Talk to Landlord";
pub(crate) const HELP_PAY_RENT: &str = "For help with paying rent and utilities, please select option 4 from the main menu and follow the steps to complete your payment.";
pub(crate) const HELP_MAINTENANCE: &str = "To report maintenance issues, please select option 3 from the main menu and describe the issue for prompt assistance.";

pub(crate) fn help_contact_landlord(phone_number: &str) -> String {
    format!("You can contact the landlord directly at {phone_number}. Thank you.")
}

pub(crate) const HELP_INVALID_OPTION: &str = "Invalid option selected. Please try again.";
pub(crate) const HELP_INVALID: &str = "Invalid input for help. Please try again.";

pub(crate) const TERMS: &str = "Terms of Service:\n\
    1. Rent must be paid by the 5th of each month.\n\
    2. No illegal activities on the property.\n\
    3. Maintenance issues must be reported immediately.\n\
    Thank you for choosing OPEN DOOR PROPERTY.";
pub(crate) const TERMS_INVALID: &str = "Invalid input for terms of service.";

pub(crate) const DEFAULT_INVALID: &str = "Invalid option. Please try again.";
