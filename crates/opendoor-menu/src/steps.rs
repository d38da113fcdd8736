// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-branch step enumerations driven by const transition tables.
//!
//! Each multi-step branch owns an enum whose variants are its dialogue
//! positions, indexed by the token count. `from_step` returns `None` past
//! the branch's final step, which the machine maps to that branch's
//! invalid-input terminal.

/// Look up the step at a 1-based position in a branch table.
fn table_step<T: Copy>(table: &[T], step: usize) -> Option<T> {
    step.checked_sub(1).and_then(|i| table.get(i)).copied()
}

/// New tenant registration: name, door, ID, then the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStep {
    AskFullName,
    AskDoorNumber,
    AskIdNumber,
    Submit,
}

impl RegisterStep {
    const TABLE: [RegisterStep; 4] = [
        Self::AskFullName,
        Self::AskDoorNumber,
        Self::AskIdNumber,
        Self::Submit,
    ];

    pub fn from_step(step: usize) -> Option<Self> {
        table_step(&Self::TABLE, step)
    }
}

/// Existing tenant lookup: ID, then the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStep {
    AskIdNumber,
    Fetch,
}

impl LookupStep {
    const TABLE: [LookupStep; 2] = [Self::AskIdNumber, Self::Fetch];

    pub fn from_step(step: usize) -> Option<Self> {
        table_step(&Self::TABLE, step)
    }
}

/// Issue reporting: ID, description, then the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStep {
    AskIdNumber,
    AskDescription,
    Submit,
}

impl IssueStep {
    const TABLE: [IssueStep; 3] = [Self::AskIdNumber, Self::AskDescription, Self::Submit];

    pub fn from_step(step: usize) -> Option<Self> {
        table_step(&Self::TABLE, step)
    }
}

/// Rent payment: ID, method menu, method choice, then the bank PIN.
///
/// Step 4 is only reachable for bank payments; the machine rejects a
/// step-4 request whose method token is not "2".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStep {
    AskIdNumber,
    ChooseMethod,
    TakeMethod,
    TakeBankPin,
}

impl PaymentStep {
    const TABLE: [PaymentStep; 4] = [
        Self::AskIdNumber,
        Self::ChooseMethod,
        Self::TakeMethod,
        Self::TakeBankPin,
    ];

    pub fn from_step(step: usize) -> Option<Self> {
        table_step(&Self::TABLE, step)
    }
}

/// Help menu: options, then one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpStep {
    ShowOptions,
    Answer,
}

impl HelpStep {
    const TABLE: [HelpStep; 2] = [Self::ShowOptions, Self::Answer];

    pub fn from_step(step: usize) -> Option<Self> {
        table_step(&Self::TABLE, step)
    }
}

/// Terms of service: a single static screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsStep {
    Show,
}

impl TermsStep {
    const TABLE: [TermsStep; 1] = [Self::Show];

    pub fn from_step(step: usize) -> Option<Self> {
        table_step(&Self::TABLE, step)
    }
}
