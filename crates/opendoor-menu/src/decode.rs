// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding of the aggregator's accumulated input string.
//!
//! The channel is stateless: every request carries the full history of the
//! caller's answers joined by `*`. Decoding never fails and never validates
//! content; what a token means is decided branch by branch.

/// The caller's answers so far, split on `*`.
///
/// An empty raw string decodes to a single empty token, which is how a fresh
/// dial (no answers yet) presents itself. Decoding is pure: the same raw
/// string always yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    parts: Vec<String>,
}

impl Tokens {
    /// Split the accumulated text. Empty trailing entries are preserved, so
    /// `"1*"` decodes to two tokens with an empty second answer.
    pub fn parse(text: &str) -> Self {
        Self {
            parts: text.split('*').map(str::to_string).collect(),
        }
    }

    /// The dialogue step, equal to the number of tokens. A fresh dial is
    /// step 1.
    pub fn step(&self) -> usize {
        self.parts.len()
    }

    /// The token selecting the menu branch (index 0).
    pub fn branch_token(&self) -> &str {
        self.answer(0)
    }

    /// The token at index `n`, or `""` past the end.
    pub fn answer(&self, n: usize) -> &str {
        self.parts.get(n).map(String::as_str).unwrap_or("")
    }
}

/// Main menu branch selected by the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Empty first token: the caller just dialed in.
    Root,
    Register,
    Lookup,
    ReportIssue,
    Payment,
    Help,
    Terms,
    /// Anything else the main menu does not offer.
    Unknown,
}

impl Branch {
    pub fn parse(token: &str) -> Self {
        match token {
            "" => Branch::Root,
            "1" => Branch::Register,
            "2" => Branch::Lookup,
            "3" => Branch::ReportIssue,
            "4" => Branch::Payment,
            "5" => Branch::Help,
            "6" => Branch::Terms,
            _ => Branch::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_text_is_a_single_empty_token() {
        let tokens = Tokens::parse("");
        assert_eq!(tokens.step(), 1);
        assert_eq!(tokens.branch_token(), "");
    }

    #[test]
    fn answers_are_positional() {
        let tokens = Tokens::parse("1*Jane Doe*12A");
        assert_eq!(tokens.step(), 3);
        assert_eq!(tokens.branch_token(), "1");
        assert_eq!(tokens.answer(1), "Jane Doe");
        assert_eq!(tokens.answer(2), "12A");
        assert_eq!(tokens.answer(3), "", "past the end reads as empty");
    }

    #[test]
    fn trailing_separator_yields_empty_answer() {
        let tokens = Tokens::parse("1*");
        assert_eq!(tokens.step(), 2);
        assert_eq!(tokens.answer(1), "");
    }

    #[test]
    fn branch_parse_covers_the_menu() {
        assert_eq!(Branch::parse(""), Branch::Root);
        assert_eq!(Branch::parse("1"), Branch::Register);
        assert_eq!(Branch::parse("2"), Branch::Lookup);
        assert_eq!(Branch::parse("3"), Branch::ReportIssue);
        assert_eq!(Branch::parse("4"), Branch::Payment);
        assert_eq!(Branch::parse("5"), Branch::Help);
        assert_eq!(Branch::parse("6"), Branch::Terms);
        assert_eq!(Branch::parse("7"), Branch::Unknown);
        assert_eq!(Branch::parse("99"), Branch::Unknown);
        assert_eq!(Branch::parse("hello"), Branch::Unknown);
    }

    proptest! {
        #[test]
        fn step_tracks_separator_count(text in "[0-9a-zA-Z *#]{0,40}") {
            let tokens = Tokens::parse(&text);
            prop_assert_eq!(tokens.step(), text.matches('*').count() + 1);
        }

        #[test]
        fn decoding_is_idempotent(text in "[0-9a-zA-Z *#]{0,40}") {
            let first = Tokens::parse(&text);
            let second = Tokens::parse(&text);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn answers_never_contain_the_separator(text in "[0-9a-zA-Z *#]{0,40}") {
            let tokens = Tokens::parse(&text);
            for n in 0..tokens.step() {
                prop_assert!(!tokens.answer(n).contains('*'));
            }
        }
    }
}
