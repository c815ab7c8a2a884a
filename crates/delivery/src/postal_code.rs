//! CEP (Brazilian postal code) normalization and validation.

use serde::{Deserialize, Serialize};

use horta_core::{DomainError, DomainResult, ValueObject};

/// Number of digits in a complete CEP.
pub const CEP_DIGITS: usize = 8;

/// Message returned when a postal code fails the 8-digit rule at estimation time.
pub const INVALID_CEP: &str = "CEP inválido";

/// Strip every non-digit character.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format raw input as the user types.
///
/// Up to 5 digits are returned unchanged; beyond that the result is
/// `DDDDD-DDD`. Digits past the 8th are dropped silently.
pub fn format(raw: &str) -> String {
    let digits = digits(raw);
    if digits.len() <= 5 {
        return digits;
    }
    let end = digits.len().min(CEP_DIGITS);
    format!("{}-{}", &digits[..5], &digits[5..end])
}

/// True iff the input carries exactly 8 digits once formatting is stripped.
pub fn is_valid(raw: &str) -> bool {
    digits(raw).len() == CEP_DIGITS
}

/// A postal code that passed the 8-digit rule.
///
/// Keeps the text exactly as received next to its digits, since estimates echo
/// the caller's original string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalCode {
    raw: String,
    digits: String,
}

impl ValueObject for PostalCode {}

impl PostalCode {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let digits = digits(raw);
        if digits.len() != CEP_DIGITS {
            return Err(DomainError::invalid_input(INVALID_CEP));
        }
        Ok(Self {
            raw: raw.to_string(),
            digits,
        })
    }

    /// The input as received, formatting included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Exactly 8 ASCII digits.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The trailing three digits as an integer in `0..=999`.
    pub fn last_three(&self) -> u32 {
        self.digits.as_bytes()[CEP_DIGITS - 3..]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl core::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", &self.digits[..5], &self.digits[5..])
    }
}
