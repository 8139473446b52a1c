//! Local helpers for company details shown on a quote.
//!
//! Taiwanese unified business numbers (統一編號) are checked for shape only:
//! eight digits once separators are stripped. Looking a number up against a
//! registry is left to callers.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_whole;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("non-digit pattern is valid"));

const TAX_ID_LEN: usize = 8;

/// Errors returned by [`validate_tax_id`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxIdError {
    /// The number does not have exactly eight digits.
    #[error("tax ID must have exactly 8 digits, got {0}")]
    WrongLength(usize),
}

/// Strips everything but ASCII `0-9` from `tax_id` and checks it has exactly
/// eight digits.
///
/// # Errors
///
/// Returns [`TaxIdError::WrongLength`] with the digit count otherwise.
///
/// # Examples
///
/// ```
/// use quote_core::company_info::{TaxIdError, validate_tax_id};
///
/// assert_eq!(validate_tax_id("2246-6560"), Ok("22466560".to_string()));
/// assert_eq!(validate_tax_id("2246656"), Err(TaxIdError::WrongLength(7)));
/// ```
pub fn validate_tax_id(tax_id: &str) -> Result<String, TaxIdError> {
    let digits = NON_DIGITS.replace_all(tax_id, "");
    // Only ASCII digits survive, so the byte length is the digit count.
    if digits.len() != TAX_ID_LEN {
        return Err(TaxIdError::WrongLength(digits.len()));
    }
    Ok(digits.into_owned())
}

/// Returns the bare eight digits when `tax_id` is well formed, or the input
/// unchanged otherwise.
pub fn format_tax_id(tax_id: &str) -> String {
    validate_tax_id(tax_id).unwrap_or_else(|_| tax_id.to_string())
}

/// Formats a currency amount as `NT$ 1,234,567`, rounded to whole units.
pub fn format_price(amount: Decimal) -> String {
    let rounded = round_whole(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("NT$ {sign}{grouped}")
}
