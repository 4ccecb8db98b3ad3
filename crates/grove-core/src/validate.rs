//! Field validators
//!
//! Predicates over the masked text produced by [`crate::format`].

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{CardDetails, YearMonth};

static EXPIRY_COMPLETE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("Invalid expiry regex"));

static CVC_COMPLETE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("Invalid CVC regex"));

/// `true` when the expiry reads exactly `MM/YY`.
pub fn is_expiry_format_complete(text: &str) -> bool {
    EXPIRY_COMPLETE.is_match(text)
}

/// `false` only for a complete `MM/YY` whose month is before `now`.
///
/// Incomplete input is never judged. Years are read as `2000 + YY`; the
/// month is assumed already clamped by the formatter.
pub fn is_expiry_temporally_valid(text: &str, now: YearMonth) -> bool {
    let Some((month, year)) = parse_expiry(text) else {
        return true;
    };
    !(year < now.year || (year == now.year && month < now.month))
}

fn parse_expiry(text: &str) -> Option<(u32, i32)> {
    if !is_expiry_format_complete(text) {
        return None;
    }
    let (month, year) = text.split_once('/')?;
    Some((month.parse().ok()?, 2000 + year.parse::<i32>().ok()?))
}

/// Exactly three digits.
pub fn is_cvc_valid(text: &str) -> bool {
    CVC_COMPLETE.is_match(text)
}

/// Expiry complete and not in the past, CVC complete.
///
/// The card number is deliberately left out: it is accepted as typed.
pub fn is_card_record_valid(card: &CardDetails, now: YearMonth) -> bool {
    is_expiry_format_complete(&card.expiry_text)
        && is_expiry_temporally_valid(&card.expiry_text, now)
        && is_cvc_valid(&card.cvc_text)
}

/// Every field the card sub-form requires, including a non-empty number.
pub fn are_card_fields_ready(card: &CardDetails, now: YearMonth) -> bool {
    !card.number_text.is_empty() && is_card_record_valid(card, now)
}

/// The amount step may be left once the custom amount holds anything.
pub fn is_amount_valid(custom_amount_text: &str) -> bool {
    !custom_amount_text.is_empty()
}
