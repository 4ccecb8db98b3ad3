//! Focus navigator
//!
//! Decides, from a single edit to one card field, whether input focus should
//! hop to a neighbouring field. Completing a field moves forward; deleting a
//! field down to nothing moves back. The caller owns the actual focus and the
//! settle delay before applying a transfer.

use serde::{Deserialize, Serialize};

use crate::format::digits_only;
use crate::validate::is_expiry_format_complete;

/// Shortest card number considered complete.
pub const CARD_NUMBER_MIN_DIGITS: usize = 13;

/// Longest card number in circulation.
pub const CARD_NUMBER_MAX_DIGITS: usize = 19;

/// The three inputs of the card sub-form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Number,
    Expiry,
    Cvc,
}

impl CardField {
    pub fn label(&self) -> &'static str {
        match self {
            CardField::Number => "Card number",
            CardField::Expiry => "Expiry (MM/YY)",
            CardField::Cvc => "CVC",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            CardField::Number => Some(CardField::Expiry),
            CardField::Expiry => Some(CardField::Cvc),
            CardField::Cvc => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            CardField::Number => None,
            CardField::Expiry => Some(CardField::Number),
            CardField::Cvc => Some(CardField::Expiry),
        }
    }
}

/// What the keystroke did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Typed or pasted `chars` characters.
    Insert { chars: usize },
    /// Removed a character.
    Delete,
}

impl Edit {
    pub fn typed() -> Self {
        Edit::Insert { chars: 1 }
    }
}

/// Where focus should go after `field` changed from `before` to `after`.
///
/// Both texts are the formatted values. Returns `None` when focus stays put.
pub fn focus_after_edit(field: CardField, before: &str, after: &str, edit: Edit) -> Option<CardField> {
    match edit {
        Edit::Insert { .. } => forward_target(field, before, after),
        Edit::Delete => backward_target(field, before, after),
    }
}

fn forward_target(field: CardField, before: &str, after: &str) -> Option<CardField> {
    match field {
        CardField::Number => {
            let before_digits = digits_only(before).len();
            let after_digits = digits_only(after).len();
            let grew = after_digits > before_digits;
            let in_range = (CARD_NUMBER_MIN_DIGITS..=CARD_NUMBER_MAX_DIGITS).contains(&after_digits);
            (grew && in_range).then_some(CardField::Expiry)
        }
        CardField::Expiry => (is_expiry_format_complete(after)
            && !is_expiry_format_complete(before))
        .then_some(CardField::Cvc),
        CardField::Cvc => None,
    }
}

fn backward_target(field: CardField, before: &str, after: &str) -> Option<CardField> {
    let emptied = !before.is_empty() && after.is_empty();
    if emptied {
        field.prev().filter(|_| field != CardField::Number)
    } else {
        None
    }
}
