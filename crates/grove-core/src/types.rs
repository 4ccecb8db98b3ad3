//! Core domain types for the donation wizard

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// Quick-select donation values, in display order.
pub const PRESET_AMOUNTS: [u64; 4] = [10, 25, 50, 100];

/// The amount seeded into a fresh amount step.
pub const MIN_PRESET_AMOUNT: u64 = PRESET_AMOUNTS[0];

/// Position in the wizard's fixed step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    TypeSelection,
    AmountSelection,
    PaymentDetails,
    Success,
}

impl Step {
    /// Dialog title shown above the step content.
    pub fn title(&self) -> &'static str {
        match self {
            Step::TypeSelection => "Choose Donation Type",
            Step::AmountSelection => "Select Amount",
            Step::PaymentDetails => "Complete Donation",
            Step::Success => "Thank You for Your Donation",
        }
    }

    /// 1-based stepper index; `None` for the success screen, which hides the stepper.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Step::TypeSelection => Some(1),
            Step::AmountSelection => Some(2),
            Step::PaymentDetails => Some(3),
            Step::Success => None,
        }
    }
}

/// How often the donation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    #[default]
    OneTime,
    Monthly,
}

impl Cadence {
    pub fn label(&self) -> &'static str {
        match self {
            Cadence::OneTime => "One-time",
            Cadence::Monthly => "Monthly",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Cadence::OneTime => "Make a one-time contribution to our forest initiative",
            Cadence::Monthly => "Support us with a recurring monthly donation",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Cadence::OneTime => Cadence::Monthly,
            Cadence::Monthly => Cadence::OneTime,
        }
    }
}

/// Payment method offered on the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
        }
    }
}

/// Lifecycle of the (single) submission a session may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// A calendar month, used as "now" when judging card expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn now() -> Self {
        let today = Local::now();
        Self::new(today.year(), today.month())
    }
}

/// The payment card sub-form as the user sees it (already masked).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub number_text: String,
    pub expiry_text: String,
    pub cvc_text: String,
}

impl CardDetails {
    /// Count of digits in the number field, separators ignored.
    pub fn number_digit_count(&self) -> usize {
        self.number_text.chars().filter(|c| c.is_ascii_digit()).count()
    }

    pub fn clear(&mut self) {
        self.number_text.clear();
        self.expiry_text.clear();
        self.cvc_text.clear();
    }
}

/// The finalized donation handed to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub amount: u64,
    pub cadence: Cadence,
    pub plant_tree_opt_in: bool,
    pub email: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

/// Confirmation returned by the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Opaque reference, e.g. `GRV-4F2A9C1B`.
    pub reference: String,
    pub amount: u64,
    pub cadence: Cadence,
    pub accepted_at: DateTime<Local>,
}
