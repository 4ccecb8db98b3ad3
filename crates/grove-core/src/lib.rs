//! # grove-core - Core Domain Types
//!
//! Foundation crate for Grove. Provides the donation domain types, the input
//! formatters and field validators that run on every keystroke, the focus
//! navigator for the card sub-form, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Step`] - Position in the wizard (TypeSelection, AmountSelection, PaymentDetails, Success)
//! - [`Cadence`] - One-time or monthly donation
//! - [`PaymentMethod`] - Card, Apple Pay or Google Pay
//! - [`CardDetails`] - Masked card number, expiry and CVC text
//! - [`DonationRecord`], [`Receipt`] - What is submitted and what comes back
//!
//! ### Input Formatters (`format`)
//! - [`format_card_number()`] - Group digits in fours
//! - [`format_expiry()`] - `MM/YY` mask with month clamping
//! - [`format_cvc()`] - Three digits at most
//! - [`sanitize_custom_amount()`] - Digit-only filter for the custom amount
//!
//! ### Field Validators (`validate`)
//! - [`is_expiry_format_complete()`], [`is_expiry_temporally_valid()`]
//! - [`is_cvc_valid()`], [`is_card_record_valid()`], [`are_card_fields_ready()`]
//!
//! ### Focus Navigator (`focus`)
//! - [`CardField`] - Number, Expiry, Cvc
//! - [`focus_after_edit()`] - Where focus goes after an edit
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure errors (terminal, config, gateway, script)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use grove_core::prelude::*;
//! ```

pub mod error;
pub mod focus;
pub mod format;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use focus::{focus_after_edit, CardField, Edit};
pub use format::{
    digits_only, format_card_number, format_cvc, format_expiry, sanitize_custom_amount,
};
pub use types::{
    Cadence, CardDetails, DonationRecord, PaymentMethod, Receipt, Step, SubmissionState,
    YearMonth, MIN_PRESET_AMOUNT, PRESET_AMOUNTS,
};
pub use validate::{
    are_card_fields_ready, is_amount_valid, is_card_record_valid, is_cvc_valid,
    is_expiry_format_complete, is_expiry_temporally_valid,
};
