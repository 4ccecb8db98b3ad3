//! # grove-gateway - Payment Submission
//!
//! The payment backend the wizard hands a finalized donation to. There is no
//! real payment network: [`SimulatedGateway`] waits a fixed latency and then
//! accepts every donation with a generated receipt.
//!
//! Depends on [`grove_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`PaymentGateway`] / [`LocalPaymentGateway`] - Service trait for submitting a donation
//! - [`SimulatedGateway`] - Timer-backed implementation used by the app
//! - [`new_reference()`] - Generate a `GRV-XXXXXXXX` receipt reference

pub mod gateway;
pub mod simulated;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use gateway::{LocalPaymentGateway, PaymentGateway};
pub use simulated::{new_reference, SimulatedGateway, DEFAULT_SUBMIT_LATENCY};
