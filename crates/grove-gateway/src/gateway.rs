//! Payment gateway service trait

use grove_core::prelude::*;
use grove_core::{DonationRecord, Receipt};

/// Submission of a finalized donation
///
/// The app spawns each call on its own task, so implementations provide the
/// `Send` variant; `LocalPaymentGateway` follows from it.
#[trait_variant::make(PaymentGateway: Send)]
pub trait LocalPaymentGateway {
    /// Submit the donation, resolving once the backend has accepted it
    async fn submit(&self, record: DonationRecord) -> Result<Receipt>;
}
