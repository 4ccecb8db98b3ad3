//! Test utilities for the payment gateway
//!
//! Provides a gateway that resolves immediately and remembers what it was given,
//! optionally declining every donation.

use std::sync::{Arc, Mutex};

use chrono::Local;

use grove_core::prelude::*;
use grove_core::{DonationRecord, Receipt};

use crate::gateway::PaymentGateway;

/// Resolves instantly and records every submitted donation.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    submitted: Arc<Mutex<Vec<DonationRecord>>>,
    decline: Option<String>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that records, then declines, every donation
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            decline: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Donations submitted so far, in order.
    pub fn submitted(&self) -> Vec<DonationRecord> {
        self.submitted
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl PaymentGateway for RecordingGateway {
    async fn submit(&self, record: DonationRecord) -> Result<Receipt> {
        let receipt = Receipt {
            reference: "GRV-00000000".to_string(),
            amount: record.amount,
            cadence: record.cadence,
            accepted_at: Local::now(),
        };
        if let Ok(mut records) = self.submitted.lock() {
            records.push(record);
        }
        match &self.decline {
            Some(reason) => Err(Error::gateway(reason.clone())),
            None => Ok(receipt),
        }
    }
}

/// A card donation, as the end-to-end flow builds it.
pub fn test_record(amount: u64) -> DonationRecord {
    DonationRecord {
        amount,
        cadence: grove_core::Cadence::OneTime,
        plant_tree_opt_in: true,
        email: None,
        payment_method: Some(grove_core::PaymentMethod::Card),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_gateway_remembers_records() {
        let gateway = RecordingGateway::new();
        let receipt = gateway.submit(test_record(25)).await.unwrap();

        assert_eq!(receipt.amount, 25);
        assert_eq!(gateway.submitted(), vec![test_record(25)]);
    }

    #[tokio::test]
    async fn test_declining_gateway_returns_gateway_error() {
        let gateway = RecordingGateway::declining("card declined");
        let err = gateway.submit(test_record(25)).await.unwrap_err();

        assert!(matches!(err, Error::Gateway { .. }));
        assert_eq!(err.to_string(), "Payment gateway error: card declined");
        assert_eq!(gateway.submitted(), vec![test_record(25)]);
    }

    #[tokio::test]
    async fn test_clones_share_history() {
        let gateway = RecordingGateway::new();
        let clone = gateway.clone();
        clone.submit(test_record(10)).await.unwrap();

        assert_eq!(gateway.submitted().len(), 1);
    }
}
