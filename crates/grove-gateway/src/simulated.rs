//! Simulated payment backend

use std::time::Duration;

use chrono::Local;
use rand::Rng;

use grove_core::prelude::*;
use grove_core::{DonationRecord, Receipt};

use crate::gateway::PaymentGateway;

/// Latency of the simulated backend when none is configured
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(800);

/// Accepts every donation after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}

impl PaymentGateway for SimulatedGateway {
    async fn submit(&self, record: DonationRecord) -> Result<Receipt> {
        debug!(
            amount = record.amount,
            cadence = ?record.cadence,
            method = ?record.payment_method,
            "Simulating payment submission ({}ms)",
            self.latency.as_millis()
        );

        tokio::time::sleep(self.latency).await;

        let receipt = Receipt {
            reference: new_reference(),
            amount: record.amount,
            cadence: record.cadence,
            accepted_at: Local::now(),
        };
        info!("Donation of ${} accepted ({})", receipt.amount, receipt.reference);
        Ok(receipt)
    }
}

/// Random receipt reference: `GRV-` followed by eight hex digits
pub fn new_reference() -> String {
    let token: u32 = rand::thread_rng().gen();
    format!("GRV-{token:08X}")
}
