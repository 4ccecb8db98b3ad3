//! Per-open donation session state

mod fields;
mod session;

#[cfg(test)]
mod tests;

pub use fields::WizardField;
pub use session::{DonationSession, SubmitBlocker};

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a donation session
pub type SessionId = u64;

static SESSION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique session ID
pub fn next_session_id() -> SessionId {
    SESSION_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}
