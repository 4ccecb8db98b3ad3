//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `wizard`: Step sequence, open/close and submission handlers
//! - `fields`: Field edit handlers (amount, email, payment method, card)

pub(crate) mod fields;
pub(crate) mod keys;
pub(crate) mod update;
pub(crate) mod wizard;


use std::time::Duration;

use grove_core::DonationRecord;

use crate::message::Message;
use crate::wizard::{SessionId, WizardField};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// The wizard was reopened; the pending reset no longer applies
    CancelPendingReset,

    /// The wizard was closed: drop the session's pending focus, scroll and
    /// submission tasks, then deliver `ResetElapsed` after `delay`
    ScheduleReset {
        session_id: SessionId,
        delay: Duration,
    },

    /// Deliver `FocusElapsed` after `delay`, replacing any pending transfer
    ScheduleFocus {
        session_id: SessionId,
        field: WizardField,
        delay: Duration,
    },

    /// Deliver `ScrollElapsed` after `delay`
    ScheduleScrollToSubmit {
        session_id: SessionId,
        delay: Duration,
    },

    /// Hand the record to the payment gateway and report `SubmissionCompleted`
    SubmitDonation {
        session_id: SessionId,
        record: DonationRecord,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn then(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
