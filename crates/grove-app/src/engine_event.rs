//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. Headless mode turns them into JSON lines.

use grove_core::{Receipt, Step};

use crate::wizard::{SessionId, WizardField};

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Wizard Lifecycle
    // ─────────────────────────────────────────────────────────
    WizardOpened { session_id: SessionId },

    WizardClosed { session_id: SessionId },

    /// The open wizard moved to another step
    StepChanged { session_id: SessionId, step: Step },

    /// Keyboard focus moved inside the wizard
    FocusChanged {
        session_id: SessionId,
        field: WizardField,
    },

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    SubmissionStarted { session_id: SessionId, amount: u64 },

    DonationSucceeded {
        session_id: SessionId,
        receipt: Receipt,
    },

    SubmissionFailed {
        session_id: SessionId,
        message: String,
    },

    /// The campaign total changed
    TotalChanged { raised: u64, goal: u64 },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::WizardOpened { .. } => "wizard_opened",
            Self::WizardClosed { .. } => "wizard_closed",
            Self::StepChanged { .. } => "step_changed",
            Self::FocusChanged { .. } => "focus_changed",
            Self::SubmissionStarted { .. } => "submission_started",
            Self::DonationSucceeded { .. } => "donation_succeeded",
            Self::SubmissionFailed { .. } => "submission_failed",
            Self::TotalChanged { .. } => "total_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
