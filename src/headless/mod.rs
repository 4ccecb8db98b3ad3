//! Headless mode - JSON event output for scripted runs
//!
//! Instead of drawing the wizard, headless mode reads line-oriented commands
//! from stdin (see [`script`]) and writes one JSON object per engine event to
//! stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"step_changed","step":"amount_selection","timestamp":1704700001000}
//! {"event":"submitted","amount":50,"timestamp":1704700002000}
//! {"event":"succeeded","reference":"GRV-7Q2K9D","amount":50,"cadence":"monthly","timestamp":1704700002800}
//! ```

pub mod runner;
pub mod script;

pub use runner::run_headless;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use grove_app::{EngineEvent, WizardField};
use grove_core::{Cadence, CardField, Step};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Wizard shown with a fresh session
    Opened { session_id: u64, timestamp: i64 },

    /// Wizard dismissed
    Closed { session_id: u64, timestamp: i64 },

    /// The wizard moved to another step
    StepChanged { step: Step, timestamp: i64 },

    /// Keyboard focus moved inside the wizard
    Focus { field: &'static str, timestamp: i64 },

    /// A donation was handed to the gateway
    Submitted { amount: u64, timestamp: i64 },

    /// The gateway accepted the donation
    Succeeded {
        reference: String,
        amount: u64,
        cadence: Cadence,
        timestamp: i64,
    },

    /// Campaign total after a successful donation
    Total {
        raised: u64,
        goal: u64,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Translate an engine event; `None` for events scripts don't observe
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::WizardOpened { session_id } => Self::Opened {
                session_id: *session_id,
                timestamp,
            },
            EngineEvent::WizardClosed { session_id } => Self::Closed {
                session_id: *session_id,
                timestamp,
            },
            EngineEvent::StepChanged { step, .. } => Self::StepChanged {
                step: *step,
                timestamp,
            },
            EngineEvent::FocusChanged { field, .. } => Self::Focus {
                field: field_name(*field),
                timestamp,
            },
            EngineEvent::SubmissionStarted { amount, .. } => Self::Submitted {
                amount: *amount,
                timestamp,
            },
            EngineEvent::DonationSucceeded { receipt, .. } => Self::Succeeded {
                reference: receipt.reference.clone(),
                amount: receipt.amount,
                cadence: receipt.cadence,
                timestamp,
            },
            EngineEvent::SubmissionFailed { message, .. } => Self::error(message.clone(), false),
            EngineEvent::TotalChanged { raised, goal } => Self::Total {
                raised: *raised,
                goal: *goal,
                timestamp,
            },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// Stable snake_case name of a wizard control
fn field_name(field: WizardField) -> &'static str {
    match field {
        WizardField::Cadence => "cadence",
        WizardField::Presets => "presets",
        WizardField::CustomAmount => "custom_amount",
        WizardField::PlantTree => "plant_tree",
        WizardField::Email => "email",
        WizardField::Method => "method",
        WizardField::Card(CardField::Number) => "card_number",
        WizardField::Card(CardField::Expiry) => "card_expiry",
        WizardField::Card(CardField::Cvc) => "card_cvc",
    }
}
