//! grove-app - Application state and orchestration for Grove
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! donation wizard: the session state machine, field handlers, deferred
//! timers, the Engine shared by the TUI and headless frontends, and
//! configuration loading.

pub mod actions;
pub mod campaign;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod wizard;

// Re-export primary types
pub use campaign::{format_dollars, CampaignState};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
pub use wizard::{DonationSession, SessionId, SubmitBlocker, WizardField};
