//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the wizard's scheduled
//! tasks, the payment gateway, the shutdown signal and the settings. Both
//! frontends drive it the same way: feed messages in, render or report state.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use grove_core::prelude::*;
use grove_core::{Step, SubmissionState};
use grove_gateway::{PaymentGateway, SimulatedGateway};

use crate::actions::ScheduledTasks;
use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::wizard::{SessionId, WizardField};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    open_session: Option<SessionId>,
    step: Option<Step>,
    focused: Option<WizardField>,
    submission: Option<SubmissionState>,
    raised: u64,
    last_error: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let session = state.active_session();
        Self {
            open_session: session.map(|s| s.id),
            step: session.map(|s| s.step),
            focused: session.and_then(|s| s.focused),
            submission: session.map(|s| s.submission_state),
            raised: state.campaign.raised,
            last_error: state.last_error.clone(),
        }
    }
}

/// Orchestration engine for Grove.
///
/// Generic over the payment gateway so tests can swap in an instant one.
pub struct Engine<G = SimulatedGateway> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Pending timers and the in-flight submission
    tasks: ScheduledTasks,

    /// Backend that accepts finalized donations
    gateway: Arc<G>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Loaded settings (cached from config)
    pub settings: Settings,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<SimulatedGateway> {
    /// Create an Engine from the config file at `config_path` (or the default location).
    ///
    /// Loads settings, builds the simulated gateway with the configured
    /// latency and spawns the OS signal handler.
    pub fn new(config_path: Option<&Path>) -> Self {
        let settings = match config::resolve_config_path(config_path) {
            Some(path) => config::load_settings(&path),
            None => {
                warn!("No config directory available, using default settings");
                Settings::default()
            }
        };

        let engine = Self::with_settings(settings);
        signals::spawn_signal_handler(engine.msg_sender());
        engine
    }

    /// Create an Engine with explicit settings and the simulated gateway
    pub fn with_settings(settings: Settings) -> Self {
        let gateway = SimulatedGateway::new(settings.timing.submit_latency());
        Engine::with_gateway(settings, gateway)
    }
}

impl<G> Engine<G>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    /// Create an Engine around any payment gateway
    pub fn with_gateway(settings: Settings, gateway: G) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            tasks: ScheduledTasks::new(),
            gateway: Arc::new(gateway),
            shutdown_tx,
            shutdown_rx,
            settings,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Runs `update()`, dispatches resulting actions, applies any settled
    /// focus transfer, then emits events for what changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &mut self.tasks,
            &self.gateway,
        );

        if let Some(field) = self.state.apply_focus_target() {
            debug!("Focus moved to {:?}", field);
        }

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it. Returns `false` once the channel closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of scheduled tasks still waiting to fire
    pub fn pending_tasks(&self) -> usize {
        self.tasks.pending()
    }

    /// Initiate shutdown: abort scheduled tasks and signal background tasks.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        if self.tasks.has_pending_submission() {
            warn!("Shutting down with a donation still being submitted");
        }
        self.tasks.abort_all();

        let _ = self.shutdown_tx.send(true);
        info!("Engine shut down");
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre == post {
            return;
        }

        if pre.open_session != post.open_session {
            if let Some(session_id) = pre.open_session {
                self.emit(EngineEvent::WizardClosed { session_id });
            }
            if let Some(session_id) = post.open_session {
                self.emit(EngineEvent::WizardOpened { session_id });
            }
        }

        let Some(session_id) = post.open_session else {
            self.emit_total(pre, post);
            return;
        };
        let same_session = pre.open_session == post.open_session;

        if let Some(step) = post.step {
            if !same_session || pre.step != post.step {
                self.emit(EngineEvent::StepChanged { session_id, step });
            }
        }

        if let Some(field) = post.focused {
            if !same_session || pre.focused != post.focused {
                self.emit(EngineEvent::FocusChanged { session_id, field });
            }
        }

        if same_session && pre.submission != post.submission {
            self.emit_submission_change(session_id, pre, post);
        }

        self.emit_total(pre, post);
    }

    fn emit_submission_change(&self, session_id: SessionId, pre: &StateSnapshot, post: &StateSnapshot) {
        let session = self.state.active_session();
        match post.submission {
            Some(SubmissionState::Submitting) => {
                let amount = session.and_then(|s| s.amount()).unwrap_or_default();
                self.emit(EngineEvent::SubmissionStarted { session_id, amount });
            }
            Some(SubmissionState::Succeeded) => {
                if let Some(receipt) = session.and_then(|s| s.receipt.clone()) {
                    self.emit(EngineEvent::DonationSucceeded {
                        session_id,
                        receipt,
                    });
                }
            }
            Some(SubmissionState::Idle) if pre.submission == Some(SubmissionState::Submitting) => {
                let message = post
                    .last_error
                    .clone()
                    .unwrap_or_else(|| "submission failed".to_string());
                self.emit(EngineEvent::SubmissionFailed {
                    session_id,
                    message,
                });
            }
            _ => {}
        }
    }

    fn emit_total(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.raised != post.raised {
            self.emit(EngineEvent::TotalChanged {
                raised: post.raised,
                goal: self.state.campaign.goal,
            });
        }
    }

    /// Broadcast an event; no subscribers is not an error.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
