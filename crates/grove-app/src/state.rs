//! Application state (Model in TEA pattern)

use grove_core::prelude::*;
use grove_core::YearMonth;

use crate::campaign::CampaignState;
use crate::config::Settings;
use crate::wizard::{next_session_id, DonationSession, SessionId, WizardField};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Campaign page with the progress bar and the donate button
    #[default]
    Page,

    /// Donation wizard modal over the page
    Wizard,

    /// Quit confirmation while a donation is being submitted
    ConfirmQuit,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Mode to restore when the quit prompt is dismissed
    pub(crate) mode_before_confirm: UiMode,

    /// Application phase
    pub phase: AppPhase,

    /// Loaded settings
    pub settings: Settings,

    /// Fundraising totals shown by the page shell
    pub campaign: CampaignState,

    /// Whether the wizard modal is currently shown
    pub wizard_open: bool,

    /// The wizard's session; kept after close until the reset delay elapses
    pub session: Option<DonationSession>,

    /// First visible line of the wizard body, owned by the view
    pub wizard_scroll: u16,

    /// Pinned "current month" for expiry checks (tests and scripted runs)
    pub now_override: Option<YearMonth>,

    /// Last infrastructure error worth showing to the user
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create AppState with loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::Page,
            mode_before_confirm: UiMode::Page,
            phase: AppPhase::Running,
            campaign: CampaignState::from_settings(&settings.campaign),
            settings,
            wizard_open: false,
            session: None,
            wizard_scroll: 0,
            now_override: None,
            last_error: None,
        }
    }

    /// Month used when judging card expiry
    pub fn now(&self) -> YearMonth {
        self.now_override.unwrap_or_else(YearMonth::now)
    }

    // ─────────────────────────────────────────────────────────
    // Wizard Session
    // ─────────────────────────────────────────────────────────

    /// Show the wizard with a fresh session, replacing whatever was left behind
    pub fn open_wizard(&mut self) -> SessionId {
        let session = DonationSession::new(next_session_id());
        let id = session.id;
        self.session = Some(session);
        self.wizard_open = true;
        self.wizard_scroll = 0;
        self.ui_mode = UiMode::Wizard;
        info!("Wizard opened (session {})", id);
        id
    }

    /// Hide the wizard. The session lingers until [`AppState::reset_session`].
    ///
    /// Returns the id of the session that was open, if any.
    pub fn close_wizard(&mut self) -> Option<SessionId> {
        if !self.wizard_open {
            return None;
        }
        self.wizard_open = false;
        self.ui_mode = UiMode::Page;
        let id = self.session.as_ref().map(|s| s.id);
        if let Some(session) = self.session.as_mut() {
            session.focus_target = None;
            session.scroll_to_submit = false;
        }
        info!("Wizard closed (session {:?})", id);
        id
    }

    /// Discard the closed wizard's session, unless the wizard was reopened since
    pub fn reset_session(&mut self, session_id: SessionId) -> bool {
        let matches = self.session.as_ref().map(|s| s.id) == Some(session_id);
        if self.wizard_open || !matches {
            debug!("Ignoring stale reset for session {}", session_id);
            return false;
        }
        self.session = None;
        self.wizard_scroll = 0;
        debug!("Session {} reset", session_id);
        true
    }

    /// The session of the open wizard
    pub fn active_session(&self) -> Option<&DonationSession> {
        self.session.as_ref().filter(|_| self.wizard_open)
    }

    /// Mutable session of the open wizard
    pub fn active_session_mut(&mut self) -> Option<&mut DonationSession> {
        if self.wizard_open {
            self.session.as_mut()
        } else {
            None
        }
    }

    /// The open wizard's session, if it has id `session_id`
    pub fn session_with_id_mut(&mut self, session_id: SessionId) -> Option<&mut DonationSession> {
        self.active_session_mut().filter(|s| s.id == session_id)
    }

    /// Apply a pending focus transfer once, if its field is still mounted
    pub fn apply_focus_target(&mut self) -> Option<WizardField> {
        self.active_session_mut()?.take_focus_target()
    }

    /// Consume the pending request to bring the submit control into view
    pub fn take_scroll_request(&mut self) -> bool {
        match self.active_session_mut() {
            Some(session) => std::mem::take(&mut session.scroll_to_submit),
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit Handling
    // ─────────────────────────────────────────────────────────

    /// Request to quit - may show confirmation if a donation is in flight
    pub fn request_quit(&mut self) {
        let submitting = self
            .active_session()
            .map(DonationSession::is_submitting)
            .unwrap_or(false);

        if submitting && self.settings.behavior.confirm_quit {
            self.mode_before_confirm = self.ui_mode;
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation prompt)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation prompt)
    pub fn cancel_quit(&mut self) {
        self.ui_mode = self.mode_before_confirm;
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
