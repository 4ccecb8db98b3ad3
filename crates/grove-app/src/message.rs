//! Message types for the application (TEA pattern)

use grove_core::{Cadence, CardField, PaymentMethod, Receipt};

use crate::input_key::InputKey;
use crate::wizard::{SessionId, WizardField};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal, routed to the focused input
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may ask for confirmation mid-submission)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation prompt
    ConfirmQuit,

    /// Cancel quit from confirmation prompt
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Wizard Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Open the donation wizard with a fresh session
    OpenWizard,

    /// Close (dismiss) the wizard from any step
    CloseWizard,

    /// Forward transition of the current step
    Continue,

    /// Back transition of the current step
    Back,

    /// Move focus to the next mounted control
    FocusNext,

    /// Move focus to the previous mounted control
    FocusPrev,

    /// Scroll the wizard body by a number of lines
    ScrollWizard(i16),

    // ─────────────────────────────────────────────────────────
    // Type & Amount
    // ─────────────────────────────────────────────────────────
    SetCadence(Cadence),

    /// Quick-select one of the preset amounts
    SelectPreset(u64),

    /// Move the highlighted preset left (-1) or right (+1)
    MovePresetCursor(i8),

    /// Keystroke in the custom amount field
    CustomAmountChar(char),

    CustomAmountBackspace,

    /// Replace the custom amount text (filtered to digits)
    SetCustomAmount(String),

    TogglePlantTree,

    // ─────────────────────────────────────────────────────────
    // Payment Details
    // ─────────────────────────────────────────────────────────
    EmailChar(char),

    EmailBackspace,

    SetEmail(String),

    /// Select a payment method, or clear it when already selected
    TogglePaymentMethod(PaymentMethod),

    /// Move the highlighted payment method left (-1) or right (+1)
    MoveMethodCursor(i8),

    /// Typed or pasted text appended to a card field
    CardInput { field: CardField, text: String },

    /// Backspace in a card field
    CardBackspace(CardField),

    /// Replace a card field's content
    SetCardField { field: CardField, value: String },

    /// Card inputs changed; re-derive readiness for auto-scroll
    CardFieldsChanged,

    /// Final confirmation on the payment step
    Submit,

    // ─────────────────────────────────────────────────────────
    // Deferred Completions
    // ─────────────────────────────────────────────────────────
    /// Settle delay after close elapsed
    ResetElapsed { session_id: SessionId },

    /// Settle delay before a focus transfer elapsed
    FocusElapsed {
        session_id: SessionId,
        field: WizardField,
    },

    /// Settle delay before scrolling to the submit control elapsed
    ScrollElapsed { session_id: SessionId },

    /// Payment gateway resolved
    SubmissionCompleted {
        session_id: SessionId,
        result: Result<Receipt, String>,
    },
}
