//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `wizard`: open/close, step sequence, submission and timer completions
//! - `fields`: edits to the amount, email, payment method and card inputs

use crate::message::Message;
use crate::state::AppState;

use super::{fields, keys::handle_key, wizard, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => fields::handle_paste(state, text),

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Wizard Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::OpenWizard => wizard::handle_open(state),
        Message::CloseWizard => wizard::handle_close(state),
        Message::Continue => wizard::handle_continue(state),
        Message::Back => wizard::handle_back(state),
        Message::FocusNext => wizard::handle_focus_move(state, true),
        Message::FocusPrev => wizard::handle_focus_move(state, false),
        Message::ScrollWizard(delta) => {
            if state.wizard_open {
                state.wizard_scroll = state.wizard_scroll.saturating_add_signed(delta);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Type & Amount
        // ─────────────────────────────────────────────────────────
        Message::SetCadence(cadence) => fields::handle_set_cadence(state, cadence),
        Message::SelectPreset(amount) => fields::handle_select_preset(state, amount),
        Message::MovePresetCursor(delta) => fields::handle_move_preset_cursor(state, delta),
        Message::CustomAmountChar(c) => fields::handle_custom_amount_char(state, c),
        Message::CustomAmountBackspace => fields::handle_custom_amount_backspace(state),
        Message::SetCustomAmount(text) => fields::handle_set_custom_amount(state, &text),
        Message::TogglePlantTree => fields::handle_toggle_plant_tree(state),

        // ─────────────────────────────────────────────────────────
        // Payment Details
        // ─────────────────────────────────────────────────────────
        Message::EmailChar(c) => fields::handle_email_char(state, c),
        Message::EmailBackspace => fields::handle_email_backspace(state),
        Message::SetEmail(email) => fields::handle_set_email(state, email),
        Message::TogglePaymentMethod(method) => fields::handle_toggle_payment_method(state, method),
        Message::MoveMethodCursor(delta) => fields::handle_move_method_cursor(state, delta),
        Message::CardInput { field, text } => fields::handle_card_input(state, field, &text),
        Message::CardBackspace(field) => fields::handle_card_backspace(state, field),
        Message::SetCardField { field, value } => fields::handle_set_card_field(state, field, &value),
        Message::CardFieldsChanged => fields::handle_card_fields_changed(state),
        Message::Submit => wizard::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Deferred Completions
        // ─────────────────────────────────────────────────────────
        Message::ResetElapsed { session_id } => wizard::handle_reset_elapsed(state, session_id),
        Message::FocusElapsed { session_id, field } => {
            wizard::handle_focus_elapsed(state, session_id, field)
        }
        Message::ScrollElapsed { session_id } => wizard::handle_scroll_elapsed(state, session_id),
        Message::SubmissionCompleted { session_id, result } => {
            wizard::handle_submission_completed(state, session_id, result)
        }
    }
}
