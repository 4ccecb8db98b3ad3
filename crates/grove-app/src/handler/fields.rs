//! Field edit handlers
//!
//! Formatting and validation run synchronously on every edit. Card edits may
//! additionally schedule a focus transfer and re-check readiness for the
//! auto-scroll to the submit control.

use grove_core::prelude::*;
use grove_core::{Cadence, CardField, PaymentMethod, YearMonth, PRESET_AMOUNTS};

use crate::message::Message;
use crate::state::AppState;
use crate::wizard::{DonationSession, WizardField};

use super::wizard::recheck_card_readiness;
use super::{UpdateAction, UpdateResult};

/// Run `edit` against the open session; a no-op when the wizard is closed
fn with_session(state: &mut AppState, edit: impl FnOnce(&mut DonationSession)) -> UpdateResult {
    if let Some(session) = state.active_session_mut() {
        edit(session);
    }
    UpdateResult::none()
}

fn step_cursor(cursor: usize, delta: i8, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + delta as isize).rem_euclid(len as isize) as usize
}

// ─────────────────────────────────────────────────────────
// Type & Amount
// ─────────────────────────────────────────────────────────

pub fn handle_set_cadence(state: &mut AppState, cadence: Cadence) -> UpdateResult {
    with_session(state, |session| session.set_cadence(cadence))
}

pub fn handle_select_preset(state: &mut AppState, amount: u64) -> UpdateResult {
    with_session(state, |session| {
        if session.select_preset(amount) {
            if let Some(index) = PRESET_AMOUNTS.iter().position(|a| *a == amount) {
                session.preset_cursor = index;
            }
        }
    })
}

pub fn handle_move_preset_cursor(state: &mut AppState, delta: i8) -> UpdateResult {
    with_session(state, |session| {
        session.preset_cursor = step_cursor(session.preset_cursor, delta, PRESET_AMOUNTS.len());
    })
}

pub fn handle_custom_amount_char(state: &mut AppState, c: char) -> UpdateResult {
    with_session(state, |session| session.type_custom_amount(c))
}

pub fn handle_custom_amount_backspace(state: &mut AppState) -> UpdateResult {
    with_session(state, DonationSession::delete_custom_amount_char)
}

pub fn handle_set_custom_amount(state: &mut AppState, text: &str) -> UpdateResult {
    with_session(state, |session| session.set_custom_amount(text))
}

pub fn handle_toggle_plant_tree(state: &mut AppState) -> UpdateResult {
    with_session(state, DonationSession::toggle_plant_tree)
}

// ─────────────────────────────────────────────────────────
// Email & Payment Method
// ─────────────────────────────────────────────────────────

pub fn handle_email_char(state: &mut AppState, c: char) -> UpdateResult {
    with_session(state, |session| session.email.push(c))
}

pub fn handle_email_backspace(state: &mut AppState) -> UpdateResult {
    with_session(state, |session| {
        session.email.pop();
    })
}

pub fn handle_set_email(state: &mut AppState, email: String) -> UpdateResult {
    with_session(state, |session| session.set_email(email))
}

pub fn handle_move_method_cursor(state: &mut AppState, delta: i8) -> UpdateResult {
    with_session(state, |session| {
        session.method_cursor =
            step_cursor(session.method_cursor, delta, PaymentMethod::ALL.len());
    })
}

/// Toggle a payment method; picking the card asks for focus on its number field
pub fn handle_toggle_payment_method(state: &mut AppState, method: PaymentMethod) -> UpdateResult {
    let delay = state.settings.timing.focus_delay();
    let Some(session) = state.active_session_mut() else {
        return UpdateResult::none();
    };
    if session.step != grove_core::Step::PaymentDetails {
        return UpdateResult::none();
    }

    if let Some(index) = PaymentMethod::ALL.iter().position(|m| *m == method) {
        session.method_cursor = index;
    }
    let card_selected = session.toggle_payment_method(method);
    debug!("Payment method now {:?}", session.payment_method);

    let result = if card_selected {
        UpdateResult::action(UpdateAction::ScheduleFocus {
            session_id: session.id,
            field: WizardField::Card(CardField::Number),
            delay,
        })
    } else {
        UpdateResult::none()
    };
    recheck_card_readiness(result)
}

// ─────────────────────────────────────────────────────────
// Card Sub-form
// ─────────────────────────────────────────────────────────

/// Apply `edit` to a mounted card field and schedule any focus transfer it implies
fn apply_card_edit(
    state: &mut AppState,
    field: CardField,
    edit: impl FnOnce(&mut DonationSession, YearMonth) -> Option<CardField>,
) -> UpdateResult {
    let now = state.now();
    let delay = state.settings.timing.focus_delay();
    let Some(session) = state.active_session_mut() else {
        return UpdateResult::none();
    };
    if !session.is_mounted(WizardField::Card(field)) {
        debug!("Ignoring edit to unmounted {:?}", field);
        return UpdateResult::none();
    }

    let result = match edit(session, now) {
        Some(next) => UpdateResult::action(UpdateAction::ScheduleFocus {
            session_id: session.id,
            field: WizardField::Card(next),
            delay,
        }),
        None => UpdateResult::none(),
    };
    recheck_card_readiness(result)
}

pub fn handle_card_input(state: &mut AppState, field: CardField, text: &str) -> UpdateResult {
    apply_card_edit(state, field, |session, now| {
        session.insert_card_text(field, text, now)
    })
}

pub fn handle_card_backspace(state: &mut AppState, field: CardField) -> UpdateResult {
    apply_card_edit(state, field, |session, now| session.delete_card_char(field, now))
}

pub fn handle_set_card_field(state: &mut AppState, field: CardField, value: &str) -> UpdateResult {
    apply_card_edit(state, field, |session, now| {
        session.replace_card_text(field, value, now)
    })
}

/// Schedule the auto-scroll when the card fields have just become ready
pub fn handle_card_fields_changed(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    let delay = state.settings.timing.scroll_delay();
    let Some(session) = state.active_session_mut() else {
        return UpdateResult::none();
    };

    let ready = session.card_fields_ready(now);
    let became_ready = ready && !session.card_ready_latched;
    session.card_ready_latched = ready;

    if became_ready {
        UpdateResult::action(UpdateAction::ScheduleScrollToSubmit {
            session_id: session.id,
            delay,
        })
    } else {
        UpdateResult::none()
    }
}

// ─────────────────────────────────────────────────────────
// Paste
// ─────────────────────────────────────────────────────────

/// Route pasted text to the focused input
pub fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    let Some(session) = state.active_session() else {
        return UpdateResult::none();
    };
    let text = text.trim_end_matches(['\r', '\n']).to_string();

    let follow_up = match session.focused {
        Some(WizardField::CustomAmount) => {
            let candidate = if session.amount_manually_edited {
                format!("{}{}", session.custom_amount_text, text)
            } else {
                text
            };
            Message::SetCustomAmount(candidate)
        }
        Some(WizardField::Email) => Message::SetEmail(format!("{}{}", session.email, text)),
        Some(WizardField::Card(field)) => Message::CardInput { field, text },
        _ => {
            trace!("Paste ignored: no text input focused");
            return UpdateResult::none();
        }
    };
    UpdateResult::message(follow_up)
}
