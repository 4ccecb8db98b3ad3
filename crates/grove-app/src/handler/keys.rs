//! Key event handlers for different UI modes

use grove_core::{Cadence, CardField, PaymentMethod, Step, PRESET_AMOUNTS};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::wizard::{DonationSession, WizardField};

/// Lines scrolled by PageUp / PageDown
const PAGE_SCROLL_LINES: i16 = 5;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Page => handle_key_page(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
        UiMode::Wizard => match state.active_session() {
            Some(session) => handle_key_wizard(session, key),
            None => handle_key_page(key),
        },
    }
}

/// Handle key events on the campaign page
fn handle_key_page(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('d' | 'D') | InputKey::Enter => Some(Message::OpenWizard),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the quit confirmation prompt
fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events inside the wizard modal
fn handle_key_wizard(session: &DonationSession, key: InputKey) -> Option<Message> {
    // Keys that mean the same thing on every step
    match key {
        InputKey::Esc => return Some(Message::CloseWizard),
        InputKey::CharCtrl('c') => return Some(Message::RequestQuit),
        InputKey::CharCtrl('b') => return Some(Message::Back),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::PageUp => return Some(Message::ScrollWizard(-PAGE_SCROLL_LINES)),
        InputKey::PageDown => return Some(Message::ScrollWizard(PAGE_SCROLL_LINES)),
        InputKey::Enter => {
            return Some(match session.step {
                Step::PaymentDetails => Message::Submit,
                Step::Success => Message::CloseWizard,
                Step::TypeSelection | Step::AmountSelection => Message::Continue,
            })
        }
        _ => {}
    }

    match session.focused? {
        WizardField::Cadence => handle_key_cadence(key),
        WizardField::Presets => handle_key_presets(session, key),
        WizardField::CustomAmount => match key {
            InputKey::Char(c) => Some(Message::CustomAmountChar(c)),
            InputKey::Backspace => Some(Message::CustomAmountBackspace),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            _ => None,
        },
        WizardField::PlantTree => match key {
            InputKey::Char(' ') => Some(Message::TogglePlantTree),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            _ => None,
        },
        WizardField::Email => match key {
            InputKey::Char(c) => Some(Message::EmailChar(c)),
            InputKey::Backspace => Some(Message::EmailBackspace),
            InputKey::Up => Some(Message::FocusPrev),
            InputKey::Down => Some(Message::FocusNext),
            _ => None,
        },
        WizardField::Method => handle_key_method(session, key),
        WizardField::Card(field) => handle_key_card(field, key),
    }
}

fn handle_key_cadence(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('1') => Some(Message::SetCadence(Cadence::OneTime)),
        InputKey::Right | InputKey::Char('2') => Some(Message::SetCadence(Cadence::Monthly)),
        _ => None,
    }
}

fn handle_key_presets(session: &DonationSession, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::MovePresetCursor(-1)),
        InputKey::Right => Some(Message::MovePresetCursor(1)),
        InputKey::Char(' ') => PRESET_AMOUNTS
            .get(session.preset_cursor)
            .map(|amount| Message::SelectPreset(*amount)),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            PRESET_AMOUNTS
                .get(index)
                .map(|amount| Message::SelectPreset(*amount))
        }
        InputKey::Up => Some(Message::FocusPrev),
        InputKey::Down => Some(Message::FocusNext),
        _ => None,
    }
}

fn handle_key_method(session: &DonationSession, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::MoveMethodCursor(-1)),
        InputKey::Right => Some(Message::MoveMethodCursor(1)),
        InputKey::Char(' ') => PaymentMethod::ALL
            .get(session.method_cursor)
            .map(|method| Message::TogglePaymentMethod(*method)),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            PaymentMethod::ALL
                .get(index)
                .map(|method| Message::TogglePaymentMethod(*method))
        }
        InputKey::Up => Some(Message::FocusPrev),
        InputKey::Down => Some(Message::FocusNext),
        _ => None,
    }
}

fn handle_key_card(field: CardField, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::CardInput {
            field,
            text: c.to_string(),
        }),
        InputKey::Backspace => Some(Message::CardBackspace(field)),
        InputKey::Up => Some(Message::FocusPrev),
        InputKey::Down => Some(Message::FocusNext),
        _ => None,
    }
}
