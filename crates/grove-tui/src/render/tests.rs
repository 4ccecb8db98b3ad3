//! Full-screen rendering tests

use chrono::Local;
use grove_app::handler::update;
use grove_app::message::Message;
use grove_app::state::{AppState, UiMode};
use grove_core::{Cadence, PaymentMethod, Receipt};

use super::view;
use crate::test_utils::{test_state, TestTerminal};

fn render_screen(term: &mut TestTerminal, state: &mut AppState) -> String {
    term.draw_with(|frame| view(frame, state));
    term.content()
}

fn send(state: &mut AppState, messages: impl IntoIterator<Item = Message>) {
    for msg in messages {
        let mut next = Some(msg);
        while let Some(m) = next {
            next = update(state, m).message;
        }
    }
}

/// Wizard on the payment step with the card form open
fn card_form_state() -> AppState {
    let mut state = test_state();
    send(
        &mut state,
        [
            Message::OpenWizard,
            Message::Continue,
            Message::Continue,
            Message::TogglePaymentMethod(PaymentMethod::Card),
        ],
    );
    state
}

#[test]
fn test_page_renders_campaign() {
    let mut term = TestTerminal::new();
    let mut state = test_state();

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("PLANT MAGIC FOREST"));
    assert!(content.contains("$12,348 of $30,000"));
    assert!(content.contains("d Donate"));
}

#[test]
fn test_wizard_renders_over_page() {
    let mut term = TestTerminal::new();
    let mut state = test_state();
    send(&mut state, [Message::OpenWizard]);

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("Choose Donation Type"));
    assert!(content.contains("One-time"));
    assert!(content.contains("Esc Close"));
}

#[test]
fn test_submit_hidden_on_short_terminal_without_request() {
    let mut term = TestTerminal::with_size(80, 16);
    let mut state = card_form_state();

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("Payment methods"));
    assert!(!content.contains("Complete Donation"));
    assert_eq!(state.wizard_scroll, 0);
}

#[test]
fn test_scroll_request_reveals_submit_once() {
    let mut term = TestTerminal::with_size(80, 16);
    let mut state = card_form_state();
    if let Some(session) = state.active_session_mut() {
        session.scroll_to_submit = true;
    }

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("Complete Donation"));
    let scrolled = state.wizard_scroll;
    assert!(scrolled > 0);
    assert!(!state.active_session().unwrap().scroll_to_submit);

    // The user scrolls back up; nothing pulls the view down again
    send(&mut state, [Message::ScrollWizard(-20)]);
    let content = render_screen(&mut term, &mut state);
    assert_eq!(state.wizard_scroll, 0);
    assert!(!content.contains("Complete Donation"));
}

#[test]
fn test_scroll_clamped_to_body() {
    let mut term = TestTerminal::new();
    let mut state = test_state();
    send(&mut state, [Message::OpenWizard]);
    state.wizard_scroll = 100;

    render_screen(&mut term, &mut state);

    assert_eq!(state.wizard_scroll, 0);
}

#[test]
fn test_success_screen() {
    let mut term = TestTerminal::new();
    let mut state = test_state();
    send(
        &mut state,
        [Message::OpenWizard, Message::Continue, Message::Continue],
    );
    let session_id = state.active_session().unwrap().id;
    send(
        &mut state,
        [
            Message::Submit,
            Message::SubmissionCompleted {
                session_id,
                result: Ok(Receipt {
                    reference: "GRV-1234ABCD".to_string(),
                    amount: 10,
                    cadence: Cadence::OneTime,
                    accepted_at: Local::now(),
                }),
            },
        ],
    );

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("Thank You for Your Donation"));
    assert!(content.contains("Your donation of $10 has been received"));
    assert!(content.contains("GRV-1234ABCD"));
    assert!(!content.contains("1 Type"));
}

#[test]
fn test_quit_prompt() {
    let mut term = TestTerminal::new();
    let mut state = test_state();
    state.ui_mode = UiMode::ConfirmQuit;

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("Quit?"));
    assert!(content.contains("Quit anyway"));
}
