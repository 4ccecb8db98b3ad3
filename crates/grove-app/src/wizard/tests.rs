//! Tests for the donation session transitions

use grove_core::{Cadence, CardField, PaymentMethod, Receipt, Step, SubmissionState, YearMonth};

use super::*;

fn jan_2025() -> YearMonth {
    YearMonth::new(2025, 1)
}

fn on_payment_step() -> DonationSession {
    let mut session = DonationSession::new(next_session_id());
    assert!(session.advance());
    assert!(session.advance());
    assert_eq!(session.step, Step::PaymentDetails);
    session
}

fn type_card(session: &mut DonationSession, field: CardField, text: &str) -> Option<CardField> {
    let mut last = None;
    for c in text.chars() {
        last = session.insert_card_text(field, &c.to_string(), jan_2025());
    }
    last
}

fn receipt(amount: u64) -> Receipt {
    Receipt {
        reference: "GRV-00000001".to_string(),
        amount,
        cadence: Cadence::OneTime,
        accepted_at: chrono::Local::now(),
    }
}

#[test]
fn test_new_session_defaults() {
    let session = DonationSession::new(7);
    assert_eq!(session.id, 7);
    assert_eq!(session.step, Step::TypeSelection);
    assert_eq!(session.cadence, Cadence::OneTime);
    assert!(session.plant_tree_opt_in);
    assert_eq!(session.submission_state, SubmissionState::Idle);
    assert_eq!(session.focused, Some(WizardField::Cadence));
    assert!(session.custom_amount_text.is_empty());
}

#[test]
fn test_session_ids_are_monotonic() {
    let first = next_session_id();
    let second = next_session_id();
    assert!(second > first);
}

#[test]
fn test_entering_amount_step_seeds_minimum() {
    let mut session = DonationSession::new(1);
    session.advance();

    assert_eq!(session.step, Step::AmountSelection);
    assert_eq!(session.custom_amount_text, "10");
    assert_eq!(session.selected_preset_amount, Some(10));
    assert!(!session.amount_manually_edited);
}

#[test]
fn test_reentry_does_not_reseed_edited_amount() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.set_custom_amount("50");
    session.retreat();
    session.advance();

    assert_eq!(session.custom_amount_text, "50");
    assert_eq!(session.amount(), Some(50));
}

#[test]
fn test_reentry_with_emptied_amount_reseeds() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.set_custom_amount("");
    session.retreat();
    session.advance();

    assert_eq!(session.custom_amount_text, "10");
}

#[test]
fn test_preset_then_typing_replaces_amount() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.select_preset(25);
    session.type_custom_amount('7');

    assert_eq!(session.custom_amount_text, "7");
    assert!(session.amount_manually_edited);
    assert_eq!(session.selected_preset_amount, Some(25));
    assert_eq!(session.amount(), Some(7));
}

#[test]
fn test_typing_after_manual_edit_appends() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.type_custom_amount('7');
    session.type_custom_amount('5');
    assert_eq!(session.custom_amount_text, "75");
}

#[test]
fn test_preset_clears_manual_flag() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.type_custom_amount('3');
    session.select_preset(100);

    assert_eq!(session.custom_amount_text, "100");
    assert!(!session.amount_manually_edited);
}

#[test]
fn test_non_digit_amount_is_dropped() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.set_custom_amount("12");
    session.type_custom_amount('x');
    assert_eq!(session.custom_amount_text, "12");
}

#[test]
fn test_empty_amount_blocks_continue() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.set_custom_amount("");

    assert!(!session.can_advance());
    assert!(!session.advance());
    assert_eq!(session.step, Step::AmountSelection);
}

#[test]
fn test_zero_amount_is_accepted() {
    let mut session = DonationSession::new(1);
    session.advance();
    session.set_custom_amount("0");
    assert!(session.advance());
    assert_eq!(session.amount(), Some(0));
}

#[test]
fn test_cadence_and_method_never_change_step() {
    let mut session = DonationSession::new(1);
    session.set_cadence(Cadence::Monthly);
    assert_eq!(session.step, Step::TypeSelection);

    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::ApplePay);
    assert_eq!(session.step, Step::PaymentDetails);
}

#[test]
fn test_no_step_skipping() {
    let mut session = DonationSession::new(1);
    assert!(!session.retreat());
    session.advance();
    session.advance();
    assert!(!session.advance());
    assert_eq!(session.step, Step::PaymentDetails);
}

#[test]
fn test_card_toggle_clears_method_and_hides_card_fields() {
    let mut session = on_payment_step();
    assert!(session.toggle_payment_method(PaymentMethod::Card));
    assert!(session.is_mounted(WizardField::Card(CardField::Number)));

    assert!(!session.toggle_payment_method(PaymentMethod::Card));
    assert_eq!(session.payment_method, None);
    assert!(!session.is_mounted(WizardField::Card(CardField::Number)));
}

#[test]
fn test_deselecting_card_moves_focus_off_card_fields() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);
    session.focused = Some(WizardField::Card(CardField::Cvc));

    session.toggle_payment_method(PaymentMethod::GooglePay);

    assert_eq!(session.focused, Some(WizardField::Method));
}

#[test]
fn test_typed_card_number_is_grouped() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);

    let target = type_card(&mut session, CardField::Number, "4111111111111111");

    assert_eq!(session.card.number_text, "4111 1111 1111 1111");
    assert_eq!(target, Some(CardField::Expiry));
}

#[test]
fn test_typed_fifteen_digit_card_moves_focus_to_expiry() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);

    let target = type_card(&mut session, CardField::Number, "378282246310005");

    assert_eq!(session.card.number_text, "3782 8224 6310 005");
    assert_eq!(target, Some(CardField::Expiry));
}

#[test]
fn test_typed_thirteenth_digit_moves_focus_to_expiry() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);

    assert_eq!(type_card(&mut session, CardField::Number, "422222222222"), None);
    assert_eq!(
        session.insert_card_text(CardField::Number, "2", jan_2025()),
        Some(CardField::Expiry)
    );
}

/// Digits in groups of four, one space between groups, nothing else
fn is_grouped(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let groups: Vec<&str> = text.split(' ').collect();
    let last = groups.len() - 1;
    groups.iter().enumerate().all(|(i, group)| {
        let len_ok = if i == last {
            (1..=4).contains(&group.len())
        } else {
            group.len() == 4
        };
        len_ok && group.chars().all(|c| c.is_ascii_digit())
    })
}

#[test]
fn test_card_number_stays_grouped_under_mixed_edits() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);
    let pastes = ["4111-1111", "12 34", "9", "0000 0000 0000 0000", "55x5"];

    let mut seed: u32 = 7;
    for step in 0..400 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let pick = (seed >> 16) as usize;
        match pick % 5 {
            0 | 1 => {
                let digit = char::from(b'0' + (pick % 10) as u8);
                session.insert_card_text(CardField::Number, &digit.to_string(), jan_2025());
            }
            2 => {
                session.insert_card_text(CardField::Number, "q", jan_2025());
            }
            3 => {
                session.delete_card_char(CardField::Number, jan_2025());
            }
            _ => {
                let paste = pastes[pick % pastes.len()];
                session.insert_card_text(CardField::Number, paste, jan_2025());
            }
        }

        let text = &session.card.number_text;
        assert!(is_grouped(text), "step {step}: {text:?} is not grouped");
    }
}

#[test]
fn test_non_preset_amount_is_rejected() {
    let mut session = DonationSession::new(next_session_id());
    assert!(session.advance());

    assert!(!session.select_preset(7));
    assert_eq!(session.selected_preset_amount, Some(10));
    assert_eq!(session.custom_amount_text, "10");

    assert!(session.select_preset(50));
    assert_eq!(session.selected_preset_amount, Some(50));
}

#[test]
fn test_typed_letters_never_reach_card_number() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);

    type_card(&mut session, CardField::Number, "a4b1-1 1x");

    assert_eq!(session.card.number_text, "4111");
}

#[test]
fn test_pasted_text_without_digits_is_kept() {
    let mut session = on_payment_step();
    session.insert_card_text(CardField::Number, "n/a", jan_2025());
    assert_eq!(session.card.number_text, "n/a");
}

#[test]
fn test_expiry_typing_moves_focus_to_cvc() {
    let mut session = on_payment_step();
    let target = type_card(&mut session, CardField::Expiry, "1230");

    assert_eq!(session.card.expiry_text, "12/30");
    assert_eq!(target, Some(CardField::Cvc));
    assert!(session.expiry_temporal_valid);
}

#[test]
fn test_expired_expiry_is_flagged() {
    let mut session = on_payment_step();
    type_card(&mut session, CardField::Expiry, "0120");

    assert!(!session.expiry_temporal_valid);

    // Editing back to an incomplete value holds the flag true again
    session.delete_card_char(CardField::Expiry, jan_2025());
    assert_eq!(session.card.expiry_text, "01/2");
    assert!(session.expiry_temporal_valid);
}

#[test]
fn test_deleting_to_empty_moves_focus_back() {
    let mut session = on_payment_step();
    type_card(&mut session, CardField::Cvc, "1");

    assert_eq!(
        session.delete_card_char(CardField::Cvc, jan_2025()),
        Some(CardField::Expiry)
    );
    assert_eq!(session.card.cvc_text, "");
}

#[test]
fn test_focus_cycles_through_mounted_fields() {
    let mut session = on_payment_step();
    assert_eq!(session.focused, Some(WizardField::Email));

    session.focus_next();
    assert_eq!(session.focused, Some(WizardField::Method));
    session.focus_next();
    assert_eq!(session.focused, Some(WizardField::Email));
    session.focus_prev();
    assert_eq!(session.focused, Some(WizardField::Method));
}

#[test]
fn test_focus_target_is_consumed_once() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);
    session.focus_target = Some(WizardField::Card(CardField::Number));

    assert_eq!(
        session.take_focus_target(),
        Some(WizardField::Card(CardField::Number))
    );
    assert_eq!(session.focus_target, None);
    assert_eq!(session.take_focus_target(), None);
}

#[test]
fn test_focus_target_for_unmounted_field_is_dropped() {
    let mut session = on_payment_step();
    session.focus_target = Some(WizardField::Card(CardField::Number));

    assert_eq!(session.take_focus_target(), None);
    assert_eq!(session.focused, Some(WizardField::Email));
}

#[test]
fn test_card_fields_ready_requires_everything() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);
    type_card(&mut session, CardField::Number, "4111");
    type_card(&mut session, CardField::Expiry, "1230");
    assert!(!session.card_fields_ready(jan_2025()));

    type_card(&mut session, CardField::Cvc, "123");
    assert!(session.card_fields_ready(jan_2025()));
}

#[test]
fn test_submit_without_method_is_allowed() {
    let mut session = on_payment_step();
    let record = session.begin_submission(jan_2025(), true).unwrap();

    assert_eq!(record.amount, 10);
    assert_eq!(record.payment_method, None);
    assert_eq!(record.email, None);
    assert_eq!(session.submission_state, SubmissionState::Submitting);
}

#[test]
fn test_submit_blocked_while_submitting() {
    let mut session = on_payment_step();
    session.begin_submission(jan_2025(), true).unwrap();

    assert_eq!(
        session.begin_submission(jan_2025(), true),
        Err(SubmitBlocker::AlreadySubmitting)
    );
    assert!(!session.retreat());
}

#[test]
fn test_incomplete_card_blocks_submit() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);
    type_card(&mut session, CardField::Number, "4111111111111111");

    assert_eq!(
        session.submit_blocker(jan_2025(), true),
        Some(SubmitBlocker::CardIncomplete)
    );
}

#[test]
fn test_expired_card_blocks_submit_when_configured() {
    let mut session = on_payment_step();
    session.toggle_payment_method(PaymentMethod::Card);
    type_card(&mut session, CardField::Number, "4111111111111111");
    type_card(&mut session, CardField::Expiry, "0120");
    type_card(&mut session, CardField::Cvc, "123");

    assert_eq!(
        session.submit_blocker(jan_2025(), true),
        Some(SubmitBlocker::CardExpired)
    );
    assert_eq!(session.submit_blocker(jan_2025(), false), None);
}

#[test]
fn test_expired_date_does_not_block_back_navigation() {
    let mut session = on_payment_step();
    type_card(&mut session, CardField::Expiry, "0120");
    assert!(session.retreat());
    assert_eq!(session.step, Step::AmountSelection);
}

#[test]
fn test_record_carries_trimmed_email() {
    let mut session = on_payment_step();
    session.set_email("  donor@example.com ");
    let record = session.begin_submission(jan_2025(), true).unwrap();
    assert_eq!(record.email.as_deref(), Some("donor@example.com"));
}

#[test]
fn test_completion_moves_to_success() {
    let mut session = on_payment_step();
    session.begin_submission(jan_2025(), true).unwrap();
    session.complete_submission(receipt(10));

    assert_eq!(session.submission_state, SubmissionState::Succeeded);
    assert_eq!(session.step, Step::Success);
    assert_eq!(session.focused, None);
    assert_eq!(
        session.submit_blocker(jan_2025(), true),
        Some(SubmitBlocker::AlreadySucceeded)
    );
}
