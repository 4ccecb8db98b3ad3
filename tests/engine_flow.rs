//! End-to-end wizard flows through the Engine, with tokio's paused clock

use std::time::Duration;

use grove_app::config::Settings;
use grove_app::{Engine, EngineEvent, Message};
use grove_core::{Cadence, CardField, PaymentMethod, Step, SubmissionState, YearMonth};
use grove_gateway::PaymentGateway;

fn card(field: CardField, value: &str) -> Message {
    Message::SetCardField {
        field,
        value: value.to_string(),
    }
}

fn card_flow() -> Vec<Message> {
    vec![
        Message::OpenWizard,
        Message::SetCadence(Cadence::Monthly),
        Message::Continue,
        Message::SelectPreset(50),
        Message::Continue,
        Message::TogglePaymentMethod(PaymentMethod::Card),
        card(CardField::Number, "4111111111111111"),
        card(CardField::Expiry, "1230"),
        card(CardField::Cvc, "123"),
    ]
}

fn submission_state<G>(engine: &Engine<G>) -> Option<SubmissionState>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    engine.state.active_session().map(|s| s.submission_state)
}

#[tokio::test(start_paused = true)]
async fn test_monthly_card_donation_end_to_end() {
    let mut engine = Engine::with_settings(Settings::default());
    engine.state.now_override = Some(YearMonth::new(2025, 1));
    let mut events = engine.subscribe();

    for message in card_flow() {
        engine.process_message(message);
    }
    {
        let session = engine.state.active_session().unwrap();
        assert_eq!(session.card.number_text, "4111 1111 1111 1111");
        assert_eq!(session.card.expiry_text, "12/30");
        assert_eq!(session.card.cvc_text, "123");
    }

    engine.process_message(Message::Submit);
    assert_eq!(submission_state(&engine), Some(SubmissionState::Submitting));

    tokio::time::timeout(Duration::from_secs(10), async {
        while submission_state(&engine) != Some(SubmissionState::Succeeded) {
            assert!(engine.process_next().await);
        }
    })
    .await
    .expect("donation never settled");

    let session = engine.state.active_session().unwrap();
    assert_eq!(session.step, Step::Success);
    assert_eq!(session.receipt.as_ref().map(|r| r.amount), Some(50));
    assert_eq!(engine.state.campaign.raised, 12_348 + 50);

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert!(seen.contains(&EngineEvent::TotalChanged {
        raised: 12_398,
        goal: 30_000
    }));
    assert!(seen
        .iter()
        .any(|e| matches!(e, EngineEvent::SubmissionStarted { amount: 50, .. })));
    assert!(seen.iter().any(|e| matches!(
        e,
        EngineEvent::DonationSucceeded { receipt, .. } if receipt.cadence == Cadence::Monthly
    )));
}

#[tokio::test(start_paused = true)]
async fn test_close_mid_submission_credits_donation_and_reopens_fresh() {
    let mut engine = Engine::with_settings(Settings::default());
    engine.state.now_override = Some(YearMonth::new(2025, 1));

    for message in card_flow() {
        engine.process_message(message);
    }
    engine.process_message(Message::Submit);
    engine.process_message(Message::CloseWizard);
    engine.process_message(Message::OpenWizard);

    // Let every timer and the gateway settle
    tokio::time::sleep(Duration::from_secs(2)).await;
    engine.drain_pending_messages();

    let session = engine.state.active_session().unwrap();
    assert_eq!(session.step, Step::TypeSelection);
    assert_eq!(session.submission_state, SubmissionState::Idle);
    assert!(session.receipt.is_none());
    assert_eq!(engine.state.campaign.raised, 12_348 + 50);
}

#[tokio::test(start_paused = true)]
async fn test_focus_lands_on_card_number_after_settle_delay() {
    let mut engine = Engine::with_settings(Settings::default());
    for message in card_flow().into_iter().take(6) {
        engine.process_message(message);
    }
    assert_ne!(
        engine.state.active_session().unwrap().focused,
        Some(grove_app::WizardField::Card(CardField::Number))
    );

    tokio::time::sleep(Duration::from_millis(200)).await;
    engine.drain_pending_messages();

    assert_eq!(
        engine.state.active_session().unwrap().focused,
        Some(grove_app::WizardField::Card(CardField::Number))
    );
}

#[tokio::test]
async fn test_engine_reads_campaign_from_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[campaign]\nraised = 100\ngoal = 1000\n").unwrap();

    let engine = Engine::new(Some(&path));

    assert_eq!(engine.state.campaign.raised, 100);
    assert_eq!(engine.state.campaign.goal, 1000);
}
