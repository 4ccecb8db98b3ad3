//! Wizard lifecycle handlers: open/close, the step sequence and submission

use grove_core::prelude::*;
use grove_core::Receipt;

use crate::message::Message;
use crate::state::AppState;
use crate::wizard::{SessionId, WizardField};

use super::{UpdateAction, UpdateResult};

/// Handle the donate button: show the wizard with a fresh session
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.wizard_open {
        return UpdateResult::none();
    }
    state.open_wizard();
    UpdateResult::action(UpdateAction::CancelPendingReset)
}

/// Handle dismissal from any step
pub fn handle_close(state: &mut AppState) -> UpdateResult {
    match state.close_wizard() {
        Some(session_id) => UpdateResult::action(UpdateAction::ScheduleReset {
            session_id,
            delay: state.settings.timing.reset_delay(),
        }),
        None => UpdateResult::none(),
    }
}

/// Handle the forward transition of the current step
pub fn handle_continue(state: &mut AppState) -> UpdateResult {
    let Some(session) = state.active_session_mut() else {
        return UpdateResult::none();
    };

    if session.advance() {
        state.wizard_scroll = 0;
        // Landing on the payment step with a filled card still counts as becoming ready
        recheck_card_readiness(UpdateResult::none())
    } else {
        debug!("Continue refused on {:?}", session.step);
        UpdateResult::none()
    }
}

/// Handle the back transition of the current step
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    let Some(session) = state.active_session_mut() else {
        return UpdateResult::none();
    };

    if session.retreat() {
        state.wizard_scroll = 0;
    } else {
        debug!("Back refused on {:?}", session.step);
    }
    UpdateResult::none()
}

/// Handle Tab / Shift+Tab
pub fn handle_focus_move(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(session) = state.active_session_mut() {
        if forward {
            session.focus_next();
        } else {
            session.focus_prev();
        }
    }
    UpdateResult::none()
}

/// Handle the final confirmation on the payment step
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    let block_expired = state.settings.behavior.block_expired_submission;
    let Some(session) = state.active_session_mut() else {
        return UpdateResult::none();
    };

    match session.begin_submission(now, block_expired) {
        Ok(record) => {
            info!(
                "Submitting ${} {:?} donation (session {})",
                record.amount, record.cadence, session.id
            );
            UpdateResult::action(UpdateAction::SubmitDonation {
                session_id: session.id,
                record,
            })
        }
        Err(blocker) => {
            debug!("Submit blocked: {:?}", blocker);
            UpdateResult::none()
        }
    }
}

/// Handle the settle delay after close
pub fn handle_reset_elapsed(state: &mut AppState, session_id: SessionId) -> UpdateResult {
    state.reset_session(session_id);
    UpdateResult::none()
}

/// Handle the settle delay of a focus transfer: hand the target to the view
pub fn handle_focus_elapsed(
    state: &mut AppState,
    session_id: SessionId,
    field: WizardField,
) -> UpdateResult {
    if let Some(session) = state.session_with_id_mut(session_id) {
        session.focus_target = Some(field);
    } else {
        trace!("Focus transfer for inactive session {} dropped", session_id);
    }
    UpdateResult::none()
}

/// Handle the scroll delay: ask the view for the submit control if still relevant
pub fn handle_scroll_elapsed(state: &mut AppState, session_id: SessionId) -> UpdateResult {
    let now = state.now();
    if let Some(session) = state.session_with_id_mut(session_id) {
        if session.card_fields_ready(now) {
            session.scroll_to_submit = true;
        }
    }
    UpdateResult::none()
}

/// Handle the gateway's answer
pub fn handle_submission_completed(
    state: &mut AppState,
    session_id: SessionId,
    result: std::result::Result<Receipt, String>,
) -> UpdateResult {
    let Some(session) = state
        .session_with_id_mut(session_id)
        .filter(|s| s.is_submitting())
    else {
        // The wizard was closed mid-flight: credit the donation, leave any new session alone
        match result {
            Ok(receipt) => {
                info!(
                    "Donation {} received (${}) after session {} closed",
                    receipt.reference, receipt.amount, session_id
                );
                state.campaign.record_accepted_amount(receipt.amount);
            }
            Err(message) => {
                warn!("Submission for closed session {} failed: {}", session_id, message);
            }
        }
        return UpdateResult::none();
    };

    match result {
        Ok(receipt) => {
            let amount = receipt.amount;
            info!("Donation {} received (${})", receipt.reference, amount);
            session.complete_submission(receipt);
            state.campaign.record_accepted_amount(amount);
            state.wizard_scroll = 0;
        }
        Err(message) => {
            warn!("Donation submission failed: {}", message);
            session.fail_submission();
            state.last_error = Some(message);
        }
    }
    UpdateResult::none()
}

/// Follow-up used by handlers that may have changed card readiness
pub(crate) fn recheck_card_readiness(result: UpdateResult) -> UpdateResult {
    result.then(Message::CardFieldsChanged)
}
