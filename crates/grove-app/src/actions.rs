//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every deferred operation of the wizard is a tokio task whose handle lives
//! in [`ScheduledTasks`]. A new task of the same kind aborts the one it
//! supersedes. Closing the wizard aborts its timers but lets an in-flight
//! submission finish, so the donation is still credited; shutdown aborts the lot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use grove_core::prelude::*;
use grove_core::DonationRecord;
use grove_gateway::PaymentGateway;

use crate::message::Message;
use crate::wizard::SessionId;
use crate::UpdateAction;

/// Handles of the wizard's pending timers and in-flight submission
#[derive(Debug, Default)]
pub struct ScheduledTasks {
    reset: Option<JoinHandle<()>>,
    focus: Option<JoinHandle<()>>,
    scroll: Option<JoinHandle<()>>,
    submission: Option<JoinHandle<()>>,
}

impl ScheduledTasks {
    pub fn new() -> Self {
        Self::default()
    }

    fn replace(slot: &mut Option<JoinHandle<()>>, handle: JoinHandle<()>) {
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    fn cancel(slot: &mut Option<JoinHandle<()>>) {
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }

    /// Abort the timers that belong to an open session
    pub fn cancel_session_timers(&mut self) {
        Self::cancel(&mut self.focus);
        Self::cancel(&mut self.scroll);
    }

    pub fn cancel_reset(&mut self) {
        Self::cancel(&mut self.reset);
    }

    /// Abort everything (teardown)
    pub fn abort_all(&mut self) {
        self.cancel_reset();
        self.cancel_session_timers();
        Self::cancel(&mut self.submission);
    }

    /// Number of tasks that have not yet finished
    pub fn pending(&self) -> usize {
        [&self.reset, &self.focus, &self.scroll, &self.submission]
            .into_iter()
            .flatten()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn has_pending_submission(&self) -> bool {
        self.submission
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for ScheduledTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<G>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut ScheduledTasks,
    gateway: &Arc<G>,
) where
    G: PaymentGateway + Send + Sync + 'static,
{
    match action {
        UpdateAction::CancelPendingReset => {
            tasks.cancel_reset();
        }

        UpdateAction::ScheduleReset { session_id, delay } => {
            tasks.cancel_session_timers();
            let handle = spawn_timer(delay, msg_tx.clone(), Message::ResetElapsed { session_id });
            ScheduledTasks::replace(&mut tasks.reset, handle);
        }

        UpdateAction::ScheduleFocus {
            session_id,
            field,
            delay,
        } => {
            let handle = spawn_timer(
                delay,
                msg_tx.clone(),
                Message::FocusElapsed { session_id, field },
            );
            ScheduledTasks::replace(&mut tasks.focus, handle);
        }

        UpdateAction::ScheduleScrollToSubmit { session_id, delay } => {
            let handle = spawn_timer(delay, msg_tx.clone(), Message::ScrollElapsed { session_id });
            ScheduledTasks::replace(&mut tasks.scroll, handle);
        }

        UpdateAction::SubmitDonation { session_id, record } => {
            let handle = spawn_submission(gateway.clone(), session_id, record, msg_tx.clone());
            // An earlier session's submission keeps running detached
            tasks.submission = Some(handle);
        }
    }
}

/// Deliver `message` once `delay` has elapsed
fn spawn_timer(delay: Duration, msg_tx: mpsc::Sender<Message>, message: Message) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if msg_tx.send(message).await.is_err() {
            debug!("Message channel closed before timer fired");
        }
    })
}

/// Run the gateway call and report its outcome
fn spawn_submission<G>(
    gateway: Arc<G>,
    session_id: SessionId,
    record: DonationRecord,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = gateway
            .submit(record)
            .await
            .map_err(|e| e.to_string());

        if let Err(e) = &result {
            error!("Submission for session {} failed: {}", session_id, e);
        }

        if msg_tx
            .send(Message::SubmissionCompleted { session_id, result })
            .await
            .is_err()
        {
            warn!("Message channel closed before submission {} completed", session_id);
        }
    })
}
