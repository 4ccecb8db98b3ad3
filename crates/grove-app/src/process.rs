//! Message processing
//!
//! Runs the TEA update loop: each message may yield a follow-up message and
//! an action, which is dispatched to the task layer before the follow-up runs.

use std::sync::Arc;

use tokio::sync::mpsc;

use grove_gateway::PaymentGateway;

use crate::actions::{handle_action, ScheduledTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut ScheduledTasks,
    gateway: &Arc<G>,
) where
    G: PaymentGateway + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, tasks, gateway);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
