//! Headless mode runner - main event loop without TUI
//!
//! Drives the same Engine as the TUI. Commands come from stdin, engine events
//! go to stdout as JSON lines.

use std::io::BufRead;
use std::path::Path;

use tokio::sync::{broadcast, mpsc};

use grove_app::{Engine, EngineEvent, Message};
use grove_core::prelude::*;
use grove_gateway::PaymentGateway;

use super::script::{self, Command};
use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(config_path: Option<&Path>) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Grove starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(config_path);

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        read_script(stdin.lock(), stdin_tx);
    });

    let result = headless_event_loop(&mut engine).await;

    engine.shutdown().await;

    info!("Grove headless mode exiting");
    result
}

/// Main headless event loop
pub async fn headless_event_loop<G>(engine: &mut Engine<G>) -> Result<()>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    let mut events = engine.subscribe();

    while !engine.should_quit() {
        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }
        emit_pending(&mut events);
    }

    Ok(())
}

/// Write every event broadcast since the last call
fn emit_pending(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine(&event) {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Feed script commands to the engine until `quit` or end of input (blocking)
///
/// Bad lines are reported as `error` events and skipped. End of input quits.
pub fn read_script(reader: impl BufRead, msg_tx: mpsc::Sender<Message>) {
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match script::parse_line(index + 1, &line) {
            Ok(Some(Command::Send(message))) => {
                let quit = matches!(message, Message::Quit);
                debug!("Script: {:?}", message);
                if msg_tx.blocking_send(message).is_err() || quit {
                    info!("Stdin reader exiting");
                    return;
                }
            }
            Ok(Some(Command::Wait(duration))) => std::thread::sleep(duration),
            Ok(None) => {}
            Err(e) => {
                warn!("{}", e);
                HeadlessEvent::error(e.to_string(), false).emit();
            }
        }
    }

    if msg_tx.blocking_send(Message::Quit).is_err() {
        debug!("Engine stopped before end of script");
    }
    info!("Stdin reader exiting");
}
