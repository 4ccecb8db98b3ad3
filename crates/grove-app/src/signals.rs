//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;

use crate::message::Message;
use grove_core::prelude::*;

/// Spawn a task that turns SIGINT/SIGTERM (Ctrl+C on Windows) into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(()) => {
                info!("Shutdown signal received");
                forward_quit(&tx).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

/// Deliver `Message::Quit`; returns whether the event loop was still listening
async fn forward_quit(tx: &mpsc::Sender<Message>) -> bool {
    if tx.send(Message::Quit).await.is_err() {
        warn!("Message channel closed before the shutdown signal was delivered");
        return false;
    }
    true
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

    tokio::select! {
        _ = sigint.recv() => debug!("Received SIGINT"),
        _ = sigterm.recv() => debug!("Received SIGTERM"),
    }
    Ok(())
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    debug!("Received Ctrl+C");
    Ok(())
}
