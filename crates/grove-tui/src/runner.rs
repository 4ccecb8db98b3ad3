//! Main TUI runner - entry point and event loop

use std::path::Path;

use grove_app::Engine;
use grove_core::prelude::*;
use grove_gateway::PaymentGateway;

use crate::{event, render, terminal};

/// Run the TUI with settings loaded from `config_path` (or the default location)
pub async fn run_with_config(config_path: Option<&Path>) -> Result<()> {
    let engine = Engine::new(config_path);
    info!(
        "Loaded settings: raised={}, goal={}",
        engine.settings.campaign.raised, engine.settings.campaign.goal
    );
    run(engine).await
}

/// Run the TUI around an already built engine
pub async fn run<G>(mut engine: Engine<G>) -> Result<()>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    terminal::restore();

    result
}

/// Main event loop
fn run_loop<G>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: PaymentGateway + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Timers, submission results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
