//! Grove Library
//!
//! A terminal donation wizard for the Magic Forest campaign. The binary picks
//! between the interactive TUI and the scripted headless mode.

pub mod headless;

use std::path::Path;

use grove_core::prelude::*;

pub use headless::run_headless;

/// Run the interactive TUI
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    init_runtime()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Grove starting");
    info!("═══════════════════════════════════════════════════════");

    let result = grove_tui::run_with_config(config_path).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Grove exiting");
    result
}

/// Run the headless scripted mode
pub async fn run_scripted(config_path: Option<&Path>) -> Result<()> {
    init_runtime()?;

    let result = run_headless(config_path).await;

    if let Err(ref e) = result {
        error!("Headless error: {:?}", e);
        headless::HeadlessEvent::error(e.to_string(), true).emit();
    }
    result
}

/// Install error reporting and file logging
fn init_runtime() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    grove_core::logging::init()
}
