//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use grove_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with bracketed paste, so a pasted card number arrives whole
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init()
        .map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }
    Ok(terminal)
}

/// Leave the alternate screen
pub fn restore() {
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();
}
