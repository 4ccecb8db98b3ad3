//! Abstract input key event, independent of terminal library.
//!
//! The wizard reacts to keys without knowing about crossterm, so the same
//! `update()` serves the terminal UI, headless scripts and tests.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+b, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    /// Scroll the wizard body up
    PageUp,
    /// Scroll the wizard body down
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Digit value for keys `'0'..='9'`
    pub fn digit(&self) -> Option<u32> {
        match self {
            InputKey::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}
