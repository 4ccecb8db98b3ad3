//! Semantic style builders for the forest theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Keybinding hint style
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on green" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// A selected choice that does not hold focus
pub fn selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::ACCENT_DIM)
}

/// Style for a button or choice given its selection and focus state
pub fn choice(selected: bool, focused: bool) -> Style {
    match (selected, focused) {
        (true, true) => focused_selected(),
        (true, false) => self::selected(),
        (false, true) => border_active().add_modifier(Modifier::BOLD),
        (false, false) => text_secondary(),
    }
}

/// Text input background, brighter border colour while focused
pub fn input(focused: bool) -> Style {
    let style = Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::INPUT_BG);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_styles_distinguish_states() {
        assert_eq!(choice(true, true), focused_selected());
        assert_eq!(choice(true, false), selected());
        assert_ne!(choice(false, true), choice(false, false));
    }

    #[test]
    fn test_focused_input_is_bold() {
        assert!(input(true).add_modifier.contains(Modifier::BOLD));
        assert!(!input(false).add_modifier.contains(Modifier::BOLD));
    }
}
