//! Status bar widget
//!
//! One line at the bottom: the keys that work right now, or the last error.

use grove_app::{AppState, UiMode};
use grove_core::Step;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Status bar widget showing key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::Page => &[("d", "Donate"), ("q", "Quit")],
            UiMode::ConfirmQuit => &[("y", "Quit"), ("n", "Stay")],
            UiMode::Wizard => match self.state.active_session().map(|s| s.step) {
                Some(Step::TypeSelection) => {
                    &[("←/→", "Choose"), ("Enter", "Continue"), ("Esc", "Close")]
                }
                Some(Step::AmountSelection) => &[
                    ("Tab", "Next field"),
                    ("Space", "Select"),
                    ("Enter", "Continue"),
                    ("Ctrl+B", "Back"),
                    ("Esc", "Close"),
                ],
                Some(Step::PaymentDetails) => &[
                    ("Tab", "Next field"),
                    ("Space", "Select"),
                    ("Enter", "Donate"),
                    ("Ctrl+B", "Back"),
                    ("Esc", "Close"),
                ],
                Some(Step::Success) | None => &[("Enter", "Close")],
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match &self.state.last_error {
            Some(error) => Line::from(vec![
                Span::styled(" ✗ ", styles::status_red()),
                Span::styled(error.clone(), styles::status_red()),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, label) in self.hints() {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
                }
                Line::from(spans)
            }
        };

        Paragraph::new(line)
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(state), Rect::new(0, 0, 80, 1));
        term
    }

    #[test]
    fn test_page_hints() {
        let state = test_state();
        let term = render(&state);
        assert!(term.buffer_contains("d Donate"));
    }

    #[test]
    fn test_payment_step_hints() {
        let mut state = test_state();
        state.open_wizard();
        if let Some(session) = state.active_session_mut() {
            session.advance();
            session.advance();
        }

        let term = render(&state);
        assert!(term.buffer_contains("Enter Donate"));
        assert!(term.buffer_contains("Ctrl+B Back"));
    }

    #[test]
    fn test_error_replaces_hints() {
        let mut state = test_state();
        state.last_error = Some("gateway unavailable".to_string());

        let term = render(&state);
        assert!(term.buffer_contains("gateway unavailable"));
        assert!(!term.buffer_contains("Donate"));
    }
}
