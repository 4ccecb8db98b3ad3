//! Header bar widget
//!
//! Shows the app title, the campaign name and the keys that work on the page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing app title and page shortcuts
pub struct MainHeader<'a> {
    campaign_name: &'a str,
    wizard_open: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(campaign_name: &'a str) -> Self {
        Self {
            campaign_name,
            wizard_open: false,
        }
    }

    /// Dim the status dot while the wizard has the keyboard
    pub fn wizard_open(mut self, open: bool) -> Self {
        self.wizard_open = open;
        self
    }

    fn shortcut(key: &'static str, label: &'static str) -> [Span<'static>; 3] {
        [
            Span::styled("[", styles::text_muted()),
            Span::styled(key, styles::keybinding()),
            Span::styled(label, styles::text_muted()),
        ]
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let dot_style = if self.wizard_open {
            styles::text_muted()
        } else {
            styles::accent()
        };
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", dot_style),
            Span::raw(" "),
            Span::styled("Grove", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.campaign_name.to_string(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let mut spans = Vec::new();
        spans.extend(Self::shortcut("d", "] Donate  "));
        spans.extend(Self::shortcut("q", "] Quit "));
        let shortcuts = Line::from(spans);
        let shortcuts_width = shortcuts.width() as u16;

        // Right-align the shortcuts when they fit beside the title
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_shortcuts() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);

        term.render_widget(MainHeader::new("Magic Forest"), area);

        assert!(term.buffer_contains("Grove"));
        assert!(term.buffer_contains("Magic Forest"));
        assert!(term.buffer_contains("[d] Donate"));
        assert!(term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_header_drops_shortcuts_when_narrow() {
        let mut term = TestTerminal::with_size(30, 3);
        let area = Rect::new(0, 0, 30, 3);

        term.render_widget(MainHeader::new("Magic Forest"), area);

        assert!(term.buffer_contains("Grove"));
        assert!(!term.buffer_contains("Donate"));
    }
}
