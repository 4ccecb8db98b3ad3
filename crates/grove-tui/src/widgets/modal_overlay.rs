//! Modal overlay helpers: centering, backdrop dimming and drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within `area`, clamped to its dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell of `area` so the page reads as inactive behind a modal.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Draw a 1-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal.right();
    let bottom_y = modal.bottom();

    let right_edge = (modal.y.saturating_add(1)..=bottom_y).map(|y| (right_x, y));
    let bottom_edge = (modal.x.saturating_add(1)..=right_x).map(|x| (x, bottom_y));

    for position in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim `screen`, shadow `modal` and clear it for the modal's content.
pub fn prepare_modal(buf: &mut Buffer, screen: Rect, modal: Rect) {
    dim_background(buf, screen);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let result = centered_rect(40, 10, area);
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_only_touches_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, Rect::new(5, 3, 10, 5));

        assert_eq!(buf[(5, 3)].fg, palette::TEXT_MUTED);
        assert_eq!(buf[(14, 7)].bg, palette::DEEPEST_BG);
        assert_ne!(buf[(4, 3)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_render_shadow_offset() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6));

        assert_eq!(buf[(15, 3)].bg, palette::SHADOW);
        assert_eq!(buf[(6, 8)].bg, palette::SHADOW);
        assert_ne!(buf[(5, 8)].bg, palette::SHADOW);
    }

    #[test]
    fn test_render_shadow_at_edge_does_not_panic() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2));
    }

    #[test]
    fn test_prepare_modal_clears_modal() {
        let screen = Rect::new(0, 0, 10, 6);
        let mut buf = Buffer::empty(screen);
        for y in 0..6 {
            for x in 0..10 {
                buf[(x, y)].set_char('X');
            }
        }

        prepare_modal(&mut buf, screen, Rect::new(2, 1, 5, 3));

        assert_eq!(buf[(3, 2)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), "X");
    }
}
