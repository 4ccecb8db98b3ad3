//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with shortcuts
    pub header: Rect,

    /// Campaign page (headline, progress, buttons)
    pub page: Rect,

    /// One-line key hints / error bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Page
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        page: chunks[1],
        status: chunks[2],
    }
}

/// Size of the wizard modal for a terminal of `area`
pub fn wizard_rect(area: Rect) -> Rect {
    let width = 64.min(area.width.saturating_sub(4));
    let height = 26.min(area.height.saturating_sub(2));
    crate::widgets::modal_overlay::centered_rect(width, height, area)
}
