//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use grove_app::state::{AppState, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{self, modal_overlay, scroll_to_reveal, WizardBody, WizardModal};

/// Render the complete UI (View function in TEA)
///
/// Only touches state the view owns: the wizard's scroll offset, and the
/// one-shot request to reveal the submit control.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new("Magic Forest").wizard_open(state.wizard_open),
        areas.header,
    );
    frame.render_widget(widgets::CampaignPage::new(&state.campaign), areas.page);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modals cover everything but the status bar
    let overlay = Rect {
        height: area.height.saturating_sub(areas.status.height),
        ..area
    };

    if state.wizard_open {
        render_wizard(frame, state, overlay);
    }

    if state.ui_mode == UiMode::ConfirmQuit {
        render_quit_prompt(frame, overlay);
    }
}

fn render_wizard(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let now = state.now();
    let block_expired = state.settings.behavior.block_expired_submission;
    let Some(session) = state.active_session() else {
        return;
    };
    let step = session.step;
    let body = WizardBody::build(session, now, block_expired);

    let modal = layout::wizard_rect(area);
    let viewport = widgets::wizard::body_area(modal, step).height;

    if state.take_scroll_request() {
        if let Some(line) = body.submit_line {
            state.wizard_scroll = scroll_to_reveal(state.wizard_scroll, viewport, line);
        }
    }
    state.wizard_scroll = state.wizard_scroll.min(body.max_scroll(viewport));

    modal_overlay::prepare_modal(frame.buffer_mut(), area, modal);
    frame.render_widget(WizardModal::new(step, &body, state.wizard_scroll), modal);
}

fn render_quit_prompt(frame: &mut Frame, area: Rect) {
    let modal = modal_overlay::centered_rect(44, 5, area);
    modal_overlay::prepare_modal(frame.buffer_mut(), area, modal);

    let lines = vec![
        Line::from(Span::styled(
            " A donation is still being processed.",
            styles::text_primary(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" y", styles::keybinding()),
            Span::styled(" Quit anyway   ", styles::text_muted()),
            Span::styled("n", styles::keybinding()),
            Span::styled(" Keep waiting", styles::text_muted()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(styles::modal_block(" Quit? ")),
        modal,
    );
}
