//! Donation wizard modal
//!
//! The body of each step is built as plain lines first, so the view knows
//! where the submit control sits before anything is drawn and can scroll it
//! into view.

mod steps;

use grove_app::DonationSession;
use grove_core::{Step, YearMonth};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Rendered lines of the current step
#[derive(Debug, Default)]
pub struct WizardBody {
    pub lines: Vec<Line<'static>>,
    /// Line index of the submit control, on the payment step
    pub submit_line: Option<u16>,
}

impl WizardBody {
    pub fn build(session: &DonationSession, now: YearMonth, block_expired: bool) -> Self {
        let mut body = Self::default();
        match session.step {
            Step::TypeSelection => steps::type_selection(&mut body, session),
            Step::AmountSelection => steps::amount_selection(&mut body, session),
            Step::PaymentDetails => steps::payment_details(&mut body, session, now, block_expired),
            Step::Success => steps::success(&mut body, session),
        }
        body
    }

    fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Mark the next pushed line as the submit control
    fn mark_submit(&mut self) {
        self.submit_line = Some(self.lines.len() as u16);
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Largest useful scroll offset for a viewport of `viewport` rows
    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.height().saturating_sub(viewport)
    }
}

/// Scroll offset that brings `line` into a viewport of `viewport` rows.
///
/// Returns `scroll` unchanged when the line is already fully visible.
pub fn scroll_to_reveal(scroll: u16, viewport: u16, line: u16) -> u16 {
    if viewport == 0 {
        scroll
    } else if line < scroll {
        line
    } else if line >= scroll.saturating_add(viewport) {
        line + 1 - viewport
    } else {
        scroll
    }
}

/// Area the step body occupies inside a wizard modal at `modal`
pub fn body_area(modal: Rect, step: Step) -> Rect {
    let inner = styles::modal_block("").inner(modal);
    if step.ordinal().is_some() {
        let [_, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        body
    } else {
        inner
    }
}

/// The wizard dialog: title, stepper and the scrolled step body
pub struct WizardModal<'a> {
    step: Step,
    body: &'a WizardBody,
    scroll: u16,
}

impl<'a> WizardModal<'a> {
    pub fn new(step: Step, body: &'a WizardBody, scroll: u16) -> Self {
        Self { step, body, scroll }
    }

    fn stepper(&self) -> Line<'static> {
        let current = self.step.ordinal().unwrap_or(0);
        let mut spans = vec![Span::raw(" ")];
        for (ordinal, label) in [(1, "Type"), (2, "Amount"), (3, "Payment")] {
            if ordinal > 1 {
                spans.push(Span::styled(" ── ", styles::text_muted()));
            }
            let style = match ordinal.cmp(&current) {
                std::cmp::Ordering::Less => styles::accent(),
                std::cmp::Ordering::Equal => styles::accent_bold(),
                std::cmp::Ordering::Greater => styles::text_muted(),
            };
            spans.push(Span::styled(format!("{ordinal} {label}"), style));
        }
        Line::from(spans)
    }
}

impl Widget for WizardModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.step.title());
        let block = styles::modal_block(&title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.step.ordinal().is_some() {
            Paragraph::new(self.stepper()).render(Rect { height: 1, ..inner }, buf);
        }

        let body = body_area(area, self.step);
        Paragraph::new(self.body.lines.clone())
            .scroll((self.scroll, 0))
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_scroll_to_reveal() {
        // Already visible
        assert_eq!(scroll_to_reveal(0, 10, 9), 0);
        // Below the viewport: last row
        assert_eq!(scroll_to_reveal(0, 10, 17), 8);
        // Above the viewport: first row
        assert_eq!(scroll_to_reveal(12, 10, 3), 3);
        assert_eq!(scroll_to_reveal(4, 0, 17), 4);
    }

    #[test]
    fn test_body_area_skips_stepper() {
        let modal = Rect::new(0, 0, 40, 20);
        assert_eq!(body_area(modal, Step::AmountSelection), Rect::new(1, 3, 38, 16));
        assert_eq!(body_area(modal, Step::Success), Rect::new(1, 1, 38, 18));
    }

    #[test]
    fn test_modal_shows_title_and_stepper() {
        let mut term = TestTerminal::new();
        let session = DonationSession::new(1);
        let body = WizardBody::build(&session, YearMonth::new(2025, 1), true);

        term.render_widget(
            WizardModal::new(session.step, &body, 0),
            Rect::new(0, 0, 64, 20),
        );

        assert!(term.buffer_contains("Choose Donation Type"));
        assert!(term.buffer_contains("1 Type ── 2 Amount ── 3 Payment"));
        assert!(term.buffer_contains("One-time"));
    }
}
