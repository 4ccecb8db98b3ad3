//! Campaign page: headline, fundraising progress and the donate button.

use grove_app::{format_dollars, CampaignState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const HEADLINE: &str = "PLANT MAGIC FOREST - TOGETHER";

/// The page behind the wizard
pub struct CampaignPage<'a> {
    campaign: &'a CampaignState,
}

impl<'a> CampaignPage<'a> {
    pub fn new(campaign: &'a CampaignState) -> Self {
        Self { campaign }
    }

    fn totals_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format_dollars(self.campaign.raised), styles::text_bright_bold()),
            Span::styled(
                format!(" of {}", format_dollars(self.campaign.goal)),
                styles::text_secondary(),
            ),
        ])
    }

    fn milestone_line(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!(
                "Next Goal: {} - {}",
                self.campaign.milestone_label,
                format_dollars(self.campaign.milestone_amount)
            ),
            styles::text_secondary(),
        ))
    }

    fn buttons_line() -> Line<'static> {
        Line::from(vec![
            Span::styled(" Donate Now ", styles::focused_selected()),
            Span::raw("   "),
            Span::styled(" Learn More ", styles::border_inactive()),
        ])
    }
}

impl Widget for CampaignPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 8 || inner.width < 20 {
            Paragraph::new(self.totals_line())
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let [_, headline, _, totals, milestone, gauge, _, buttons, thanks, _, footer] =
            Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new(Line::from(Span::styled(HEADLINE, styles::text_bright_bold())))
            .alignment(Alignment::Center)
            .render(headline, buf);

        Paragraph::new(self.totals_line())
            .alignment(Alignment::Center)
            .render(totals, buf);
        Paragraph::new(self.milestone_line())
            .alignment(Alignment::Center)
            .render(milestone, buf);

        let percent = self.campaign.progress_percent();
        let [_, bar, _] = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .areas(gauge);
        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::INPUT_BG))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{percent:.0}%"))
            .render(bar, buf);

        Paragraph::new(Self::buttons_line())
            .alignment(Alignment::Center)
            .render(buttons, buf);

        if self.campaign.accepted_count > 0 {
            let noun = if self.campaign.accepted_count == 1 {
                "donation"
            } else {
                "donations"
            };
            Paragraph::new(Line::from(Span::styled(
                format!(
                    "Thank you! {} {noun} received this session",
                    self.campaign.accepted_count
                ),
                styles::accent(),
            )))
            .alignment(Alignment::Center)
            .render(thanks, buf);
        }

        Paragraph::new(Line::from(Span::styled(
            "© 2025 Magic Forest Association",
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}
