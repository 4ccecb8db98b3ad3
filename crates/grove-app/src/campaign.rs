//! Fundraising progress shown by the page shell

use crate::config::CampaignSettings;

/// Running totals of the campaign the wizard donates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignState {
    pub raised: u64,
    pub goal: u64,
    pub milestone_amount: u64,
    pub milestone_label: String,
    /// Donations accepted since startup
    pub accepted_count: u32,
}

impl CampaignState {
    pub fn from_settings(settings: &CampaignSettings) -> Self {
        Self {
            raised: settings.raised,
            goal: settings.goal,
            milestone_amount: settings.milestone_amount,
            milestone_label: settings.milestone_label.clone(),
            accepted_count: 0,
        }
    }

    /// Share of the goal raised, capped at 100
    pub fn progress_percent(&self) -> f64 {
        if self.goal == 0 {
            return 100.0;
        }
        (self.raised as f64 / self.goal as f64 * 100.0).min(100.0)
    }

    /// Add a successful donation to the running total
    pub fn record_accepted_amount(&mut self, amount: u64) {
        self.raised = self.raised.saturating_add(amount);
        self.accepted_count += 1;
    }
}

impl Default for CampaignState {
    fn default() -> Self {
        Self::from_settings(&CampaignSettings::default())
    }
}

/// `12348` → `"$12,348"`
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_campaign_page() {
        let campaign = CampaignState::default();
        assert_eq!(campaign.raised, 12_348);
        assert_eq!(campaign.goal, 30_000);
        assert_eq!(campaign.milestone_label, "Grant Application Fee");
    }

    #[test]
    fn test_progress_is_capped() {
        let mut campaign = CampaignState::default();
        assert!((campaign.progress_percent() - 41.16).abs() < 0.01);

        campaign.record_accepted_amount(100_000);
        assert_eq!(campaign.progress_percent(), 100.0);
    }

    #[test]
    fn test_zero_goal_counts_as_reached() {
        let campaign = CampaignState {
            goal: 0,
            ..CampaignState::default()
        };
        assert_eq!(campaign.progress_percent(), 100.0);
    }

    #[test]
    fn test_record_accepted_amount() {
        let mut campaign = CampaignState::default();
        campaign.record_accepted_amount(50);
        assert_eq!(campaign.raised, 12_398);
        assert_eq!(campaign.accepted_count, 1);
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(12_348), "$12,348");
        assert_eq!(format_dollars(1_000_000), "$1,000,000");
    }
}
