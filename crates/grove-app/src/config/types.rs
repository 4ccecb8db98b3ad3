//! Configuration types for Grove
//!
//! Defines `Settings` (the contents of `config.toml`) and its sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub campaign: CampaignSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Delays of the wizard's deferred operations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Settle delay between closing the wizard and discarding its session
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    /// Settle delay before an automatic focus transfer is applied
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,

    /// Delay before the submit control is scrolled into view
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,

    /// Latency of the simulated payment backend
    #[serde(default = "default_submit_latency_ms")]
    pub submit_latency_ms: u64,
}

impl TimingSettings {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            focus_delay_ms: default_focus_delay_ms(),
            scroll_delay_ms: default_scroll_delay_ms(),
            submit_latency_ms: default_submit_latency_ms(),
        }
    }
}

fn default_reset_delay_ms() -> u64 {
    300
}

fn default_focus_delay_ms() -> u64 {
    120
}

fn default_scroll_delay_ms() -> u64 {
    250
}

fn default_submit_latency_ms() -> u64 {
    800
}

/// Fundraising figures shown by the page shell
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignSettings {
    /// Amount already raised when the app starts
    #[serde(default = "default_raised")]
    pub raised: u64,

    /// Campaign goal
    #[serde(default = "default_goal")]
    pub goal: u64,

    /// Amount still needed for the next milestone
    #[serde(default = "default_milestone_amount")]
    pub milestone_amount: u64,

    /// What the next milestone pays for
    #[serde(default = "default_milestone_label")]
    pub milestone_label: String,
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            raised: default_raised(),
            goal: default_goal(),
            milestone_amount: default_milestone_amount(),
            milestone_label: default_milestone_label(),
        }
    }
}

fn default_raised() -> u64 {
    12_348
}

fn default_goal() -> u64 {
    30_000
}

fn default_milestone_amount() -> u64 {
    3_000
}

fn default_milestone_label() -> String {
    "Grant Application Fee".to_string()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Refuse to submit a card whose expiry month has passed
    #[serde(default = "default_true")]
    pub block_expired_submission: bool,

    /// Ask before quitting while a donation is being submitted
    #[serde(default)]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            block_expired_submission: true,
            confirm_quit: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let timing = TimingSettings::default();
        assert_eq!(timing.reset_delay(), Duration::from_millis(300));
        assert_eq!(timing.submit_latency(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str("[timing]\nfocus_delay_ms = 50\n").unwrap();
        assert_eq!(settings.timing.focus_delay_ms, 50);
        assert_eq!(settings.timing.reset_delay_ms, 300);
        assert_eq!(settings.campaign.goal, 30_000);
        assert!(settings.behavior.block_expired_submission);
    }

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
