//! Widget components for the TUI

mod campaign;
mod header;
pub mod modal_overlay;
mod status_bar;
pub mod wizard;

pub use campaign::CampaignPage;
pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use wizard::{scroll_to_reveal, WizardBody, WizardModal};
