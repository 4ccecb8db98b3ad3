//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use grove_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const GROVE_DIR: &str = "grove";

const DEFAULT_CONFIG: &str = r#"# Grove Configuration

[timing]
reset_delay_ms = 300      # Delay before a closed wizard forgets its session
focus_delay_ms = 120      # Delay before focus hops to the next card field
scroll_delay_ms = 250     # Delay before the submit button is scrolled into view
submit_latency_ms = 800   # Simulated payment backend latency

[campaign]
raised = 12348
goal = 30000
milestone_amount = 3000
milestone_label = "Grant Application Fee"

[behavior]
block_expired_submission = true   # Refuse to submit an expired card
confirm_quit = false              # Ask before quitting mid-submission
"#;

/// Default location: `<config dir>/grove/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GROVE_DIR).join(CONFIG_FILENAME))
}

/// Resolve an explicit `--config` path, falling back to the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load settings from a config file
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Read and parse a config file, reporting where it went wrong
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(config_path, e.message()))
}

/// Write the commented default config file
///
/// Leaves an existing file untouched. Returns the path that was checked.
pub fn init_config_file(config_path: &Path) -> Result<PathBuf> {
    if let Some(dir) = config_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
    }

    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
    } else {
        std::fs::write(config_path, DEFAULT_CONFIG)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path.to_path_buf())
}
