//! Configuration file parsing for Grove
//!
//! Supports a single `config.toml`, found at `--config <path>` or under the
//! user's config directory (`~/.config/grove/config.toml` on Linux).

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, read_settings, resolve_config_path,
};
pub use types::*;
