//! Grove - a terminal donation wizard
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use grove_core::prelude::*;

/// Grove - donate to the Magic Forest campaign from your terminal
#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(about = "A terminal donation wizard for the Magic Forest campaign", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (commands on stdin, JSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let Some(path) = grove_app::config::resolve_config_path(args.config.as_deref()) else {
            eprintln!("❌ No config directory available; pass --config <PATH>");
            std::process::exit(1);
        };
        let path = grove_app::config::init_config_file(&path)?;
        eprintln!("✅ Config file: {}", path.display());
        return Ok(());
    }

    if args.headless {
        grove::run_scripted(args.config.as_deref()).await
    } else {
        grove::run(args.config.as_deref()).await
    }
}
