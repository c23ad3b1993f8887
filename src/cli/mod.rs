// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;

pub use args::Cli;

use anyhow::{Context, Result};

use crate::config::Config;

/// Loads the config named on the command line and applies flag overrides.
///
/// # Errors
/// Returns error if the config file is unreadable or invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
        config.validate().context("Invalid --output-dir")?;
    }
    Ok(config)
}

/// Log filter for `-v` counts; `RUST_LOG` takes precedence when set.
#[must_use]
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "charnet_core=warn",
        1 => "charnet_core=info",
        2 => "charnet_core=debug",
        _ => "charnet_core=trace",
    }
}
