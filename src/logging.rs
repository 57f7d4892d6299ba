//! Log setup
//!
//! The terminal belongs to the UI, so logs go to a file in the config
//! directory. The filter is read from `ONBOARDING_LOG` (default `info`).

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::panic;
use std::path::Path;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ONBOARDING_LOG";

pub fn initialize_logger(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let log_path = dir.join("onboarding.log");
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global default subscriber")?;

    // Log panics
    let default_panic_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown");

        match panic_info.location() {
            Some(location) => error!(
                location = tracing::field::display(location),
                "Panic occurred: {}", message
            ),
            None => error!("Panic occurred: {}", message),
        }

        default_panic_hook(panic_info);
    }));

    tracing::info!(path = %log_path.display(), "Logger initialized");
    Ok(())
}
