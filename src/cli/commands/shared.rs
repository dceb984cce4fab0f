//! Shared components for CLI commands
//!
//! This module contains logging setup, layered configuration loading and
//! output helpers used across the command implementations.

use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins when set; otherwise the crate is logged at `log_level`.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("utility_knowledge={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    // Determine config file path
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(data_dir) = &args.data_dir {
        config.data.data_dir = data_dir.clone();
    }
    if let Some(equipment_file) = &args.equipment_file {
        config.data.equipment_file = equipment_file.clone();
    }
    if let Some(maintenance_file) = &args.maintenance_file {
        config.data.maintenance_file = maintenance_file.clone();
    }
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

/// Log which configuration sources were used
pub fn report_configuration(args: &Args, config: &Config) {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No explicit config file, using defaults, user config and environment"),
    }
    debug!(
        "Data sources: {} and {}",
        config.data.equipment_path().display(),
        config.data.maintenance_path().display()
    );
}

/// Write bytes to a file, or to stdout when no path is given
pub fn write_output(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    text.push('\n');
    write_output(None, text.as_bytes())
}
