//! Command-line argument definitions for the utility knowledge CLI
//!
//! This module defines the CLI interface using the clap derive API. Data
//! location and logging options are global so they can be given before or
//! after the subcommand.

use crate::config::Config;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the equipment and maintenance knowledge service
///
/// Loads an equipment inventory (CSV) and maintenance logs (JSON) once, then
/// lists, searches, summarises or exports them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "utility-knowledge",
    version,
    about = "Query and export equipment inventory and maintenance records",
    long_about = "Loads an equipment inventory (CSV) and maintenance logs (JSON), normalizes \
                  dates and missing values, and serves read-only listings, free-text search, \
                  metadata summaries and joined exports in JSON or CSV."
)]
pub struct Args {
    /// Path to configuration file
    ///
    /// TOML configuration file with [data], [loader] and [logging] sections.
    /// If not specified, looks for <config dir>/utility-knowledge/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory containing the data files
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        global = true,
        help = "Directory containing the data files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Equipment inventory file, relative to the data directory
    #[arg(
        long = "equipment-file",
        value_name = "FILE",
        global = true,
        help = "Equipment inventory CSV file"
    )]
    pub equipment_file: Option<PathBuf>,

    /// Maintenance log file, relative to the data directory
    #[arg(
        long = "maintenance-file",
        value_name = "FILE",
        global = true,
        help = "Maintenance log JSON file"
    )]
    pub maintenance_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for listings, search and info
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "json",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List all equipment records
    Equipment,
    /// List all maintenance logs
    Maintenance,
    /// Search equipment and maintenance records by free text
    Search(SearchArgs),
    /// Show distinct equipment models, locations and maintenance types
    Info,
    /// Export equipment joined with its maintenance history
    Export(ExportArgs),
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Case-insensitive text to look for
    ///
    /// Matches equipment id, model, type and location, and maintenance
    /// equipment id and type.
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Export format: json or csv
    ///
    /// Taken as free text so unsupported names are reported by the exporter.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Export format (json or csv)"
    )]
    pub format: String,

    /// Output file for the export
    ///
    /// If not specified, writes to stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the export"
    )]
    pub output: Option<PathBuf>,
}

/// Output format options for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// Pretty-printed JSON for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }

    /// Log level requested on the command line, if any
    ///
    /// Without -v or --quiet the configured level applies.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Resolve the effective log level against the loaded configuration
    pub fn effective_log_level(&self, config: Option<&Config>) -> String {
        self.get_log_level()
            .map(str::to_string)
            .or_else(|| config.map(|c| c.logging.level.clone()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Validate argument consistency before any data is loaded
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        if let Some(Commands::Export(export_args)) = &self.command {
            if let Some(parent) = export_args.output.as_ref().and_then(|p| p.parent()) {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }
}
