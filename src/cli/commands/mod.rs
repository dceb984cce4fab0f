//! Command implementations for the utility knowledge CLI
//!
//! Every command works on the same knowledge base, so configuration, logging
//! and the one-time load happen here before dispatch:
//! - `query`: equipment/maintenance listings, search and info
//! - `export`: joined JSON/CSV export

pub mod export;
pub mod query;
pub mod shared;

use crate::app::services::knowledge_base::KnowledgeBase;
use crate::cli::args::{Args, Commands};
use anyhow::Context;
use tracing::debug;

/// Main command runner
///
/// Loads the configuration and the knowledge base, then dispatches to the
/// subcommand handler. A load failure stops the command before any output.
pub fn run(args: Args) -> anyhow::Result<()> {
    args.validate()?;

    let config = shared::load_configuration(&args)?;
    shared::setup_logging(&args.effective_log_level(Some(&config)), args.quiet)?;
    shared::report_configuration(&args, &config);

    let (knowledge_base, stats) = KnowledgeBase::load(&config).with_context(|| {
        format!(
            "Failed to load records from {}",
            config.data.data_dir.display()
        )
    })?;
    debug!("{}", stats.summary());

    let Some(command) = args.get_command() else {
        return Ok(());
    };

    match command {
        Commands::Equipment => query::run_equipment(&knowledge_base, args.output_format),
        Commands::Maintenance => query::run_maintenance(&knowledge_base, args.output_format),
        Commands::Search(search_args) => {
            query::run_search(&knowledge_base, &search_args.query, args.output_format)
        }
        Commands::Info => query::run_info(&knowledge_base, args.output_format),
        Commands::Export(export_args) => export::run_export(&knowledge_base, export_args),
    }
}
