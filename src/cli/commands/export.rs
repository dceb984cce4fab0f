//! Export command

use super::shared::write_output;
use crate::app::services::knowledge_base::KnowledgeBase;
use crate::cli::args::ExportArgs;
use colored::*;

/// Export the joined records to stdout or a file
pub fn run_export(knowledge_base: &KnowledgeBase, args: &ExportArgs) -> anyhow::Result<()> {
    let payload = knowledge_base.export(&args.format)?;

    write_output(args.output.as_deref(), &payload.bytes)?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} {} ({}, {} bytes) to {}",
            "Exported".bright_green().bold(),
            payload.file_name(),
            payload.content_type(),
            payload.byte_len(),
            path.display()
        );
    }
    Ok(())
}
