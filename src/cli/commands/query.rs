//! Listing, search and info commands
//!
//! Each command renders either pretty JSON (the default, for scripting) or a
//! coloured human-readable summary.

use super::shared::print_json;
use crate::app::models::{Equipment, MaintenanceLog};
use crate::app::services::knowledge_base::{KnowledgeBase, KnowledgeInfo, SearchResults};
use crate::cli::args::OutputFormat;
use colored::*;

/// List all equipment
pub fn run_equipment(knowledge_base: &KnowledgeBase, format: OutputFormat) -> anyhow::Result<()> {
    let equipment = knowledge_base.all_equipment()?;

    match format {
        OutputFormat::Json => print_json(equipment),
        OutputFormat::Human => {
            print_heading("Equipment", equipment.len());
            for item in equipment {
                print_equipment(item);
            }
            Ok(())
        }
    }
}

/// List all maintenance logs
pub fn run_maintenance(knowledge_base: &KnowledgeBase, format: OutputFormat) -> anyhow::Result<()> {
    let logs = knowledge_base.all_maintenance()?;

    match format {
        OutputFormat::Json => print_json(logs),
        OutputFormat::Human => {
            print_heading("Maintenance Logs", logs.len());
            for log in logs {
                print_maintenance(log);
            }
            Ok(())
        }
    }
}

/// Search both collections
pub fn run_search(
    knowledge_base: &KnowledgeBase,
    query: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let results = knowledge_base.search(query)?;

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Human => {
            print_search_results(&results);
            Ok(())
        }
    }
}

/// Show distinct metadata values
pub fn run_info(knowledge_base: &KnowledgeBase, format: OutputFormat) -> anyhow::Result<()> {
    let info = knowledge_base.info();

    match format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Human => {
            print_info(&info);
            Ok(())
        }
    }
}

fn print_heading(title: &str, count: usize) {
    println!(
        "{} ({})",
        title.bright_green().bold(),
        count.to_string().bright_white().bold()
    );
}

fn print_equipment(item: &Equipment) {
    println!(
        "  {} {} {} at {}",
        item.equipment_id.bright_cyan().bold(),
        item.equipment_type,
        format!("({} {})", item.manufacturer, item.model).dimmed(),
        item.location
    );
    println!(
        "      status: {}  installed: {}  last maintenance: {}",
        item.status.yellow(),
        item.installation_date,
        item.last_maintenance
    );
}

fn print_maintenance(log: &MaintenanceLog) {
    println!(
        "  {} {} on {} by {} [{}]",
        log.log_id.bright_cyan().bold(),
        log.maintenance_type,
        log.maintenance_date,
        log.technician,
        log.status.yellow()
    );
    println!(
        "      equipment: {}  cost: {:.2}  parts: {}",
        log.equipment_id,
        log.cost,
        log.part_count()
    );
    if let Some(next) = log.next_scheduled {
        println!("      next scheduled: {}", next);
    }
    println!("      {}", log.description.dimmed());
}

fn print_search_results(results: &SearchResults<'_>) {
    println!(
        "{} '{}': {} matches",
        "Search".bright_green().bold(),
        results.query,
        results.total_matches().to_string().bright_white().bold()
    );

    if !results.equipment_matches.is_empty() {
        print_heading("Equipment", results.equipment_matches.len());
        for item in &results.equipment_matches {
            print_equipment(item);
        }
    }

    if !results.maintenance_matches.is_empty() {
        print_heading("Maintenance Logs", results.maintenance_matches.len());
        for log in &results.maintenance_matches {
            print_maintenance(log);
        }
    }
}

fn print_info(info: &KnowledgeInfo) {
    print_heading("Equipment Models", info.unique_equipment_models.len());
    for (equipment_id, equipment_type) in &info.unique_equipment_models {
        println!("  {} {}", equipment_id.bright_cyan(), equipment_type);
    }

    print_heading("Locations", info.unique_locations.len());
    for location in &info.unique_locations {
        println!("  {}", location);
    }

    print_heading("Maintenance Types", info.maintenance_types.len());
    for maintenance_type in &info.maintenance_types {
        println!("  {}", maintenance_type);
    }
}
