//! Joined export of equipment and maintenance history
//!
//! Every equipment record is paired with each of its maintenance logs (inner
//! join on equipment_id) and the flattened pairs are serialized as a JSON
//! array or as CSV with a fixed header.

use crate::app::models::MaintenanceLog;
use crate::app::services::knowledge_base::KnowledgeBase;
use crate::constants::EXPORT_FIELDS;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, info};

pub mod format;
pub mod record;

#[cfg(test)]
pub mod tests;

pub use format::{ExportFormat, ExportPayload};
pub use record::ExportRecord;

/// Inner join of equipment with maintenance logs
///
/// Rows follow equipment order, and within one equipment the logs keep their
/// source order. Equipment without logs and logs for unknown equipment are
/// left out.
pub fn joined_records(knowledge_base: &KnowledgeBase) -> Vec<ExportRecord> {
    let mut logs_by_equipment: HashMap<&str, Vec<&MaintenanceLog>> = HashMap::new();
    for log in &knowledge_base.maintenance {
        logs_by_equipment
            .entry(log.equipment_id.as_str())
            .or_default()
            .push(log);
    }

    knowledge_base
        .equipment
        .iter()
        .flat_map(|equipment| {
            logs_by_equipment
                .get(equipment.equipment_id.as_str())
                .into_iter()
                .flatten()
                .map(move |log| ExportRecord::new(equipment, log))
        })
        .collect()
}

/// Serialize joined records as a pretty-printed JSON array
pub fn to_json(records: &[ExportRecord]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records)
        .map_err(|e| Error::json("Failed to serialize export records", e))
}

/// Serialize joined records as CSV
///
/// The header row is always written, so an empty join yields a header-only
/// document.
pub fn to_csv(records: &[ExportRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(EXPORT_FIELDS)
        .map_err(|e| Error::csv("Failed to write CSV header", e))?;

    for record in records {
        writer
            .write_record(record.csv_row()?)
            .map_err(|e| Error::csv(format!("Failed to write row for {}", record.log_id), e))?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush CSV export", e.into_error()))
}

impl KnowledgeBase {
    /// Export the joined records in the named format
    ///
    /// # Errors
    /// * Returns `Error::InvalidFormat` for any format other than "json" or "csv"
    /// * Returns `Error::Json` / `Error::Csv` if serialization fails
    pub fn export(&self, format: &str) -> Result<ExportPayload> {
        let format: ExportFormat = format.parse()?;
        let records = joined_records(self);
        debug!("Joined {} export records", records.len());

        let bytes = match format {
            ExportFormat::Json => to_json(&records)?,
            ExportFormat::Csv => to_csv(&records)?,
        };

        info!(
            "Exported {} records as {} ({} bytes)",
            records.len(),
            format,
            bytes.len()
        );
        Ok(ExportPayload { format, bytes })
    }
}
