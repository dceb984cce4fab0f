//! Maintenance log loading
//!
//! The maintenance source is a JSON array of objects. Each object is
//! normalized independently: the service date is accepted under `date` or
//! `maintenance_date`, both date fields are parsed with the shared date
//! formats, and null or empty-string values become absent.

use crate::app::models::MaintenanceLog;
use crate::app::models::dates::parse_calendar_date;
use crate::app::models::raw::{RawRecord, RawValue};
use crate::constants::maintenance_fields::{DATE_ALIAS, MAINTENANCE_DATE, NEXT_SCHEDULED};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load and validate the maintenance log file
///
/// # Errors
/// * Returns `Error::Io` if the file cannot be read
/// * Returns `Error::Json` if the content is not JSON
/// * Returns `Error::Validation` if the document is not an array of objects or
///   a record fails validation
pub fn load_maintenance(path: &Path) -> Result<Vec<MaintenanceLog>> {
    info!("Loading maintenance logs from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io(
            format!("Failed to read maintenance file {}", path.display()),
            e,
        )
    })?;

    parse_maintenance(&content)
}

/// Parse and validate maintenance logs from JSON text
pub fn parse_maintenance(content: &str) -> Result<Vec<MaintenanceLog>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| Error::json("Maintenance source is not valid JSON", e))?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(Error::validation(
                "maintenance source",
                "(document)",
                format!("expected an array of records, found {}", json_kind(&other)),
            ));
        }
    };

    let mut logs = Vec::with_capacity(entries.len());
    let mut log_ids = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let record = normalize_entry(index, entry)?;
        let log = MaintenanceLog::from_raw(&record)?;

        if !log_ids.insert(log.log_id.clone()) {
            warn!("Duplicate maintenance log id '{}' in record {}", log.log_id, index);
        }

        logs.push(log);
    }

    info!("Loaded {} maintenance logs", logs.len());
    Ok(logs)
}

/// Normalize one JSON object into a raw record
fn normalize_entry(index: usize, entry: Value) -> Result<RawRecord> {
    let label = format!("maintenance record {}", index);

    let fields = match entry {
        Value::Object(fields) => fields,
        other => {
            return Err(Error::validation(
                label,
                "(record)",
                format!("expected an object, found {}", json_kind(&other)),
            ));
        }
    };

    let mut record = RawRecord::new(label);
    for (key, value) in fields {
        match value {
            Value::Null => {}
            Value::String(ref s) if s.is_empty() => {}
            other => record.insert(key, RawValue::from(other)),
        }
    }

    fold_date_alias(&mut record);
    normalize_date_field(&mut record, MAINTENANCE_DATE);
    normalize_date_field(&mut record, NEXT_SCHEDULED);

    Ok(record)
}

/// Move a `date` value to `maintenance_date`; the semantic name wins when both exist
fn fold_date_alias(record: &mut RawRecord) {
    let Some(alias_value) = record.remove(DATE_ALIAS) else {
        return;
    };

    if record.contains(MAINTENANCE_DATE) {
        debug!(
            "{}: both '{}' and '{}' present, keeping '{}'",
            record.label(),
            DATE_ALIAS,
            MAINTENANCE_DATE,
            MAINTENANCE_DATE
        );
    } else {
        record.insert(MAINTENANCE_DATE, alias_value);
    }
}

/// Parse a textual date field in place; unparseable text becomes absent
///
/// Non-text values are left untouched so validation can report their type.
fn normalize_date_field(record: &mut RawRecord, field: &str) {
    let Some(RawValue::Text(text)) = record.get(field) else {
        return;
    };

    match parse_calendar_date(text) {
        Some(date) => record.insert(field, RawValue::Date(date)),
        None => {
            debug!(
                "{}: unparseable {} '{}' treated as missing",
                record.label(),
                field,
                text
            );
            record.remove(field);
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
