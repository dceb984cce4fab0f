//! Equipment inventory loading
//!
//! The inventory is a CSV file read into a polars `DataFrame` with every
//! column kept as text. Header drift is absorbed by the configured rename map,
//! then each row is normalized and validated in order.

use crate::app::models::Equipment;
use crate::app::models::dates::parse_calendar_date;
use crate::app::models::raw::{RawRecord, RawValue};
use crate::config::LoaderConfig;
use crate::constants::{EQUIPMENT_DATE_COLUMNS, EQUIPMENT_FIELDS};
use crate::{Error, Result};
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load and validate the equipment inventory
///
/// # Arguments
/// * `path` - CSV file with a header row
/// * `options` - Column renames and missing-value markers
///
/// # Errors
/// * Returns `Error::Io` if the file does not exist
/// * Returns `Error::Polars` if the file is not readable CSV
/// * Returns `Error::Validation` for the first row that fails validation,
///   or for a repeated equipment_id
pub fn load_equipment(path: &Path, options: &LoaderConfig) -> Result<Vec<Equipment>> {
    info!("Loading equipment inventory from {}", path.display());

    if !path.exists() {
        return Err(Error::io(
            format!("Equipment file not found: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ));
    }

    let frame = read_text_frame(path)?;
    debug!(
        "Read {} rows and {} columns from {}",
        frame.height(),
        frame.width(),
        path.display()
    );

    equipment_from_frame(frame, options)
}

/// Read a CSV file keeping every column as text
fn read_text_frame(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        // Zero rows of inference: every column stays a string column
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| Error::polars(format!("Failed to read {}", path.display()), e))
}

/// Build validated equipment from an already-read frame
///
/// Columns that are not equipment fields are ignored. Non-text columns are
/// cast to text before normalization.
pub fn equipment_from_frame(mut frame: DataFrame, options: &LoaderConfig) -> Result<Vec<Equipment>> {
    apply_column_renames(&mut frame, &options.column_renames)?;

    let columns = field_columns(&frame)?;
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut equipment = Vec::with_capacity(frame.height());

    for row in 0..frame.height() {
        let record = normalize_row(&columns, row, options);
        let item = Equipment::from_raw(&record)?;

        if let Some(first_row) = first_seen.insert(item.equipment_id.clone(), row) {
            return Err(Error::validation(
                record.label(),
                "equipment_id",
                format!(
                    "duplicate identifier '{}' (first seen in row {})",
                    item.equipment_id, first_row
                ),
            ));
        }

        equipment.push(item);
    }

    info!("Loaded {} equipment records", equipment.len());
    Ok(equipment)
}

/// Rename alternate headers to their record field names
///
/// A rename is skipped when the source column is absent, or when the target
/// column already exists (the existing column wins).
fn apply_column_renames(frame: &mut DataFrame, renames: &BTreeMap<String, String>) -> Result<()> {
    for (from, to) in renames {
        if frame.column(from).is_err() {
            continue;
        }

        if frame.column(to).is_ok() {
            warn!(
                "Column '{}' not renamed: target column '{}' already present",
                from, to
            );
            continue;
        }

        frame
            .rename(from, PlSmallStr::from(to.as_str()))
            .map_err(|e| Error::polars(format!("Failed to rename column '{}'", from), e))?;
        debug!("Renamed column '{}' to '{}'", from, to);
    }

    Ok(())
}

/// Text views of the equipment columns present in the frame
fn field_columns(frame: &DataFrame) -> Result<Vec<(&'static str, StringChunked)>> {
    let mut columns = Vec::with_capacity(EQUIPMENT_FIELDS.len());

    for &field in EQUIPMENT_FIELDS {
        let Ok(column) = frame.column(field) else {
            debug!("Equipment column '{}' not present in source", field);
            continue;
        };

        let text = column
            .cast(&DataType::String)
            .map_err(|e| Error::polars(format!("Column '{}' is not convertible to text", field), e))?;
        let values = text
            .str()
            .map_err(|e| Error::polars(format!("Column '{}' is not text", field), e))?
            .clone();

        columns.push((field, values));
    }

    Ok(columns)
}

/// Normalize one row into a raw record
///
/// Nulls and missing-value markers become absent. Date columns are parsed
/// after trimming; values that do not parse become absent as well, so the
/// required-field check reports them.
fn normalize_row(
    columns: &[(&'static str, StringChunked)],
    row: usize,
    options: &LoaderConfig,
) -> RawRecord {
    let mut record = RawRecord::new(format!("equipment row {}", row));

    for (field, values) in columns {
        let Some(value) = values.get(row) else {
            continue;
        };

        if options.is_missing(value) {
            continue;
        }

        if EQUIPMENT_DATE_COLUMNS.contains(field) {
            match parse_calendar_date(value) {
                Some(date) => record.insert(*field, RawValue::Date(date)),
                None => debug!(
                    "Row {}: unparseable {} '{}' treated as missing",
                    row, field, value
                ),
            }
        } else {
            record.insert(*field, RawValue::Text(value.to_string()));
        }
    }

    record
}
