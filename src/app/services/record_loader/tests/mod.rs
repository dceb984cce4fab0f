//! Shared test utilities and fixtures for record loader tests

use std::fs;
use std::path::{Path, PathBuf};

pub mod equipment_tests;

/// Header used by the standard equipment fixture
pub const EQUIPMENT_HEADER: &str =
    "equipment_id,equipment_type,location,manufacturer,model,installation_date,status,last_maintenance";

/// Write a CSV fixture made of a header line and data lines
pub fn write_equipment_csv(dir: &Path, header: &str, rows: &[&str]) -> std::io::Result<PathBuf> {
    let path = dir.join("equipment_inventory.csv");
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// A well-formed maintenance record as JSON text, with overridable fields
pub fn maintenance_entry(log_id: &str, equipment_id: &str, extra: &str) -> String {
    let base = format!(
        r#""log_id": "{}",
        "equipment_id": "{}",
        "maintenance_type": "Inspection",
        "date": "2024-03-01",
        "technician": "R. Patel",
        "description": "Quarterly inspection",
        "status": "Completed",
        "cost": 150.0"#,
        log_id, equipment_id
    );

    if extra.is_empty() {
        format!("{{{}}}", base)
    } else {
        format!("{{{}, {}}}", base, extra)
    }
}
