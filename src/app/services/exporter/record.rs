//! Flat joined record emitted by the exporter

use crate::Result;
use crate::app::models::{Equipment, MaintenanceLog};
use crate::constants::{EXPORT_FIELDS, ISO_DATE_FORMAT, WHOLE_COST_DECIMALS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (equipment, maintenance log) pair flattened into a single row
///
/// Field order is the export column order. The log's own status is carried
/// as `maintenance_status` so it does not collide with the equipment status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub equipment_id: String,
    pub equipment_type: String,
    pub location: String,
    pub manufacturer: String,
    pub model: String,
    pub installation_date: NaiveDate,
    pub status: String,
    pub last_maintenance: NaiveDate,
    pub log_id: String,
    pub maintenance_type: String,
    pub maintenance_date: NaiveDate,
    pub technician: String,
    pub description: String,
    pub maintenance_status: String,
    pub next_scheduled: Option<NaiveDate>,
    pub parts_used: Option<Vec<String>>,
    pub cost: f64,
}

impl ExportRecord {
    /// Flatten a matching equipment and log pair
    pub fn new(equipment: &Equipment, log: &MaintenanceLog) -> Self {
        Self {
            equipment_id: equipment.equipment_id.clone(),
            equipment_type: equipment.equipment_type.clone(),
            location: equipment.location.clone(),
            manufacturer: equipment.manufacturer.clone(),
            model: equipment.model.clone(),
            installation_date: equipment.installation_date,
            status: equipment.status.clone(),
            last_maintenance: equipment.last_maintenance,
            log_id: log.log_id.clone(),
            maintenance_type: log.maintenance_type.clone(),
            maintenance_date: log.maintenance_date,
            technician: log.technician.clone(),
            description: log.description.clone(),
            maintenance_status: log.status.clone(),
            next_scheduled: log.next_scheduled,
            parts_used: log.parts_used.clone(),
            cost: log.cost,
        }
    }

    /// Split the record back into the equipment and log it was built from
    ///
    /// Both halves are rebuilt through their validating constructors.
    pub fn into_parts(self) -> Result<(Equipment, MaintenanceLog)> {
        let equipment = Equipment::new(
            self.equipment_id.clone(),
            self.equipment_type,
            self.location,
            self.manufacturer,
            self.model,
            self.installation_date,
            self.status,
            self.last_maintenance,
        )?;

        let log = MaintenanceLog::new(
            self.log_id,
            self.equipment_id,
            self.maintenance_type,
            self.maintenance_date,
            self.technician,
            self.description,
            self.maintenance_status,
            self.next_scheduled,
            self.parts_used,
            self.cost,
        )?;

        Ok((equipment, log))
    }

    /// Cell texts in export column order
    ///
    /// Absent values become empty cells and parts_used is written as a JSON
    /// array literal.
    pub fn csv_row(&self) -> Result<[String; EXPORT_FIELDS.len()]> {
        let parts_used = match &self.parts_used {
            Some(parts) => serde_json::to_string(parts)?,
            None => String::new(),
        };

        Ok([
            self.equipment_id.clone(),
            self.equipment_type.clone(),
            self.location.clone(),
            self.manufacturer.clone(),
            self.model.clone(),
            format_date(self.installation_date),
            self.status.clone(),
            format_date(self.last_maintenance),
            self.log_id.clone(),
            self.maintenance_type.clone(),
            format_date(self.maintenance_date),
            self.technician.clone(),
            self.description.clone(),
            self.maintenance_status.clone(),
            self.next_scheduled.map(format_date).unwrap_or_default(),
            parts_used,
            format_cost(self.cost),
        ])
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Cost cell text in plain decimal notation
pub(crate) fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("{:.*}", WHOLE_COST_DECIMALS, cost)
    } else {
        cost.to_string()
    }
}
