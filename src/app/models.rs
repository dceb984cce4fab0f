//! Data models for equipment and maintenance records
//!
//! This module contains the two record types served by the knowledge base.
//! Both are constructed through validating constructors so that every value
//! held in memory has already passed the field rules; the raw, unvalidated
//! form used while loading lives in [`raw`].

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod dates;
pub mod raw;

use raw::RawRecord;

// =============================================================================
// Equipment
// =============================================================================

/// A physical asset with identity, location and maintenance status
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Equipment {
    /// Unique equipment identifier (e.g., "EQ001")
    pub equipment_id: String,

    /// Kind of asset (e.g., "Pump", "Transformer")
    pub equipment_type: String,

    /// Site where the asset is installed
    pub location: String,

    pub manufacturer: String,

    pub model: String,

    pub installation_date: NaiveDate,

    /// Operational status (e.g., "Active", "Under Repair")
    pub status: String,

    pub last_maintenance: NaiveDate,
}

impl Equipment {
    /// Create a new Equipment with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        equipment_id: String,
        equipment_type: String,
        location: String,
        manufacturer: String,
        model: String,
        installation_date: NaiveDate,
        status: String,
        last_maintenance: NaiveDate,
    ) -> Result<Self> {
        let equipment = Self {
            equipment_id,
            equipment_type,
            location,
            manufacturer,
            model,
            installation_date,
            status,
            last_maintenance,
        };

        equipment.validate()?;
        Ok(equipment)
    }

    /// Build an Equipment from a normalized raw record
    ///
    /// # Errors
    /// * Returns `Error::Validation` naming the record and field when a required
    ///   field is absent or does not coerce to its declared type
    pub fn from_raw(record: &RawRecord) -> Result<Self> {
        Self::new(
            record.required_text("equipment_id")?,
            record.required_text("equipment_type")?,
            record.required_text("location")?,
            record.required_text("manufacturer")?,
            record.required_text("model")?,
            record.required_date("installation_date")?,
            record.required_text("status")?,
            record.required_date("last_maintenance")?,
        )
        .map_err(|e| relabel(e, record.label()))
    }

    /// Validate equipment field rules
    pub fn validate(&self) -> Result<()> {
        if self.equipment_id.trim().is_empty() {
            return Err(Error::validation(
                "equipment",
                "equipment_id",
                "identifier cannot be empty",
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Maintenance Log
// =============================================================================

/// One historical or scheduled service event tied to an equipment identifier
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaintenanceLog {
    /// Unique log identifier
    pub log_id: String,

    /// Equipment this event belongs to; not required to exist in the inventory
    pub equipment_id: String,

    /// Kind of service (e.g., "Inspection", "Repair")
    pub maintenance_type: String,

    /// Date the service took place; accepted as `date` on input
    #[serde(alias = "date")]
    pub maintenance_date: NaiveDate,

    pub technician: String,

    pub description: String,

    /// Status of the maintenance event itself (not the equipment)
    pub status: String,

    #[serde(default)]
    pub next_scheduled: Option<NaiveDate>,

    #[serde(default)]
    pub parts_used: Option<Vec<String>>,

    pub cost: f64,
}

impl MaintenanceLog {
    /// Create a new MaintenanceLog with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        log_id: String,
        equipment_id: String,
        maintenance_type: String,
        maintenance_date: NaiveDate,
        technician: String,
        description: String,
        status: String,
        next_scheduled: Option<NaiveDate>,
        parts_used: Option<Vec<String>>,
        cost: f64,
    ) -> Result<Self> {
        let log = Self {
            log_id,
            equipment_id,
            maintenance_type,
            maintenance_date,
            technician,
            description,
            status,
            next_scheduled,
            parts_used,
            cost,
        };

        log.validate()?;
        Ok(log)
    }

    /// Build a MaintenanceLog from a normalized raw record
    ///
    /// The service date is read under its semantic name `maintenance_date`;
    /// the loader has already folded the `date` alias into it.
    ///
    /// # Errors
    /// * Returns `Error::Validation` naming the record and field when a required
    ///   field is absent or does not coerce to its declared type
    pub fn from_raw(record: &RawRecord) -> Result<Self> {
        Self::new(
            record.required_text("log_id")?,
            record.required_text("equipment_id")?,
            record.required_text("maintenance_type")?,
            record.required_date("maintenance_date")?,
            record.required_text("technician")?,
            record.required_text("description")?,
            record.required_text("status")?,
            record.optional_date("next_scheduled")?,
            record.optional_text_list("parts_used")?,
            record.required_number("cost")?,
        )
        .map_err(|e| relabel(e, record.label()))
    }

    /// Validate maintenance field rules
    pub fn validate(&self) -> Result<()> {
        if self.log_id.trim().is_empty() {
            return Err(Error::validation(
                "maintenance log",
                "log_id",
                "identifier cannot be empty",
            ));
        }

        if self.equipment_id.trim().is_empty() {
            return Err(Error::validation(
                format!("maintenance log {}", self.log_id),
                "equipment_id",
                "equipment reference cannot be empty",
            ));
        }

        if !self.cost.is_finite() {
            return Err(Error::validation(
                format!("maintenance log {}", self.log_id),
                "cost",
                format!("cost must be a finite number, got {}", self.cost),
            ));
        }

        Ok(())
    }

    /// Number of parts recorded for this event
    pub fn part_count(&self) -> usize {
        self.parts_used.as_ref().map_or(0, Vec::len)
    }
}

/// Attach the source record label to a validation error raised by `validate`
fn relabel(error: Error, label: &str) -> Error {
    match error {
        Error::Validation { field, message, .. } => Error::validation(label, field, message),
        other => other,
    }
}
