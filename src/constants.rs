//! Application constants for the utility knowledge service
//!
//! This module contains default file locations, field names, and the
//! normalization tables used when loading the two record sources.

// =============================================================================
// Data Locations
// =============================================================================

/// Default directory holding the input data files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default equipment inventory file name (tabular source)
pub const DEFAULT_EQUIPMENT_FILE: &str = "equipment_inventory.csv";

/// Default maintenance log file name (structured source)
pub const DEFAULT_MAINTENANCE_FILE: &str = "maintenance_logs.json";

/// Directory name under the user config dir for the config file
pub const CONFIG_DIR_NAME: &str = "utility-knowledge";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables recognised by the layered configuration
pub mod env_vars {
    pub const DATA_DIR: &str = "UTILITY_KNOWLEDGE_DATA_DIR";
    pub const EQUIPMENT_FILE: &str = "UTILITY_KNOWLEDGE_EQUIPMENT_FILE";
    pub const MAINTENANCE_FILE: &str = "UTILITY_KNOWLEDGE_MAINTENANCE_FILE";
    pub const LOG_LEVEL: &str = "UTILITY_KNOWLEDGE_LOG_LEVEL";
}

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in configuration
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Normalization Tables
// =============================================================================

/// Default column renames applied to the equipment header before validation
///
/// Keys are alternate header names seen in the wild, values are the field
/// names the equipment record expects.
pub const DEFAULT_COLUMN_RENAMES: &[(&str, &str)] = &[("installed_on", "installation_date")];

/// Cell texts that the tabular source uses to mean "no value"
pub const DEFAULT_MISSING_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "NULL", "null", "None", "<NA>", "#N/A",
];

/// Date-typed equipment columns
pub const EQUIPMENT_DATE_COLUMNS: &[&str] = &["installation_date", "last_maintenance"];

/// Field names of the equipment record, in declaration order
pub const EQUIPMENT_FIELDS: &[&str] = &[
    "equipment_id",
    "equipment_type",
    "location",
    "manufacturer",
    "model",
    "installation_date",
    "status",
    "last_maintenance",
];

/// Maintenance field names
pub mod maintenance_fields {
    /// Semantic name of the service date
    pub const MAINTENANCE_DATE: &str = "maintenance_date";

    /// Alternate input name accepted for the service date
    pub const DATE_ALIAS: &str = "date";

    /// Optional follow-up date
    pub const NEXT_SCHEDULED: &str = "next_scheduled";
}

// =============================================================================
// Export
// =============================================================================

/// Column order of the joined export record
pub const EXPORT_FIELDS: &[&str] = &[
    "equipment_id",
    "equipment_type",
    "location",
    "manufacturer",
    "model",
    "installation_date",
    "status",
    "last_maintenance",
    "log_id",
    "maintenance_type",
    "maintenance_date",
    "technician",
    "description",
    "maintenance_status",
    "next_scheduled",
    "parts_used",
    "cost",
];

/// Calendar date output format (ISO-8601)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Decimal places written for whole-number costs in CSV cells
///
/// Costs are written in plain decimal notation (never exponent form); whole
/// amounts keep one decimal (`150.0`) to match the JSON export, other amounts
/// use the shortest exact text (`95.25`).
pub const WHOLE_COST_DECIMALS: usize = 1;

/// Base name of export attachments
pub const EXPORT_FILE_STEM: &str = "export";
