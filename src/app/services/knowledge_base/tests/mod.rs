//! Shared test utilities and fixtures for knowledge base tests

use crate::app::models::{Equipment, MaintenanceLog};
use crate::app::services::knowledge_base::KnowledgeBase;
use chrono::NaiveDate;


pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test equipment record with standard dates
pub fn create_test_equipment(
    equipment_id: &str,
    equipment_type: &str,
    location: &str,
    model: &str,
) -> Equipment {
    Equipment::new(
        equipment_id.to_string(),
        equipment_type.to_string(),
        location.to_string(),
        "Acme".to_string(),
        model.to_string(),
        ymd(2019, 3, 1),
        "Active".to_string(),
        ymd(2024, 1, 15),
    )
    .unwrap()
}

/// Create a test maintenance log with standard details
pub fn create_test_log(log_id: &str, equipment_id: &str, maintenance_type: &str) -> MaintenanceLog {
    MaintenanceLog::new(
        log_id.to_string(),
        equipment_id.to_string(),
        maintenance_type.to_string(),
        ymd(2024, 2, 10),
        "R. Patel".to_string(),
        "Scheduled service".to_string(),
        "Completed".to_string(),
        Some(ymd(2024, 8, 10)),
        Some(vec!["Filter".to_string()]),
        95.5,
    )
    .unwrap()
}

/// Knowledge base with three pieces of equipment and four logs
///
/// EQ003 has no history and LOG004 references equipment missing from the
/// inventory.
pub fn create_sample_knowledge_base() -> KnowledgeBase {
    let equipment = vec![
        create_test_equipment("EQ001", "Pump", "Station A", "P-100"),
        create_test_equipment("EQ002", "Transformer", "Substation B", "T-9"),
        create_test_equipment("EQ003", "Valve", "Station A", "V-2"),
    ];
    let maintenance = vec![
        create_test_log("LOG001", "EQ001", "Inspection"),
        create_test_log("LOG002", "EQ002", "Repair"),
        create_test_log("LOG003", "EQ001", "Repair"),
        create_test_log("LOG004", "EQ999", "Calibration"),
    ];

    KnowledgeBase::from_records(equipment, maintenance).unwrap()
}
