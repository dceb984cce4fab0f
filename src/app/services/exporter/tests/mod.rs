//! Shared test utilities and fixtures for exporter tests

use crate::app::models::{Equipment, MaintenanceLog};
use crate::app::services::knowledge_base::KnowledgeBase;
use chrono::NaiveDate;


pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_test_equipment(equipment_id: &str, equipment_type: &str) -> Equipment {
    Equipment::new(
        equipment_id.to_string(),
        equipment_type.to_string(),
        "Station A".to_string(),
        "Acme".to_string(),
        "M-1".to_string(),
        ymd(2018, 5, 20),
        "Active".to_string(),
        ymd(2024, 1, 5),
    )
    .unwrap()
}

pub fn create_test_log(
    log_id: &str,
    equipment_id: &str,
    next_scheduled: Option<NaiveDate>,
    parts_used: Option<Vec<&str>>,
) -> MaintenanceLog {
    MaintenanceLog::new(
        log_id.to_string(),
        equipment_id.to_string(),
        "Repair".to_string(),
        ymd(2024, 1, 5),
        "L. Chen".to_string(),
        "Replaced seal, checked pressure".to_string(),
        "Completed".to_string(),
        next_scheduled,
        parts_used.map(|parts| parts.into_iter().map(str::to_string).collect()),
        240.5,
    )
    .unwrap()
}

/// EQ001 has two logs (listed out of order with EQ002's), EQ002 one, EQ003
/// none; LOG9 references unknown equipment.
pub fn create_export_knowledge_base() -> KnowledgeBase {
    KnowledgeBase::from_records(
        vec![
            create_test_equipment("EQ001", "Pump"),
            create_test_equipment("EQ002", "Valve"),
            create_test_equipment("EQ003", "Meter"),
        ],
        vec![
            create_test_log("LOG2", "EQ002", None, None),
            create_test_log("LOG1", "EQ001", Some(ymd(2024, 7, 5)), Some(vec!["Seal", "O-ring"])),
            create_test_log("LOG9", "EQ404", None, None),
            create_test_log("LOG3", "EQ001", None, Some(vec![])),
        ],
    )
    .unwrap()
}
