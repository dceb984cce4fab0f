//! Integration tests for the knowledge base
//!
//! These tests load realistic equipment and maintenance files from a
//! temporary data directory and exercise listing, search, info and export
//! end to end through the public API.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use utility_knowledge::config::Config;
use utility_knowledge::{Error, ExportFormat, ExportRecord, KnowledgeBase};

const INVENTORY: &str = "\
equipment_id,equipment_type,location,manufacturer,model,installed_on,status,last_maintenance
EQ001,Pump,Station A,Acme Industrial,P-100,2019-03-01,Active,2024-01-15
EQ002,Transformer,Substation B,Volt Co,T-9,07/20/2015,Under Repair,2023-11-02
EQ003,Valve,Station A,FlowTech,V-2,2020/06/11,Active,15 Jan 2024
";

const LOGS: &str = r#"[
  {"log_id": "LOG001", "equipment_id": "EQ001", "maintenance_type": "Inspection",
   "date": "2024-01-15", "technician": "R. Patel", "description": "Quarterly inspection",
   "status": "Completed", "next_scheduled": "2024-04-15", "parts_used": [], "cost": 150.0},
  {"log_id": "LOG002", "equipment_id": "EQ002", "maintenance_type": "Repair",
   "date": "2023-11-02", "technician": "L. Chen", "description": "Replaced fan, seals",
   "status": "In Progress", "next_scheduled": "", "parts_used": ["Fan", "Seal"], "cost": 2375.5},
  {"log_id": "LOG003", "equipment_id": "EQ001", "maintenance_type": "Repair",
   "maintenance_date": "2023-08-09", "technician": "A. Jones", "description": "Impeller",
   "status": "Completed", "cost": "640.00"},
  {"log_id": "LOG004", "equipment_id": "EQ099", "maintenance_type": "Inspection",
   "date": "2024-02-01", "technician": "M. Okafor", "description": "Orphaned log",
   "status": "Cancelled", "cost": 0}
]"#;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_sources(dir: &Path, inventory: &str, logs: &str) {
    fs::write(dir.join("equipment_inventory.csv"), inventory).unwrap();
    fs::write(dir.join("maintenance_logs.json"), logs).unwrap();
}

fn load_from(dir: &Path) -> utility_knowledge::Result<KnowledgeBase> {
    let mut config = Config::default();
    config.data.data_dir = dir.to_path_buf();
    KnowledgeBase::load(&config).map(|(kb, _)| kb)
}

fn load_sample() -> (TempDir, KnowledgeBase) {
    let temp_dir = TempDir::new().unwrap();
    write_sources(temp_dir.path(), INVENTORY, LOGS);
    let kb = load_from(temp_dir.path()).unwrap();
    (temp_dir, kb)
}

#[test]
fn test_load_normalizes_both_sources() {
    let (_dir, kb) = load_sample();

    let equipment = kb.all_equipment().unwrap();
    assert_eq!(equipment.len(), 3);
    assert_eq!(equipment[1].installation_date, ymd(2015, 7, 20));
    assert_eq!(equipment[2].last_maintenance, ymd(2024, 1, 15));

    let logs = kb.all_maintenance().unwrap();
    assert_eq!(logs.len(), 4);
    assert_eq!(logs[1].next_scheduled, None);
    assert_eq!(logs[2].maintenance_date, ymd(2023, 8, 9));
    assert_eq!(logs[2].cost, 640.0);
    assert_eq!(logs[2].parts_used, None);
}

#[test]
fn test_single_equipment_without_logs() {
    let temp_dir = TempDir::new().unwrap();
    write_sources(
        temp_dir.path(),
        "equipment_id,equipment_type,location,manufacturer,model,installation_date,status,last_maintenance\n\
         EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active,2024-01-15\n",
        "[]",
    );
    let kb = load_from(temp_dir.path()).unwrap();

    assert!(kb.all_maintenance().unwrap_err().is_not_found());

    let results = kb.search("EQ001").unwrap();
    assert_eq!(results.equipment_matches.len(), 1);
    assert!(results.maintenance_matches.is_empty());
}

#[test]
fn test_info_lists_shared_location_once() {
    let (_dir, kb) = load_sample();
    let info = kb.info();

    assert_eq!(info.unique_locations, ["Station A", "Substation B"]);
    assert_eq!(info.unique_equipment_models.len(), 3);
    assert_eq!(info.maintenance_types, ["Inspection", "Repair"]);
}

#[test]
fn test_search_across_collections() {
    let (_dir, kb) = load_sample();

    let results = kb.search("repair").unwrap();
    let logs: Vec<&str> = results
        .maintenance_matches
        .iter()
        .map(|m| m.log_id.as_str())
        .collect();
    assert_eq!(logs, ["LOG002", "LOG003"]);

    assert!(kb.search("boiler").unwrap_err().is_not_found());
}

#[test]
fn test_json_export_round_trip() {
    let (_dir, kb) = load_sample();
    let payload = kb.export("json").unwrap();
    assert_eq!(payload.format, ExportFormat::Json);

    let records: Vec<ExportRecord> = serde_json::from_slice(&payload.bytes).unwrap();
    let pairs: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.equipment_id.as_str(), r.log_id.as_str()))
        .collect();
    // EQ003 has no logs and LOG004 has no equipment
    assert_eq!(pairs, [("EQ001", "LOG001"), ("EQ001", "LOG003"), ("EQ002", "LOG002")]);

    for record in records {
        let (equipment, log) = record.into_parts().unwrap();
        assert_eq!(&equipment, kb.equipment(&equipment.equipment_id).unwrap());
        assert!(kb.maintenance_for(&equipment.equipment_id).contains(&&log));
    }
}

#[test]
fn test_csv_export_to_file() {
    let (dir, kb) = load_sample();
    let payload = kb.export("csv").unwrap();
    assert_eq!(payload.file_name(), "export.csv");

    let path = dir.path().join(payload.file_name());
    fs::write(&path, &payload.bytes).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.headers().unwrap().len(), 17);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][15], "[]");
    assert_eq!(&rows[2][13], "In Progress");
    assert_eq!(&rows[2][14], "");
    assert_eq!(&rows[2][15], r#"["Fan","Seal"]"#);
}

#[test]
fn test_unsupported_export_format() {
    let (_dir, kb) = load_sample();

    let error = kb.export("xml").unwrap_err();
    assert!(matches!(&error, Error::InvalidFormat { format } if format == "xml"));
    assert!(error.is_client_error());
}

#[test]
fn test_invalid_record_aborts_load() {
    let temp_dir = TempDir::new().unwrap();
    write_sources(
        temp_dir.path(),
        &format!("{}EQ004,Meter,Station C,NA,M-1,2021-06-30,Active,2024-02-20\n", INVENTORY),
        LOGS,
    );

    let error = load_from(temp_dir.path()).unwrap_err();
    match error {
        Error::Validation { record, field, .. } => {
            assert_eq!(record, "equipment row 3");
            assert_eq!(field, "manufacturer");
        }
        other => panic!("unexpected error: {other}"),
    }
}
