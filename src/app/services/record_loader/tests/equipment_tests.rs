//! Tests for equipment inventory loading

use super::*;
use crate::Error;
use crate::app::services::record_loader::{equipment_from_frame, load_equipment};
use crate::config::LoaderConfig;
use chrono::NaiveDate;
use polars::prelude::*;
use tempfile::TempDir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expect_validation(error: Error) -> (String, String) {
    match error {
        Error::Validation { record, field, .. } => (record, field),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_load_standard_inventory() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &[
            "EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active,2024-01-15",
            "EQ002,Transformer,Substation B,Volt Co,T-9,2015-07-20,Under Repair,2023-11-02",
        ],
    )
    .unwrap();

    let equipment = load_equipment(&path, &LoaderConfig::default()).unwrap();

    assert_eq!(equipment.len(), 2);
    assert_eq!(equipment[0].equipment_id, "EQ001");
    assert_eq!(equipment[0].installation_date, ymd(2019, 3, 1));
    assert_eq!(equipment[1].status, "Under Repair");
    assert_eq!(equipment[1].last_maintenance, ymd(2023, 11, 2));
}

#[test]
fn test_alternate_header_is_renamed() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        "equipment_id,equipment_type,location,manufacturer,model,installed_on,status,last_maintenance",
        &["EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active,2024-01-15"],
    )
    .unwrap();

    let equipment = load_equipment(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(equipment[0].installation_date, ymd(2019, 3, 1));
}

#[test]
fn test_existing_target_column_wins_over_rename() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        &format!("{},installed_on", EQUIPMENT_HEADER),
        &["EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active,2024-01-15,1999-01-01"],
    )
    .unwrap();

    let equipment = load_equipment(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(equipment[0].installation_date, ymd(2019, 3, 1));
}

#[test]
fn test_mixed_date_formats_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &[
            "EQ001,Pump,Station A,Acme,P-100, 2019-03-01 ,Active,01/15/2024",
            "EQ002,Pump,Station A,Acme,P-100,2019/03/02,Active,15 Jan 2024",
            r#"EQ003,Pump,Station A,Acme,P-100,2019-03-03 08:00:00,Active,"Jan 15, 2024""#,
        ],
    )
    .unwrap();

    let equipment = load_equipment(&path, &LoaderConfig::default()).unwrap();

    assert_eq!(equipment[0].installation_date, ymd(2019, 3, 1));
    assert_eq!(equipment[1].installation_date, ymd(2019, 3, 2));
    assert_eq!(equipment[2].installation_date, ymd(2019, 3, 3));
    for item in &equipment {
        assert_eq!(item.last_maintenance, ymd(2024, 1, 15));
    }
}

#[test]
fn test_missing_marker_fails_row_with_index() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &[
            "EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active,2024-01-15",
            "EQ002,Pump,Station A,NA,P-100,2019-03-01,Active,2024-01-15",
        ],
    )
    .unwrap();

    let error = load_equipment(&path, &LoaderConfig::default()).unwrap_err();
    let (record, field) = expect_validation(error);
    assert_eq!(record, "equipment row 1");
    assert_eq!(field, "manufacturer");
}

#[test]
fn test_empty_cell_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &["EQ001,Pump,,Acme,P-100,2019-03-01,Active,2024-01-15"],
    )
    .unwrap();

    let (_, field) = expect_validation(load_equipment(&path, &LoaderConfig::default()).unwrap_err());
    assert_eq!(field, "location");
}

#[test]
fn test_unparseable_date_is_reported_as_missing_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &["EQ001,Pump,Station A,Acme,P-100,someday,Active,2024-01-15"],
    )
    .unwrap();

    let (record, field) =
        expect_validation(load_equipment(&path, &LoaderConfig::default()).unwrap_err());
    assert_eq!(record, "equipment row 0");
    assert_eq!(field, "installation_date");
}

#[test]
fn test_duplicate_identifier_aborts_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &[
            "EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active,2024-01-15",
            "EQ001,Valve,Station B,Acme,V-2,2020-03-01,Active,2024-02-15",
        ],
    )
    .unwrap();

    let error = load_equipment(&path, &LoaderConfig::default()).unwrap_err();
    assert!(error.to_string().contains("duplicate identifier 'EQ001'"));
    let (record, field) = expect_validation(error);
    assert_eq!(record, "equipment row 1");
    assert_eq!(field, "equipment_id");
}

#[test]
fn test_missing_column_fails_every_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        "equipment_id,equipment_type,location,manufacturer,model,installation_date,status",
        &["EQ001,Pump,Station A,Acme,P-100,2019-03-01,Active"],
    )
    .unwrap();

    let (_, field) = expect_validation(load_equipment(&path, &LoaderConfig::default()).unwrap_err());
    assert_eq!(field, "last_maintenance");
}

#[test]
fn test_header_only_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(temp_dir.path(), EQUIPMENT_HEADER, &[]).unwrap();

    let equipment = load_equipment(&path, &LoaderConfig::default()).unwrap();
    assert!(equipment.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.csv");

    let error = load_equipment(&path, &LoaderConfig::default()).unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_custom_missing_markers() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_equipment_csv(
        temp_dir.path(),
        EQUIPMENT_HEADER,
        &["EQ001,Pump,Station A,NA,P-100,2019-03-01,Active,2024-01-15"],
    )
    .unwrap();

    // "NA" is a real manufacturer name once it is no longer a marker
    let options = LoaderConfig {
        missing_values: vec![String::new()],
        ..LoaderConfig::default()
    };

    let equipment = load_equipment(&path, &options).unwrap();
    assert_eq!(equipment[0].manufacturer, "NA");
}

fn inventory_frame(last_maintenance: Option<&str>) -> DataFrame {
    df!(
        "equipment_id" => &["EQ010"],
        "equipment_type" => &["Meter"],
        "location" => &["Station C"],
        "manufacturer" => &["Gauge Ltd"],
        "model" => &[4200i32],
        "installed_on" => &["2021-06-30"],
        "status" => &["Active"],
        "last_maintenance" => &[last_maintenance],
        "notes" => &["ignored"]
    )
    .unwrap()
}

#[test]
fn test_frame_with_numeric_column_and_extras() {
    let error = equipment_from_frame(inventory_frame(None), &LoaderConfig::default()).unwrap_err();
    let (_, field) = expect_validation(error);
    assert_eq!(field, "last_maintenance");

    let equipment =
        equipment_from_frame(inventory_frame(Some("2024-05-01")), &LoaderConfig::default())
            .unwrap();
    assert_eq!(equipment[0].model, "4200");
    assert_eq!(equipment[0].installation_date, ymd(2021, 6, 30));
    assert_eq!(equipment[0].last_maintenance, ymd(2024, 5, 1));
}
