//! File-level ingestion tests.

use std::fs;

use funnel_ingest::{IngestError, InputFormat, TableStats, load_table};
use funnel_model::CellValue;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn format_follows_extension() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        InputFormat::from_path(&dir.path().join("tracker.CSV")).unwrap(),
        InputFormat::Csv
    );
    assert_eq!(
        InputFormat::from_path(&dir.path().join("tracker.tsv")).unwrap(),
        InputFormat::Tsv
    );
    let err = load_table(&dir.path().join("tracker.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn loads_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "tracker.csv",
        "VENDOR,TECHNOLOGY,YoE,Screening Done,Feedback\n\
         Acme,Rust,4,Yes,Select\n\
         ,,,,\n\
         Beta,Go,7,No,\n",
    );
    let table = load_table(&path).unwrap();

    assert_eq!(table.headers.len(), 5);
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows[1].cells.values().all(CellValue::is_missing));
    assert_eq!(table.rows[2].get("Feedback"), Some(&CellValue::Missing));

    let stats = TableStats::from_table(&table);
    assert_eq!(stats.entries[2].label, "Avg YoE");
    assert_eq!(stats.entries[2].value, "5.50");
}

#[test]
fn loads_tsv_export() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tracker.tsv", "VENDOR\tL1\nAcme\tL1 Select\n");
    let table = load_table(&path).unwrap();
    assert_eq!(
        table.rows[0].get("L1"),
        Some(&CellValue::Text("L1 Select".to_string()))
    );
}

#[test]
fn loads_json_payload() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "tracker.json",
        r#"{"success":true,"headers":["VENDOR","Offer Released"],"rows":[["Acme",true]],"rowCount":1,"sheetName":"Tracker"}"#,
    );
    let table = load_table(&path).unwrap();
    assert_eq!(
        table.rows[0].get("Offer Released"),
        Some(&CellValue::Bool(true))
    );
}

#[test]
fn reports_script_failures_and_bad_json() {
    let dir = TempDir::new().unwrap();
    let failed = write(
        &dir,
        "failed.json",
        r#"{"success":false,"error":"Sheet not found"}"#,
    );
    assert!(matches!(
        load_table(&failed),
        Err(IngestError::Script { .. })
    ));

    let broken = write(&dir, "broken.json", "{not json");
    assert!(matches!(load_table(&broken), Err(IngestError::Json { .. })));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn csv_and_json_keep_the_same_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "tracker.csv", "VENDOR,Screening Done\nAcme,Yes\n,\nBeta,No\n");
    let json = write(
        &dir,
        "tracker.json",
        r#"{"success":true,"headers":["VENDOR","Screening Done"],"rows":[["Acme","Yes"],["",""],["Beta","No"]]}"#,
    );

    let from_csv = load_table(&csv).unwrap();
    let from_json = load_table(&json).unwrap();
    assert_eq!(from_csv, from_json);
    assert_eq!(from_csv.rows.len(), 3);
}
