//! JSON payload served by the spreadsheet web-app script.
//!
//! The script answers `{success, headers, rows, rowCount, sheetName}` on
//! success and `{success: false, error}` otherwise. Rows are positional
//! arrays aligned with `headers`.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use funnel_model::{CellValue, Row, Table, normalize_header};

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPayload {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub headers: Option<Vec<Value>>,
    #[serde(default)]
    pub rows: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub row_count: Option<usize>,
    #[serde(default)]
    pub sheet_name: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Converts one JSON cell, trimming strings the way the script does.
pub fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Missing,
        Value::Bool(flag) => CellValue::Bool(*flag),
        Value::Number(number) => number
            .as_f64()
            .map_or(CellValue::Missing, CellValue::Number),
        Value::String(text) => CellValue::text(text.trim()),
        other => CellValue::text(other.to_string()),
    }
}

fn header_from_json(value: &Value) -> String {
    match value {
        Value::String(text) => normalize_header(text),
        Value::Null => String::new(),
        other => normalize_header(&other.to_string()),
    }
}

impl SheetPayload {
    /// Validates the envelope and materializes the table.
    pub fn into_table(self) -> Result<Table> {
        if let Some(message) = self.error.filter(|m| !m.trim().is_empty()) {
            return Err(IngestError::Script { message });
        }
        if !self.success {
            return Err(IngestError::Script {
                message: "request was not successful".to_string(),
            });
        }
        let (Some(raw_headers), Some(raw_rows)) = (self.headers, self.rows) else {
            return Err(IngestError::InvalidPayload {
                message: "missing headers or rows".to_string(),
            });
        };

        let columns: Vec<String> = raw_headers.iter().map(header_from_json).collect();
        let mut table = Table::new(columns.iter().filter(|h| !h.is_empty()).cloned().collect());
        for raw_row in &raw_rows {
            let mut row = Row::new();
            for (idx, header) in columns.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let cell = raw_row.get(idx).map_or(CellValue::Missing, cell_from_json);
                row.insert(header.clone(), cell);
            }
            table.push_row(row);
        }
        if let Some(expected) = self.row_count.filter(|count| *count != table.rows.len()) {
            debug!(expected, actual = table.rows.len(), "payload rowCount mismatch");
        }
        debug!(
            sheet = self.sheet_name.as_deref().unwrap_or("-"),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "read sheet payload"
        );
        Ok(table)
    }
}

pub fn parse_payload(input: &str) -> std::result::Result<SheetPayload, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn read_payload_table(path: &Path) -> Result<Table> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let payload = parse_payload(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    payload.into_table()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_cells_survive() {
        let payload = parse_payload(
            r#"{"success":true,"headers":[" VENDOR ","YoE","Screening Done","Notes"],
                "rows":[["Acme ",4.5,true,null],["Beta"]],"rowCount":2,"sheetName":"Tracker"}"#,
        )
        .unwrap();
        let table = payload.into_table().unwrap();

        assert_eq!(table.headers, vec!["VENDOR", "YoE", "Screening Done", "Notes"]);
        let first = &table.rows[0];
        assert_eq!(first.get("VENDOR"), Some(&CellValue::Text("Acme".to_string())));
        assert_eq!(first.get("YoE"), Some(&CellValue::Number(4.5)));
        assert_eq!(first.get("Screening Done"), Some(&CellValue::Bool(true)));
        assert_eq!(first.get("Notes"), Some(&CellValue::Missing));
        assert_eq!(table.rows[1].get("YoE"), Some(&CellValue::Missing));
    }

    #[test]
    fn script_error_is_reported() {
        let payload = parse_payload(r#"{"success":false,"error":"Sheet not found: X"}"#).unwrap();
        let err = payload.into_table().unwrap_err();
        assert!(matches!(err, IngestError::Script { ref message } if message == "Sheet not found: X"));
    }

    #[test]
    fn missing_rows_is_invalid() {
        let payload = parse_payload(r#"{"success":true,"headers":["A"]}"#).unwrap();
        assert!(matches!(
            payload.into_table(),
            Err(IngestError::InvalidPayload { .. })
        ));
    }
}
