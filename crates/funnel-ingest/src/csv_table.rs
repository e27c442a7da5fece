use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use funnel_model::{CellValue, Row, Table, normalize_header};

use crate::error::{IngestError, Result};

pub const COMMA: u8 = b',';
pub const TAB: u8 = b'\t';

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::text(raw.trim().trim_matches('\u{feff}'))
}

/// Reads a delimited sheet export from any reader.
///
/// The first non-blank record holds the headers; blank records before it
/// are dropped. Later blank records stay as rows of missing cells, short
/// records are padded with missing cells, and columns without a header are
/// ignored.
pub fn read_delimited<R: Read>(
    reader: R,
    delimiter: u8,
) -> std::result::Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut table = Table::default();
    let mut leading_blank = 0usize;
    for record in reader.records() {
        let record = record?;
        if headers.is_none() {
            if record.iter().all(|value| value.trim().is_empty()) {
                leading_blank += 1;
                continue;
            }
            let parsed: Vec<String> = record.iter().map(normalize_header).collect();
            table.headers = parsed.iter().filter(|h| !h.is_empty()).cloned().collect();
            warn_on_duplicates(&table.headers);
            headers = Some(parsed);
            continue;
        }
        let columns = headers.as_deref().unwrap_or_default();
        let mut row = Row::new();
        for (idx, header) in columns.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = record.get(idx).map_or(CellValue::Missing, normalize_cell);
            row.insert(header.clone(), cell);
        }
        table.push_row(row);
    }
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        leading_blank,
        "read delimited table"
    );
    Ok(table)
}

fn warn_on_duplicates(headers: &[String]) {
    for (idx, header) in headers.iter().enumerate() {
        if headers[..idx].contains(header) {
            warn!(header = %header, "duplicate column header, the last column wins");
        }
    }
}

pub fn read_csv_table(path: &Path, delimiter: u8) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    read_delimited(file, delimiter).map_err(|e| IngestError::csv(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_cells_are_normalized() {
        let input = "\u{feff}VENDOR , Client  Round\nAcme,Client Select\n";
        let table = read_delimited(input.as_bytes(), COMMA).unwrap();
        assert_eq!(table.headers, vec!["VENDOR", "Client Round"]);
    }

    #[test]
    fn leading_blank_rows_are_dropped_and_short_rows_padded() {
        let input = "\n,,\nVENDOR,L1,L2\nAcme,Select\n,,\nBeta, NA ,Reject\n";
        let table = read_delimited(input.as_bytes(), COMMA).unwrap();

        assert_eq!(table.headers, vec!["VENDOR", "L1", "L2"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].get("L2"), Some(&CellValue::Missing));
        assert!(table.rows[1].cells.values().all(CellValue::is_missing));
        assert_eq!(table.rows[1].cells.len(), 3);
        assert_eq!(
            table.rows[2].get("L1"),
            Some(&CellValue::Text("NA".to_string()))
        );
    }

    #[test]
    fn tab_delimited_input() {
        let input = "VENDOR\tYoE\nAcme\t4\n";
        let table = read_delimited(input.as_bytes(), TAB).unwrap();
        assert_eq!(
            table.rows[0].get("YoE"),
            Some(&CellValue::Text("4".to_string()))
        );
    }

    #[test]
    fn unnamed_columns_are_ignored() {
        let input = "VENDOR,,L1\nAcme,stray,Select\n";
        let table = read_delimited(input.as_bytes(), COMMA).unwrap();
        assert_eq!(table.headers, vec!["VENDOR", "L1"]);
        assert_eq!(table.rows[0].cells.len(), 2);
    }
}
