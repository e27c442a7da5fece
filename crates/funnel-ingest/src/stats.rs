//! Quick table profile shown by `funnel inspect`.

use serde::Serialize;

use funnel_model::{CellValue, Table};

/// Maximum number of entries, row and column totals included.
pub const MAX_STATS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableStats {
    pub total_rows: usize,
    pub total_columns: usize,
    pub entries: Vec<StatEntry>,
}

impl TableStats {
    /// Counts rows and columns and averages the mostly-numeric columns.
    ///
    /// A column is averaged when more than half of the rows parse as a
    /// number and the sum is non-zero.
    pub fn from_table(table: &Table) -> Self {
        let total_rows = table.rows.len();
        let total_columns = table.headers.len();
        let mut entries = vec![
            StatEntry {
                label: "Total Rows".to_string(),
                value: total_rows.to_string(),
            },
            StatEntry {
                label: "Total Columns".to_string(),
                value: total_columns.to_string(),
            },
        ];

        for header in &table.headers {
            if entries.len() >= MAX_STATS {
                break;
            }
            let numbers: Vec<f64> = table
                .rows
                .iter()
                .filter_map(|row| row.get(header).and_then(numeric_cell))
                .collect();
            if numbers.len() * 2 <= total_rows {
                continue;
            }
            let sum: f64 = numbers.iter().sum();
            if sum == 0.0 {
                continue;
            }
            let average = sum / numbers.len() as f64;
            entries.push(StatEntry {
                label: format!("Avg {header}"),
                value: format!("{average:.2}"),
            });
        }

        Self {
            total_rows,
            total_columns,
            entries,
        }
    }
}

fn numeric_cell(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(text) => leading_number(text),
        CellValue::Bool(_) | CellValue::Missing => None,
    }
}

/// Parses the longest numeric prefix, so `"4 yrs"` reads as 4.
fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    trimmed[..end].trim_end_matches('.').parse().ok()
}
