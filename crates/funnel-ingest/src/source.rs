//! Input format detection and loading.

use std::path::Path;

use tracing::info;

use funnel_model::Table;

use crate::csv_table::{COMMA, TAB, read_csv_table};
use crate::error::{IngestError, Result};
use crate::payload::read_payload_table;

/// Supported tracker exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    /// Web-app JSON payload.
    Json,
}

impl InputFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("tsv") => Ok(Self::Tsv),
            Some("json") => Ok(Self::Json),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

/// Loads a tracker table from a CSV, TSV or JSON payload file.
pub fn load_table(path: &Path) -> Result<Table> {
    let format = InputFormat::from_path(path)?;
    let table = match format {
        InputFormat::Csv => read_csv_table(path, COMMA)?,
        InputFormat::Tsv => read_csv_table(path, TAB)?,
        InputFormat::Json => read_payload_table(path)?,
    };
    info!(
        path = %path.display(),
        format = format.as_str(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded tracker table"
    );
    Ok(table)
}
