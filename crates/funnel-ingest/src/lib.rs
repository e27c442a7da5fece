//! Tracker sheet ingestion.
//!
//! Reads CSV/TSV sheet exports and the JSON payload served by the
//! spreadsheet web-app script into a [`funnel_model::Table`].

pub mod csv_table;
pub mod error;
pub mod payload;
pub mod source;
pub mod stats;

pub use csv_table::{COMMA, TAB, read_csv_table, read_delimited};
pub use error::{IngestError, Result};
pub use payload::{SheetPayload, cell_from_json, parse_payload, read_payload_table};
pub use source::{InputFormat, load_table};
pub use stats::{MAX_STATS, StatEntry, TableStats};
