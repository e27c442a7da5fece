#![deny(unsafe_code)]

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single raw cell as it arrives from the source sheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl CellValue {
    /// Builds a cell from raw text; blank text becomes [`CellValue::Missing`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(value)
        }
    }

    /// Text form used by every classification rule.
    ///
    /// Numbers render in their shortest form (`1.0` reads as `"1"`), `true`
    /// reads as `"yes"` and `false` as an empty cell.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(value) => Cow::Borrowed(value.trim()),
            CellValue::Number(value) => Cow::Owned(format_number(*value)),
            CellValue::Bool(true) => Cow::Borrowed("yes"),
            CellValue::Bool(false) | CellValue::Missing => Cow::Borrowed(""),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        String::new()
    }
}

/// One candidate: header to raw cell. Headers absent from the row read as missing.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(header.into(), value.into());
    }

    /// Builder form of [`Row::insert`], handy for fixtures.
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(header, value);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}

/// Trims, strips a BOM and collapses inner whitespace runs to one space.
///
/// Applied to sheet headers on ingest and to mapped headers on bind.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// A fully materialized sheet: ordered headers and rows in source order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}
