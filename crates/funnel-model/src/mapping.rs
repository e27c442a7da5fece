//! Column mapping: which sheet header feeds each semantic field.
//!
//! Tracker sheets are hand-maintained, so header names drift between
//! teams. The engine never reads a header directly; it asks the mapping
//! for the header bound to a [`SemanticField`] and treats an unbound field
//! as an empty cell on every row.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::table::{CellValue, Row, normalize_header};

/// The twelve fields the funnel engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticField {
    Vendor,
    Technology,
    Experience,
    ScreeningDone,
    ScreeningFeedback,
    RapidFire,
    L1,
    L2,
    ClientRound,
    OfferReleased,
    Onboarded,
    RejectionType,
}

impl SemanticField {
    pub const ALL: [SemanticField; 12] = [
        SemanticField::Vendor,
        SemanticField::Technology,
        SemanticField::Experience,
        SemanticField::ScreeningDone,
        SemanticField::ScreeningFeedback,
        SemanticField::RapidFire,
        SemanticField::L1,
        SemanticField::L2,
        SemanticField::ClientRound,
        SemanticField::OfferReleased,
        SemanticField::Onboarded,
        SemanticField::RejectionType,
    ];

    /// Stable key used in mapping files and `--map` overrides.
    pub fn key(&self) -> &'static str {
        match self {
            SemanticField::Vendor => "vendor",
            SemanticField::Technology => "technology",
            SemanticField::Experience => "experience",
            SemanticField::ScreeningDone => "screeningDone",
            SemanticField::ScreeningFeedback => "screeningFeedback",
            SemanticField::RapidFire => "rapidFire",
            SemanticField::L1 => "l1",
            SemanticField::L2 => "l2",
            SemanticField::ClientRound => "clientRound",
            SemanticField::OfferReleased => "offerReleased",
            SemanticField::Onboarded => "onboarded",
            SemanticField::RejectionType => "rejectionType",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SemanticField::Vendor => "Vendor Name",
            SemanticField::Technology => "Technology",
            SemanticField::Experience => "Experience (Years)",
            SemanticField::ScreeningDone => "Screening Done (Yes/No)",
            SemanticField::ScreeningFeedback => "Screening Feedback",
            SemanticField::RapidFire => "Rapid Fire",
            SemanticField::L1 => "L1 Outcome",
            SemanticField::L2 => "L2 Outcome",
            SemanticField::ClientRound => "Client Round Outcome",
            SemanticField::OfferReleased => "Offer Released",
            SemanticField::Onboarded => "Onboarded",
            SemanticField::RejectionType => "Rejection Type",
        }
    }

    /// Header used by the standard tracker layout.
    pub fn default_header(&self) -> &'static str {
        match self {
            SemanticField::Vendor => "VENDOR",
            SemanticField::Technology => "TECHNOLOGY",
            SemanticField::Experience => "YoE",
            SemanticField::ScreeningDone => "Screening Done",
            SemanticField::ScreeningFeedback => "Feedback",
            SemanticField::RapidFire => "Rapid Fire",
            SemanticField::L1 => "L1",
            SemanticField::L2 => "L2",
            SemanticField::ClientRound => "Client Round",
            SemanticField::OfferReleased => "Offer Released",
            SemanticField::Onboarded => "Onboarded",
            SemanticField::RejectionType => "Rejection Type",
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SemanticField {
    type Err = ModelError;

    /// Accepts the camelCase key or its snake_case spelling, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .flat_map(char::to_lowercase)
            .collect();
        SemanticField::ALL
            .into_iter()
            .find(|field| field.key().to_lowercase() == wanted)
            .ok_or_else(|| ModelError::UnknownField(s.trim().to_string()))
    }
}

/// How a field resolves against the headers of a concrete table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldBinding {
    Bound(String),
    /// Bound to a header the table does not have; reads as empty.
    MissingHeader(String),
    Unbound,
}

/// Semantic field to header assignments. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    bindings: BTreeMap<SemanticField, String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ColumnMapping {
    /// The standard tracker layout.
    pub fn defaults() -> Self {
        let bindings = SemanticField::ALL
            .into_iter()
            .map(|field| (field, field.default_header().to_string()))
            .collect();
        Self { bindings }
    }

    /// A mapping with no field bound.
    pub fn unbound() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Binds `field` to `header`, normalized like sheet headers. A blank
    /// header unbinds the field.
    pub fn bind(&mut self, field: SemanticField, header: impl Into<String>) {
        let header = normalize_header(&header.into());
        if header.is_empty() {
            self.bindings.remove(&field);
        } else {
            self.bindings.insert(field, header);
        }
    }

    #[must_use]
    pub fn with(mut self, field: SemanticField, header: impl Into<String>) -> Self {
        self.bind(field, header);
        self
    }

    pub fn unbind(&mut self, field: SemanticField) {
        self.bindings.remove(&field);
    }

    pub fn header(&self, field: SemanticField) -> Option<&str> {
        self.bindings.get(&field).map(String::as_str)
    }

    /// Text of `field` in `row`; unbound fields and absent headers read as "".
    pub fn value<'r>(&self, row: &'r Row, field: SemanticField) -> Cow<'r, str> {
        self.header(field)
            .and_then(|header| row.get(header))
            .map_or(Cow::Borrowed(""), CellValue::to_text)
    }

    /// Layers stored overrides on top of this mapping; later entries win.
    pub fn merge<I, S>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (SemanticField, S)>,
        S: Into<String>,
    {
        for (field, header) in overrides {
            self.bind(field, header);
        }
    }

    /// Applies a single `field=Header` override.
    pub fn apply_override(&mut self, assignment: &str) -> Result<SemanticField> {
        let (field, header) = assignment
            .split_once('=')
            .ok_or_else(|| ModelError::InvalidOverride(assignment.to_string()))?;
        let field: SemanticField = field.parse()?;
        self.bind(field, header);
        Ok(field)
    }

    /// Resolves every field against the headers of a table.
    pub fn resolve(&self, headers: &[String]) -> Vec<(SemanticField, FieldBinding)> {
        SemanticField::ALL
            .into_iter()
            .map(|field| {
                let binding = match self.header(field) {
                    None => FieldBinding::Unbound,
                    Some(header) if headers.iter().any(|h| h == header) => {
                        FieldBinding::Bound(header.to_string())
                    }
                    Some(header) => FieldBinding::MissingHeader(header.to_string()),
                };
                (field, binding)
            })
            .collect()
    }
}
