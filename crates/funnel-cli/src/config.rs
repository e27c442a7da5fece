//! Column mapping configuration.
//!
//! Layers, later wins: built-in defaults, then the `[columns]` table of a
//! TOML mapping file, then `--map field=Header` flags. An empty header in
//! the file unbinds the field.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use funnel_model::{ColumnMapping, SemanticField};

/// On-disk mapping file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
}

impl MappingFile {
    /// A file binding every field to its default header.
    pub fn starter() -> Self {
        let columns = SemanticField::ALL
            .into_iter()
            .map(|field| (field.key().to_string(), field.default_header().to_string()))
            .collect();
        Self { columns }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse mapping file")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize mapping file")
    }

    /// Validated `(field, header)` pairs, one per field.
    ///
    /// Two spellings of the same field (`screening_done` and
    /// `screeningDone`) are rejected.
    pub fn bindings(&self) -> Result<Vec<(SemanticField, String)>> {
        let mut seen: BTreeMap<SemanticField, &str> = BTreeMap::new();
        let mut bindings = Vec::with_capacity(self.columns.len());
        for (key, header) in &self.columns {
            let field = key
                .parse::<SemanticField>()
                .with_context(|| format!("mapping entry `{key}`"))?;
            if let Some(previous) = seen.insert(field, key) {
                bail!("mapping entries `{previous}` and `{key}` both bind field {field}");
            }
            bindings.push((field, header.clone()));
        }
        Ok(bindings)
    }
}

pub fn load_mapping_file(path: &Path) -> Result<MappingFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read mapping file {}", path.display()))?;
    MappingFile::parse(&content).with_context(|| format!("in {}", path.display()))
}

/// Builds the effective mapping from the optional file and CLI overrides.
pub fn resolve_mapping(file: Option<&Path>, overrides: &[String]) -> Result<ColumnMapping> {
    let mut mapping = ColumnMapping::defaults();
    if let Some(path) = file {
        let bindings = load_mapping_file(path)?
            .bindings()
            .with_context(|| format!("in {}", path.display()))?;
        info!(path = %path.display(), entries = bindings.len(), "loaded column mapping");
        mapping.merge(bindings);
    }
    for assignment in overrides {
        let field = mapping
            .apply_override(assignment)
            .with_context(|| format!("--map {assignment}"))?;
        debug!(field = %field, header = mapping.header(field).unwrap_or(""), "column override");
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_round_trips_to_defaults() {
        let text = MappingFile::starter().to_toml().unwrap();
        let parsed = MappingFile::parse(&text).unwrap();
        let mut mapping = ColumnMapping::unbound();
        mapping.merge(parsed.bindings().unwrap());
        assert_eq!(mapping, ColumnMapping::defaults());
    }

    #[test]
    fn missing_columns_table_is_empty() {
        let parsed = MappingFile::parse("").unwrap();
        assert!(parsed.columns.is_empty());
    }

    #[test]
    fn two_spellings_of_one_field_are_rejected() {
        let content = "[columns]\nscreening_done = \"First\"\nscreeningDone = \"Second\"\n";
        let parsed = MappingFile::parse(content).unwrap();
        let err = parsed.bindings().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("both bind field screeningDone"), "{message}");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let parsed = MappingFile::parse("[columns]\nsalary = \"CTC\"\n").unwrap();
        let err = parsed.bindings().unwrap_err();
        assert!(format!("{err:#}").contains("unknown field: salary"));
    }
}
