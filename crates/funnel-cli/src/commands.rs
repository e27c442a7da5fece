use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use funnel_cli::config::{MappingFile, resolve_mapping};
use funnel_cli::report::{fields_table, inspect_tables, print_report};
use funnel_core::calculate;
use funnel_ingest::{TableStats, load_table};
use funnel_model::{FieldBinding, SemanticField, Table};

use crate::cli::{FieldsArgs, InputArgs, ReportArgs, ReportFormatArg};

fn load_input(path: &Path) -> Result<Table> {
    load_table(path).with_context(|| format!("load tracker {}", path.display()))
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let input = &args.input;
    let span = info_span!("report", input = %input.input.display());
    let _guard = span.enter();

    let mapping = resolve_mapping(input.mapping.as_deref(), &input.map)?;
    let table = load_input(&input.input)?;
    warn_missing_headers(&mapping.resolve(&table.headers));
    let result = calculate(&table.rows, &mapping);

    match args.format {
        ReportFormatArg::Table => print_report(&result),
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(&result).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_inspect(args: &InputArgs) -> Result<()> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();

    let mapping = resolve_mapping(args.mapping.as_deref(), &args.map)?;
    let table = load_input(&args.input)?;
    let bindings = mapping.resolve(&table.headers);
    warn_missing_headers(&bindings);
    let stats = TableStats::from_table(&table);

    for (title, rendered) in inspect_tables(&table.headers, &stats, &bindings) {
        println!("{title}:");
        println!("{rendered}");
        println!();
    }
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    if args.toml {
        print!("{}", MappingFile::starter().to_toml()?);
    } else {
        println!("{}", fields_table());
    }
    Ok(())
}

fn warn_missing_headers(bindings: &[(SemanticField, FieldBinding)]) {
    for (field, binding) in bindings {
        if let FieldBinding::MissingHeader(header) = binding {
            warn!(field = %field, header = %header, "mapped header not found in table, field reads as empty");
        }
    }
}
