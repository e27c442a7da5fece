//! CLI argument definitions for the funnel reporter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "funnel",
    version,
    about = "Recruitment funnel reports from hiring tracker sheets",
    long_about = "Classify every candidate row of a hiring tracker and aggregate\n\
                  screening, interview-stage, offer and vendor metrics.\n\n\
                  Reads CSV/TSV sheet exports and the JSON payload served by the\n\
                  spreadsheet web-app script."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate funnel metrics for a tracker sheet.
    Report(ReportArgs),

    /// Show headers, table statistics and how each field binds.
    Inspect(InputArgs),

    /// List the semantic fields and their default headers.
    Fields(FieldsArgs),
}

/// Input table plus the column mapping layers.
#[derive(Args)]
pub struct InputArgs {
    /// Tracker export (.csv, .tsv or .json web-app payload).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML file with a [columns] table of field = "Header" entries.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Override one binding, e.g. --map vendor="Vendor Name". Repeatable.
    #[arg(long = "map", value_name = "FIELD=HEADER")]
    pub map: Vec<String>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format for the report.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// Print a starter mapping file instead of a table.
    #[arg(long = "toml")]
    pub toml: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
