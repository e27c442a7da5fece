//! Library side of the `funnel` command-line tool.

pub mod config;
pub mod logging;
pub mod report;
