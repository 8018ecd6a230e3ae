mod options;

use clap::Parser;
pub use options::{LogLevel, SortField};
use std::path::PathBuf;

use crate::filter::{DateFilter, FilterError};

/// A tool to filter a log file by date, log level, and/or origin module,
/// optionally sorting the surviving records before they are written out
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filter records by level of severity
    #[arg(long = "log_level")]
    pub log_level: Option<LogLevel>,

    /// Filter records by the module that emitted them
    #[arg(long)]
    pub module: Option<String>,

    /// Filter records by date, from a whole year down to the millisecond
    /// (e.g. "2016", "2016-06-07", "2016-06-07 02:12:12,111")
    #[arg(long, value_parser = parse_date_filter)]
    pub date: Option<DateFilter>,

    /// Sort the surviving records by this field
    #[arg(long = "sort_value")]
    pub sort_value: Option<SortField>,

    /// Log file to read
    #[arg(long, default_value = "input_log.txt")]
    pub input: PathBuf,

    /// Path to the output file for surviving lines
    #[arg(short, long, default_value = "outlog.txt")]
    pub output: PathBuf,

    /// Suppress the summary printed after writing the output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_date_filter(raw: &str) -> Result<DateFilter, FilterError> {
    raw.parse()
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
