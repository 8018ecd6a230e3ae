pub mod cli;
pub mod filter;
pub mod parser;

use colored::Colorize;

pub use cli::{Cli, LogLevel, SortField, cli_parse};
pub use filter::{DateFilter, FilterCriteria, FilterError, process};
pub use parser::{LogRecord, parse_log_file, parse_log_line};

fn write_output_file(
    path: &std::path::Path,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write output file '{}': {}", path.display(), e).into())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli_parse();

    let records = parse_log_file(&cli.input)
        .map_err(|e| format!("Failed to read log file '{}': {}", cli.input.display(), e))?;
    let total = records.len();

    let criteria = FilterCriteria::new()
        .with_level(cli.log_level.map(LogLevel::as_str))
        .with_module(cli.module)
        .with_date(cli.date);

    let survivors = process(records, cli.sort_value, &criteria);

    // Survivors carry their line terminators, so plain concatenation
    // reproduces them exactly as they appeared in the input.
    let content: String = survivors.iter().map(|r| r.raw_line.as_str()).collect();
    write_output_file(&cli.output, &content)?;

    if !cli.quiet {
        println!(
            "Wrote {} of {} log lines to '{}'",
            survivors.len().to_string().green().bold(),
            total,
            cli.output.display()
        );
    }

    Ok(())
}
