use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;

mod entities;

pub use entities::{LogRecord, TIMESTAMP_FORMAT};

/// Pattern for one log line: an optional `date time,millis - ` prefix, then a
/// severity token and a module token, then the message. The two tokens match
/// lazily, so each one stops at the first ` - ` separator after it.
static LOG_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}),(\d{3}) - )?(.+?) - (.+?) - .+")
        .expect("valid log line regex")
});

/// Parses a whole log file into records, one per line.
///
/// The file is read into memory in one go and split into lines with their
/// terminators still attached, so concatenating the records' `raw_line`
/// fields reproduces the input byte for byte.
pub fn parse_log_file(path: impl AsRef<Path>) -> io::Result<Vec<LogRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_inclusive('\n').map(parse_log_line).collect())
}

/// Parses a single line. Never fails: a line that does not fit the pattern
/// (fewer than two ` - ` separators, or nothing after the second one) yields
/// a record with every metadata field absent.
pub fn parse_log_line(line: &str) -> LogRecord {
    let Some(caps) = LOG_LINE_RE.captures(line) else {
        return LogRecord {
            raw_line: line.to_string(),
            timestamp: None,
            level: None,
            module: None,
        };
    };

    // The three-digit fraction is read as milliseconds. Digits that do not
    // form a real calendar date leave the timestamp absent.
    let timestamp = match (caps.get(2), caps.get(3)) {
        (Some(stamp), Some(millis)) => NaiveDateTime::parse_from_str(
            &format!("{},{}", stamp.as_str(), millis.as_str()),
            TIMESTAMP_FORMAT,
        )
        .ok(),
        _ => None,
    };

    LogRecord {
        raw_line: line.to_string(),
        timestamp,
        level: caps.get(4).map(|m| m.as_str().to_string()),
        module: caps.get(5).map(|m| m.as_str().to_string()),
    }
}
