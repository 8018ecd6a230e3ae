use chrono::NaiveDateTime;

/// Canonical layout of the leading timestamp field, `2016-06-07 02:12:12,111`
/// style. The `%3f` fraction reads and writes the three-digit field as
/// milliseconds, so a parsed timestamp renders back to the exact digits it
/// was built from.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// One log line with whatever metadata the pattern could extract from it.
///
/// Every field besides `raw_line` is independently optional: a line may carry
/// level and module without a timestamp, or nothing at all. Records are built
/// once at parse time and never mutated.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// The original line, terminator included, reproduced verbatim on output.
    pub raw_line: String,
    /// Leading timestamp; absent when the line has none or the digits do not
    /// form a real calendar date.
    pub timestamp: Option<NaiveDateTime>,
    /// Severity token (e.g. "DEBUG", "INFO", "WARNING"), verbatim.
    pub level: Option<String>,
    /// Origin-module token, verbatim.
    pub module: Option<String>,
}

impl LogRecord {
    /// Renders the timestamp back into its on-disk form, `None` when the
    /// record has no timestamp.
    pub fn formatted_timestamp(&self) -> Option<String> {
        self.timestamp
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }
}
