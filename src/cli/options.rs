use clap::ValueEnum;

/// Severity levels accepted by the level filter
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
}

impl LogLevel {
    /// The level exactly as it appears in a log line
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        }
    }
}

/// Record field used to order the output
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum SortField {
    Time,
    #[value(name = "log_level")]
    LogLevel,
    Module,
}
