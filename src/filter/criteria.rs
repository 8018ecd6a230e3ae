use crate::filter::date::DateFilter;
use crate::parser::LogRecord;

/// Represents filtering criteria for log records
#[derive(Default, Clone)]
pub struct FilterCriteria {
    level: Option<String>,
    module: Option<String>,
    date: Option<DateFilter>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Option<impl Into<String>>) -> Self {
        self.level = level.map(|l| l.into());
        self
    }

    pub fn with_module(mut self, module: Option<impl Into<String>>) -> Self {
        self.module = module.map(|m| m.into());
        self
    }

    pub fn with_date(mut self, date: Option<DateFilter>) -> Self {
        self.date = date;
        self
    }

    /// Checks whether a record satisfies every configured criterion.
    /// Level and module are compared for exact equality; a record missing
    /// the field a criterion inspects does not match it.
    pub fn matches(&self, record: &LogRecord) -> bool {
        let level_match = self
            .level
            .as_ref()
            .map(|filter| record.level.as_deref() == Some(filter.as_str()))
            .unwrap_or(true);

        let module_match = self
            .module
            .as_ref()
            .map(|filter| record.module.as_deref() == Some(filter.as_str()))
            .unwrap_or(true);

        let date_match = self
            .date
            .as_ref()
            .map(|filter| filter.matches(record))
            .unwrap_or(true);

        level_match && module_match && date_match
    }
}
