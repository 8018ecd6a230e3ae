use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::filter::error::FilterError;
use crate::parser::LogRecord;

/// Shape of an acceptable date filter, from a bare year down to milliseconds
static DATE_FILTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}(-\d{2}(-\d{2}( \d{2}(:\d{2}(:\d{2}(,\d{3})?)?)?)?)?)?$")
        .expect("valid date filter regex")
});

/// A validated date filter that matches timestamps by prefix.
///
/// The filter text must be a leading portion of the canonical timestamp
/// rendering, truncated only at a component boundary. A record matches when
/// its formatted timestamp starts with the filter text, so '2016-06' covers
/// the whole month and '2016-06-07 02' a single hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter(String);

impl DateFilter {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the record's timestamp falls under this filter.
    /// Records without a timestamp never match.
    pub fn matches(&self, record: &LogRecord) -> bool {
        record
            .formatted_timestamp()
            .is_some_and(|formatted| formatted.starts_with(&self.0))
    }
}

impl FromStr for DateFilter {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if DATE_FILTER_RE.is_match(raw) {
            Ok(DateFilter(raw.to_string()))
        } else {
            Err(FilterError::InvalidDateFilter(raw.to_string()))
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_log_line;

    #[test]
    fn test_accepts_every_truncation_point() {
        for raw in [
            "2016",
            "2016-06",
            "2016-06-07",
            "2016-06-07 02",
            "2016-06-07 02:12",
            "2016-06-07 02:12:12",
            "2016-06-07 02:12:12,111",
        ] {
            assert!(raw.parse::<DateFilter>().is_ok(), "should accept '{raw}'");
        }
    }

    #[test]
    fn test_rejects_malformed_filters() {
        for raw in [
            "",
            "16",
            "2016-",
            "2016-6",
            "2016-06-",
            "2016-06-07 2",
            "2016-06-07T02",
            "2016-06-07 02:12:12,11",
            "2016-06-07 02:12:12,1111",
            "2016-06-07 02:12:12.111",
            "not a date",
        ] {
            assert!(raw.parse::<DateFilter>().is_err(), "should reject '{raw}'");
        }
    }

    #[test]
    fn test_digits_are_not_range_checked() {
        // Validation is purely structural; impossible components still parse.
        assert!("2016-13-45".parse::<DateFilter>().is_ok());
    }

    #[test]
    fn test_day_filter_matches_same_day_only() {
        let filter: DateFilter = "2016-06-07".parse().unwrap();
        let same_day =
            parse_log_line("2016-06-07 02:12:12,111 - INFO - module_one - message\n");
        let next_day =
            parse_log_line("2016-06-08 00:00:00,000 - INFO - module_one - message\n");
        assert!(filter.matches(&same_day));
        assert!(!filter.matches(&next_day));
    }

    #[test]
    fn test_full_precision_filter_requires_exact_timestamp() {
        let filter: DateFilter = "2016-06-07 02:12:12,111".parse().unwrap();
        let exact =
            parse_log_line("2016-06-07 02:12:12,111 - INFO - module_one - message\n");
        let close =
            parse_log_line("2016-06-07 02:12:12,112 - INFO - module_one - message\n");
        assert!(filter.matches(&exact));
        assert!(!filter.matches(&close));
    }

    #[test]
    fn test_record_without_timestamp_never_matches() {
        let filter: DateFilter = "2016".parse().unwrap();
        let record = parse_log_line("no timestamp here\n");
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_matches_against_canonical_rendering() {
        // The record's millisecond field round-trips as written, so a
        // full-precision filter can still hit small fractions.
        let filter: DateFilter = "2016-06-07 02:12:12,007".parse().unwrap();
        let record =
            parse_log_line("2016-06-07 02:12:12,007 - DEBUG - module_two - message\n");
        assert!(filter.matches(&record));
    }
}
