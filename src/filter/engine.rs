use crate::cli::SortField;
use crate::filter::criteria::FilterCriteria;
use crate::parser::LogRecord;

/// Applies the requested ordering and filtering to parsed records.
///
/// Sorting drops every record that lacks the field being sorted on, so an
/// unstructured line survives only an unsorted run. Without a sort field the
/// input order is preserved, and ties under a sort keep their relative input
/// order.
pub fn process(
    mut records: Vec<LogRecord>,
    sort_field: Option<SortField>,
    criteria: &FilterCriteria,
) -> Vec<LogRecord> {
    if let Some(field) = sort_field {
        sort_records(&mut records, field);
    }
    records.retain(|record| criteria.matches(record));
    records
}

fn sort_records(records: &mut Vec<LogRecord>, field: SortField) {
    match field {
        SortField::Time => {
            records.retain(|record| record.timestamp.is_some());
            records.sort_by_key(|record| record.timestamp);
        }
        SortField::LogLevel => {
            records.retain(|record| record.level.is_some());
            records.sort_by(|a, b| a.level.cmp(&b.level));
        }
        SortField::Module => {
            records.retain(|record| record.module.is_some());
            records.sort_by(|a, b| a.module.cmp(&b.module));
        }
    }
}
