use thiserror::Error;

/// Errors that can occur when validating filter arguments
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(
        "'{0}' is not a valid date filter. Accepted precision runs from a bare year down to \
         milliseconds in the form 'yyyy-mm-dd hh:mm:ss,fff' (e.g. '2016', '2016-06-07', \
         '2016-06-07 02:12:12,111')"
    )]
    InvalidDateFilter(String),
}
