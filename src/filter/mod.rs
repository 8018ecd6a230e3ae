//! Record filtering and ordering
//!
//! This module decides which parsed records make it into the output and in
//! what order. Criteria combine with AND; a record must satisfy every one
//! that was given.
//!
//! # Criteria
//!
//! - level - Keep records whose severity equals the given level exactly
//! - module - Keep records whose module name equals the given name exactly
//! - date - Keep records whose timestamp starts with the given prefix
//!
//! # Date prefixes
//!
//! A date filter names any leading run of timestamp components:
//!
//! ```text
//! 2016                      # The whole year
//! 2016-06-07                # One day
//! 2016-06-07 02:12          # One minute
//! 2016-06-07 02:12:12,111   # One millisecond
//! ```
//!
//! Sorting happens before filtering and removes records that lack the sort
//! field, so `process` with a sort field never returns an unstructured line.

pub mod criteria;
pub mod date;
pub mod engine;
pub mod error;

pub use criteria::FilterCriteria;
pub use date::DateFilter;
pub use engine::process;
pub use error::FilterError;
