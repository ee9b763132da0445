//! Filtering of validated case records
//!
//! The active predicates are combined with AND, so the order in which they are
//! applied does not change the result.

pub mod date;
pub mod gender;
pub mod generic;

use std::fmt;

use chrono::NaiveDate;

pub use date::DateRangeFilter;
pub use gender::GenderFilter;
pub use generic::{AndFilter, Filter, FilterBuilder, apply_filter};

use crate::models::{Gender, Record};

/// The filter parameters of one run, already validated by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep records on or after this date
    pub after: Option<NaiveDate>,
    /// Keep records on or before this date
    pub before: Option<NaiveDate>,
    /// Keep records of this gender only
    pub gender: Option<Gender>,
}

impl FilterCriteria {
    /// Combine the active predicates into one filter
    #[must_use]
    pub fn build_filter(&self) -> AndFilter<Record> {
        FilterBuilder::new()
            .add_optional(DateRangeFilter::new(self.after, self.before))
            .add_optional(self.gender.map(GenderFilter::new))
            .build_and()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(after) = self.after {
            parts.push(format!("after {after}"));
        }
        if let Some(before) = self.before {
            parts.push(format!("before {before}"));
        }
        if let Some(gender) = self.gender {
            parts.push(format!("gender {gender}"));
        }
        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Borrow the records kept by the criteria, preserving input order
#[must_use]
pub fn filter_records<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let filter = criteria.build_filter();
    let kept = apply_filter(&filter, records);
    log::debug!(
        "Filter ({}) kept {} of {} records",
        criteria,
        kept.len(),
        records.len()
    );
    kept
}
