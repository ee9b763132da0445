//! Date filtering functionality for case records
//!
//! Both bounds are inclusive and compared at day granularity. A record without
//! a date can never satisfy a bound, so it is excluded once any bound is set.

use chrono::NaiveDate;

use crate::filter::generic::Filter;
use crate::models::Record;

/// A filter that includes only records with dates in a specified range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeFilter {
    /// The start date (inclusive)
    start_date: Option<NaiveDate>,

    /// The end date (inclusive)
    end_date: Option<NaiveDate>,
}

impl DateRangeFilter {
    /// Create a new date range filter
    ///
    /// # Arguments
    /// * `start_date` - Optional start date (inclusive)
    /// * `end_date` - Optional end date (inclusive)
    ///
    /// # Returns
    /// `None` when neither bound is given
    #[must_use]
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Option<Self> {
        if start_date.is_none() && end_date.is_none() {
            return None;
        }
        Some(Self {
            start_date,
            end_date,
        })
    }
}

impl Filter<Record> for DateRangeFilter {
    fn matches(&self, input: &Record) -> bool {
        let Some(date) = input.date else {
            return false;
        };
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}
