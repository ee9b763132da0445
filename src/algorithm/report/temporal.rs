//! Daily, monthly and yearly reports

use crate::algorithm::report::{Aggregation, NONE_LABEL, ReportRow, count_groups};
use crate::models::Record;

/// How much of the `YYYY-MM-DD` date forms the group key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGranularity {
    Day,
    Month,
    Year,
}

impl DateGranularity {
    /// Length of the date prefix used as key
    #[must_use]
    pub const fn prefix_len(self) -> usize {
        match self {
            Self::Day => 10,
            Self::Month => 7,
            Self::Year => 4,
        }
    }

    /// Group key for a record; records without a date share the `None` group
    #[must_use]
    pub fn key(self, record: &Record) -> String {
        if record.date.is_none() {
            return NONE_LABEL.to_string();
        }
        let mut text = record.date_text();
        text.truncate(self.prefix_len());
        text
    }
}

/// Counts per date prefix, sorted by label
#[derive(Debug, Clone, Copy)]
pub struct TemporalReport {
    granularity: DateGranularity,
}

impl TemporalReport {
    #[must_use]
    pub const fn new(granularity: DateGranularity) -> Self {
        Self { granularity }
    }
}

impl Aggregation for TemporalReport {
    fn aggregate(&self, records: &[&Record]) -> Vec<ReportRow> {
        count_groups(records.iter().map(|r| self.granularity.key(r)))
    }
}
