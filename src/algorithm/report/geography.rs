//! Country, district and region reports

use crate::algorithm::report::{Aggregation, NONE_LABEL, ReportRow, count_groups};
use crate::models::Record;

/// Country code excluded from the country report
pub const HOME_COUNTRY: &str = "CZ";

/// Geographic field a report groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoField {
    Country,
    District,
    Region,
}

impl GeoField {
    fn value(self, record: &Record) -> &str {
        match self {
            Self::Country => &record.country_code,
            Self::District => &record.district_code,
            Self::Region => &record.region_code,
        }
    }

    /// Group key for a record, `None` when the record is left out
    ///
    /// Countries skip empty codes and the home country; districts and regions
    /// group empty codes under `None`.
    #[must_use]
    pub fn key(self, record: &Record) -> Option<String> {
        let value = self.value(record);
        match self {
            Self::Country if value.is_empty() || value == HOME_COUNTRY => None,
            Self::Country => Some(value.to_string()),
            Self::District | Self::Region if value.is_empty() => Some(NONE_LABEL.to_string()),
            Self::District | Self::Region => Some(value.to_string()),
        }
    }
}

/// Counts per geographic code, sorted by label
#[derive(Debug, Clone, Copy)]
pub struct GeographyReport {
    field: GeoField,
}

impl GeographyReport {
    #[must_use]
    pub const fn new(field: GeoField) -> Self {
        Self { field }
    }
}

impl Aggregation for GeographyReport {
    fn aggregate(&self, records: &[&Record]) -> Vec<ReportRow> {
        count_groups(records.iter().filter_map(|r| self.field.key(r)))
    }
}
