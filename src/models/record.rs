//! The validated case record
//!
//! A [`Record`] is produced only by [`crate::schema::validate`], so every value
//! held here has already passed the date and age checks.

use std::fmt;

use chrono::NaiveDate;

use crate::models::types::Gender;
use crate::schema::date_utils::format_date;

/// One infected individual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Opaque identifier, not validated
    pub id: String,
    /// Reporting date, `None` when unknown
    pub date: Option<NaiveDate>,
    /// Age in years, `None` when unknown
    pub age: Option<u32>,
    /// Age field as it appeared in the input, e.g. `007`
    pub age_text: String,
    /// Recorded gender
    pub gender: Gender,
    /// Gender field as it appeared in the input, kept for codes other than `M`/`Z`
    pub gender_code: String,
    /// Region code, possibly empty
    pub region_code: String,
    /// District code, possibly empty
    pub district_code: String,
    /// Whether the infection was imported from abroad, unvalidated
    pub imported_abroad_flag: String,
    /// Two-letter country of infection, possibly empty
    pub country_code: String,
    /// Reporting flag, unvalidated
    pub reported_flag: String,
}

impl Record {
    /// The date in its `YYYY-MM-DD` form, empty when unknown
    #[must_use]
    pub fn date_text(&self) -> String {
        self.date.map(format_date).unwrap_or_default()
    }
}

/// Comma-joined serialization in header order, field text unchanged
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{}",
            self.id,
            self.date_text(),
            self.age_text,
            self.gender_code,
            self.region_code,
            self.district_code,
            self.imported_abroad_flag,
            self.country_code,
            self.reported_flag
        )
    }
}
