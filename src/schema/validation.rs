//! Record validation
//!
//! Turns a [`RawRecord`] into a typed [`Record`] or an [`Validation::Invalid`]
//! outcome carrying the reason and the offending line.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{Gender, Record};
use crate::schema::date_utils::parse_calendar_date;
use crate::schema::parser::RawRecord;

/// Why a record was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Date,
    Age,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("Invalid date"),
            Self::Age => f.write_str("Invalid age"),
        }
    }
}

/// Outcome of validating one raw record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(Record),
    Invalid {
        reason: InvalidReason,
        line: String,
    },
}

impl Validation {
    /// Diagnostic line for invalid outcomes, e.g. `Invalid age: <line>`
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { reason, line } => Some(format!("{reason}: {line}")),
        }
    }
}

/// Check a date field: empty passes, anything else must be a real date
///
/// Returns the outer `None` when the value is invalid.
#[must_use]
pub fn check_date(value: &str) -> Option<Option<NaiveDate>> {
    if value.is_empty() {
        return Some(None);
    }
    parse_calendar_date(value).map(Some)
}

/// Check an age field: empty passes, anything else must be digits only
///
/// Returns the outer `None` when the value is invalid. Digit strings too large
/// for `u32` saturate.
#[must_use]
pub fn check_age(value: &str) -> Option<Option<u32>> {
    if value.is_empty() {
        return Some(None);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(Some(value.parse().unwrap_or(u32::MAX)))
}

/// Validate a raw record, date first and then age
#[must_use]
pub fn validate(raw: RawRecord) -> Validation {
    let Some(date) = check_date(raw.date()) else {
        return Validation::Invalid {
            reason: InvalidReason::Date,
            line: raw.line,
        };
    };
    let Some(age) = check_age(raw.age()) else {
        return Validation::Invalid {
            reason: InvalidReason::Age,
            line: raw.line,
        };
    };

    Validation::Valid(Record {
        id: raw.id().to_string(),
        date,
        age,
        age_text: raw.age().to_string(),
        gender: Gender::from(raw.gender()),
        gender_code: raw.gender().to_string(),
        region_code: raw.region_code().to_string(),
        district_code: raw.district_code().to_string(),
        imported_abroad_flag: raw.imported_abroad_flag().to_string(),
        country_code: raw.country_code().to_string(),
        reported_flag: raw.reported_flag().to_string(),
    })
}
