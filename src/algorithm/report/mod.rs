//! Report strategies
//!
//! Each [`Report`] turns the filtered record sequence into its output. The
//! grouping reports share the [`Aggregation`] contract: borrowed records in,
//! ordered `(label, count)` rows out.

pub mod demographic;
pub mod geography;
pub mod temporal;

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use rustc_hash::FxHashMap;

pub use demographic::{AGE_BUCKETS, AgeBucket, AgeReport, GenderReport, age_slot, slot_label};
pub use geography::{GeoField, GeographyReport};
pub use temporal::{DateGranularity, TemporalReport};

use crate::error::Error;
use crate::models::Record;
use crate::schema::HEADER;

/// Label used for records without a value in the grouped field
pub const NONE_LABEL: &str = "None";

/// One aggregated row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub count: u64,
}

impl ReportRow {
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Common contract of the grouping reports
pub trait Aggregation: fmt::Debug {
    /// Group the records into ordered rows
    fn aggregate(&self, records: &[&Record]) -> Vec<ReportRow>;

    /// Fixed label width, if the report pads its labels
    fn label_width(&self) -> Option<usize> {
        None
    }
}

/// Count records per key, sorted by key as plain strings
pub fn count_groups<I>(keys: I) -> Vec<ReportRow>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
        .map(|(label, count)| ReportRow { label, count })
        .collect()
}

/// Rows produced by a grouping report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
    pub label_width: Option<usize>,
}

/// Result of running one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutput {
    /// A single unlabeled count
    Count(u64),
    /// Pre-formatted lines that bypass histogram rendering
    Lines(Vec<String>),
    /// Labeled rows
    Table(ReportTable),
}

/// The closed set of report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Report {
    Infected,
    #[default]
    Merge,
    Gender,
    Age,
    Daily,
    Monthly,
    Yearly,
    Countries,
    Districts,
    Regions,
}

impl Report {
    /// Every report, in command listing order
    pub const ALL: [Self; 10] = [
        Self::Infected,
        Self::Merge,
        Self::Gender,
        Self::Age,
        Self::Daily,
        Self::Monthly,
        Self::Yearly,
        Self::Countries,
        Self::Districts,
        Self::Regions,
    ];

    /// Command name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Infected => "infected",
            Self::Merge => "merge",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Countries => "countries",
            Self::Districts => "districts",
            Self::Regions => "regions",
        }
    }

    /// Records per `#` when a histogram is requested without a width
    #[must_use]
    pub const fn default_unit(self) -> Option<u64> {
        match self {
            Self::Infected | Self::Merge => None,
            Self::Gender => Some(100_000),
            Self::Age => Some(10_000),
            Self::Daily => Some(500),
            Self::Monthly => Some(10_000),
            Self::Yearly => Some(100_000),
            Self::Countries => Some(100),
            Self::Districts => Some(1_000),
            Self::Regions => Some(10_000),
        }
    }

    /// Run the report over the filtered records
    #[must_use]
    pub fn run(self, records: &[&Record]) -> ReportOutput {
        match self {
            Self::Infected => ReportOutput::Count(records.len() as u64),
            Self::Merge => ReportOutput::Lines(
                std::iter::once(HEADER.to_string())
                    .chain(records.iter().map(ToString::to_string))
                    .collect(),
            ),
            Self::Gender => self.tabulate(&GenderReport, records),
            Self::Age => self.tabulate(&AgeReport, records),
            Self::Daily => self.tabulate(&TemporalReport::new(DateGranularity::Day), records),
            Self::Monthly => self.tabulate(&TemporalReport::new(DateGranularity::Month), records),
            Self::Yearly => self.tabulate(&TemporalReport::new(DateGranularity::Year), records),
            Self::Countries => self.tabulate(&GeographyReport::new(GeoField::Country), records),
            Self::Districts => self.tabulate(&GeographyReport::new(GeoField::District), records),
            Self::Regions => self.tabulate(&GeographyReport::new(GeoField::Region), records),
        }
    }

    fn tabulate(self, strategy: &dyn Aggregation, records: &[&Record]) -> ReportOutput {
        let rows = strategy.aggregate(records);
        log::debug!("{} report produced {} rows", self, rows.len());
        ReportOutput::Table(ReportTable {
            rows,
            label_width: strategy.label_width(),
        })
    }
}

impl FromStr for Report {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|report| report.name() == s)
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
