//! Gender and age reports
//!
//! Both use fixed bucket lists, so every bucket is listed even when empty.

use crate::algorithm::report::{Aggregation, NONE_LABEL, ReportRow};
use crate::models::{Gender, Record};

/// Counts per gender in the order Z, M, None
#[derive(Debug, Clone, Copy, Default)]
pub struct GenderReport;

impl Aggregation for GenderReport {
    fn aggregate(&self, records: &[&Record]) -> Vec<ReportRow> {
        [Gender::Female, Gender::Male, Gender::None]
            .into_iter()
            .map(|gender| {
                let count = records.iter().filter(|r| r.gender == gender).count();
                ReportRow::new(gender.label(), count as u64)
            })
            .collect()
    }
}

/// An inclusive age range with its report label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBucket {
    pub label: &'static str,
    pub low: u32,
    pub high: u32,
}

const fn bucket(label: &'static str, low: u32, high: u32) -> AgeBucket {
    AgeBucket { label, low, high }
}

/// Number of ranged age buckets
pub const AGE_BUCKET_COUNT: usize = 11;

/// Ranged buckets in report order. There is no 76-85 bucket, so those ages
/// appear in no row of the age report.
pub const AGE_BUCKETS: [AgeBucket; AGE_BUCKET_COUNT] = [
    bucket("0-5", 0, 5),
    bucket("6-15", 6, 15),
    bucket("16-25", 16, 25),
    bucket("26-35", 26, 35),
    bucket("36-45", 36, 45),
    bucket("46-55", 46, 55),
    bucket("56-65", 56, 65),
    bucket("66-75", 66, 75),
    bucket("86-95", 86, 95),
    bucket("96-105", 96, 105),
    bucket(">105", 106, u32::MAX),
];

/// Width the age labels are padded to
pub const AGE_LABEL_WIDTH: usize = 6;

/// Count slot of an age: the index into [`AGE_BUCKETS`], or
/// [`AGE_BUCKET_COUNT`] when the age is unknown. Ages in the 76-85 gap have no
/// slot.
#[must_use]
pub fn age_slot(age: Option<u32>) -> Option<usize> {
    let Some(age) = age else {
        return Some(AGE_BUCKET_COUNT);
    };
    AGE_BUCKETS
        .iter()
        .position(|b| (b.low..=b.high).contains(&age))
}

/// Report label of a count slot
#[must_use]
pub fn slot_label(slot: usize) -> &'static str {
    AGE_BUCKETS.get(slot).map_or(NONE_LABEL, |b| b.label)
}

/// Counts per age bucket
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeReport;

impl Aggregation for AgeReport {
    fn aggregate(&self, records: &[&Record]) -> Vec<ReportRow> {
        let mut counts = [0u64; AGE_BUCKET_COUNT + 1];
        let mut skipped = 0usize;
        for record in records {
            match age_slot(record.age) {
                Some(slot) => counts[slot] += 1,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("{skipped} records fall outside every age bucket");
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(slot, count)| ReportRow::new(slot_label(slot), count))
            .collect()
    }

    fn label_width(&self) -> Option<usize> {
        Some(AGE_LABEL_WIDTH)
    }
}
