//! Shared fixtures for the integration tests

#![allow(dead_code)]

use epi_stats::{FilterCriteria, PipelineConfig, PipelineOutput, Report};

/// A small input covering every field combination the reports care about
pub const SAMPLE: &[&str] = &[
    "id,date,age,gender,region_code,district_code,imported_abroad_flag,country_code,reported_flag",
    "1,2020-03-01,34,M,CZ010,CZ0100,1,IT,1",
    "2,2020-03-01,5,Z,CZ010,CZ0100,0,,1",
    "3,2020-03-02,80,Z,CZ020,CZ0201,1,CZ,1",
    "4,2020-04-15,105,M,CZ020,,1,AT,0",
    "5,2021-01-10,106,,,,,,",
    "6,,,Z,CZ010,CZ0100,,IT,1",
    "7,2020-02-29,10,M,CZ010,CZ0100,,,1",
    "8,2020-03-05,-1,M,CZ010,CZ0100,,,1",
    "",
];

/// Diagnostics the sample produces
pub const SAMPLE_DIAGNOSTICS: &[&str] = &[
    "Invalid date: 7,2020-02-29,10,M,CZ010,CZ0100,,,1",
    "Invalid age: 8,2020-03-05,-1,M,CZ010,CZ0100,,,1",
];

/// Run a report over the sample without filters
pub fn run_sample(report: Report) -> PipelineOutput {
    epi_stats::run(SAMPLE, &PipelineConfig::for_report(report))
}

/// Run a report over the sample with filters
pub fn run_sample_filtered(report: Report, filters: FilterCriteria) -> PipelineOutput {
    epi_stats::run(
        SAMPLE,
        &PipelineConfig::for_report(report).with_filters(filters),
    )
}

/// Build a record line from its nine fields
pub fn record_line(fields: [&str; 9]) -> String {
    fields.join(",")
}

/// Convert expected lines to owned strings for comparison
pub fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(ToString::to_string).collect()
}
