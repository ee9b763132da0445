//! End-to-end processing of raw input lines
//!
//! parse → validate → filter → aggregate → render. Every stage takes borrowed
//! input and returns new values; records are never modified after validation.

use crate::algorithm::ReportOutput;
use crate::config::PipelineConfig;
use crate::filter::filter_records;
use crate::models::Record;
use crate::render::render;
use crate::schema::{Validation, parse_line, validate};
use crate::utils::logging::log_load_summary;

/// Validated records plus the diagnostics of dropped lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub diagnostics: Vec<String>,
}

/// Printable result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Report lines for standard output
    pub lines: Vec<String>,
    /// One line per dropped record for the error channel
    pub diagnostics: Vec<String>,
}

/// Parse and validate raw lines, skipping headers and blank lines
pub fn load_records<I, S>(lines: I) -> LoadedRecords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut loaded = LoadedRecords::default();
    let mut skipped = 0usize;

    for line in lines {
        let Some(raw) = parse_line(line.as_ref()) else {
            skipped += 1;
            continue;
        };
        match validate(raw) {
            Validation::Valid(record) => loaded.records.push(record),
            invalid => loaded.diagnostics.extend(invalid.diagnostic()),
        }
    }

    log_load_summary(loaded.records.len(), loaded.diagnostics.len(), skipped);
    loaded
}

/// Run the report selected by `config` over validated records
#[must_use]
pub fn report(records: &[Record], config: &PipelineConfig) -> ReportOutput {
    let kept = filter_records(records, &config.filters);
    config.report.run(&kept)
}

/// Run the whole pipeline over raw lines
///
/// Never fails: invalid records end up in `diagnostics` and an input without
/// usable records produces an empty or zero report.
pub fn run<I, S>(lines: I, config: &PipelineConfig) -> PipelineOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    log::debug!("{config}");
    let LoadedRecords {
        records,
        diagnostics,
    } = load_records(lines);

    let output = report(&records, config);
    let lines = render(&output, config.histogram, config.report.default_unit());
    log::info!(
        "{} report: {} output lines from {} valid records",
        config.report,
        lines.len(),
        records.len()
    );

    PipelineOutput { lines, diagnostics }
}
