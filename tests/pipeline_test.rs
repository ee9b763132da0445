mod utils;

use chrono::NaiveDate;
use epi_stats::{FilterCriteria, Gender, HEADER, PipelineConfig, Report};
use pretty_assertions::assert_eq;
use utils::{SAMPLE, SAMPLE_DIAGNOSTICS, lines, record_line, run_sample, run_sample_filtered};

fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_invalid_records_are_reported_once() {
    let output = run_sample(Report::Infected);
    assert_eq!(output.diagnostics, lines(SAMPLE_DIAGNOSTICS));
}

#[test]
fn test_diagnostics_do_not_depend_on_report() {
    for report in Report::ALL {
        assert_eq!(run_sample(report).diagnostics.len(), 2, "{report}");
    }
}

#[test]
fn test_valid_records_produce_no_diagnostics() {
    let input = [
        record_line(["a", "2020-01-31", "0", "M", "", "", "", "", ""]),
        record_line(["b", "", "", "", "", "", "", "", ""]),
        record_line(["c", "2020-12-31", "120", "Z", "R", "D", "1", "SK", "1"]),
    ];
    let output = epi_stats::run(&input, &PipelineConfig::for_report(Report::Infected));
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.lines, lines(&["3"]));
}

#[test]
fn test_malformed_dates() {
    for date in ["2020-1-01", "01-01-2020", "2020-01-32", "2021-02-29", "2020-13-01", "x"] {
        let line = record_line(["a", date, "1", "M", "", "", "", "", ""]);
        let output = epi_stats::run([line.as_str()], &PipelineConfig::for_report(Report::Infected));
        assert_eq!(output.diagnostics, vec![format!("Invalid date: {line}")]);
        assert_eq!(output.lines, lines(&["0"]));
    }
}

#[test]
fn test_merge_outputs_header_and_valid_records() {
    let output = run_sample(Report::Merge);
    let mut expected = vec![HEADER];
    expected.extend(&SAMPLE[1..7]);
    assert_eq!(output.lines, lines(&expected));
}

#[test]
fn test_merge_is_idempotent() {
    let first = run_sample(Report::Merge);
    let second = epi_stats::run(&first.lines, &PipelineConfig::default());
    assert_eq!(second.lines, first.lines);
    assert!(second.diagnostics.is_empty());
}

#[test]
fn test_merge_strips_whitespace() {
    let input = [" a , 2020-03-01 , 4 2 ,M,,, 1 ,IT,1\r"];
    let output = epi_stats::run(input, &PipelineConfig::default());
    assert_eq!(output.lines, lines(&[HEADER, "a,2020-03-01,42,M,,,1,IT,1"]));
}

#[test]
fn test_multiple_headers_are_skipped() {
    let input = [HEADER, "a,2020-03-01,1,M,,,,,", HEADER, "b,2020-03-02,2,Z,,,,,"];
    let output = epi_stats::run(input, &PipelineConfig::for_report(Report::Infected));
    assert_eq!(output.lines, lines(&["2"]));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_date_filter_is_inclusive() {
    let filters = FilterCriteria {
        after: ymd(2020, 3, 1),
        before: ymd(2020, 3, 2),
        gender: None,
    };
    let output = run_sample_filtered(Report::Merge, filters);
    assert_eq!(output.lines, lines(&[HEADER, SAMPLE[1], SAMPLE[2], SAMPLE[3]]));
}

#[test]
fn test_date_filter_drops_undated_records() {
    let filters = FilterCriteria {
        after: ymd(1900, 1, 1),
        ..FilterCriteria::default()
    };
    let output = run_sample_filtered(Report::Daily, filters);
    assert!(output.lines.iter().all(|l| !l.starts_with("None")));
    assert_eq!(run_sample_filtered(Report::Infected, filters).lines, lines(&["5"]));
}

#[test]
fn test_gender_filter_excludes_unknown_gender() {
    let male = FilterCriteria {
        gender: Some(Gender::Male),
        ..FilterCriteria::default()
    };
    assert_eq!(run_sample_filtered(Report::Infected, male).lines, lines(&["2"]));
    assert_eq!(
        run_sample_filtered(Report::Gender, male).lines,
        lines(&["Z: 0", "M: 2", "None: 0"])
    );
}

#[test]
fn test_filters_combine() {
    let filters = FilterCriteria {
        after: ymd(2020, 3, 1),
        before: None,
        gender: Some(Gender::Female),
    };
    let output = run_sample_filtered(Report::Infected, filters);
    assert_eq!(output.lines, lines(&["2"]));
}

#[test]
fn test_infected_matches_merge_body() {
    let filters = FilterCriteria {
        before: ymd(2020, 3, 31),
        ..FilterCriteria::default()
    };
    let merged = run_sample_filtered(Report::Merge, filters);
    let infected = run_sample_filtered(Report::Infected, filters);
    assert_eq!(infected.lines, vec![(merged.lines.len() - 1).to_string()]);
}

#[test]
fn test_merge_keeps_field_text() {
    let input = [
        "a,2020-03-01,007,X,R,D,1,IT,1",
        "b,2020-03-01,99999999999,M,R,D,1,IT,1",
        "c,,00,W,,,,,",
    ];
    let merged = epi_stats::run(input, &PipelineConfig::default());
    let mut expected = vec![HEADER];
    expected.extend(input);
    assert_eq!(merged.lines, lines(&expected));
    assert!(merged.diagnostics.is_empty());

    // Typed values still drive bucketing
    let ages = epi_stats::run(input, &PipelineConfig::for_report(Report::Age));
    assert_eq!(ages.lines[0], "0-5   : 1");
    assert_eq!(ages.lines[1], "6-15  : 1");
    assert_eq!(ages.lines[10], ">105  : 1");
    let genders = epi_stats::run(input, &PipelineConfig::for_report(Report::Gender));
    assert_eq!(genders.lines, lines(&["Z: 0", "M: 1", "None: 2"]));
}
