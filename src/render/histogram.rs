//! Histogram rendering of report rows
//!
//! Rows render as `label: count`, or as `label: ###` when a histogram width is
//! requested. The number of `#` for a row is `count / unit`, rounded down.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::report::{ReportOutput, ReportRow, ReportTable};
use crate::error::Error;

/// Requested histogram scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramWidth {
    /// The largest count renders as this many `#`
    Fixed(u64),
    /// Use the report's built-in records-per-`#` unit
    ReportDefault,
}

/// Whether a token has the shape of a width: ASCII digits only
#[must_use]
pub fn is_width_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for HistogramWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_width_token(s) {
            return Err(Error::InvalidHistogramWidth(s.to_string()));
        }
        match s.parse::<u64>() {
            Ok(width) if width > 0 => Ok(Self::Fixed(width)),
            _ => Err(Error::InvalidHistogramWidth(s.to_string())),
        }
    }
}

impl fmt::Display for HistogramWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(width) => write!(f, "{width} characters"),
            Self::ReportDefault => f.write_str("report default"),
        }
    }
}

/// Records represented by one `#`
///
/// For a fixed width this is the largest count divided by the width. The
/// result never drops below 1.
#[must_use]
pub fn scale_unit(rows: &[ReportRow], width: HistogramWidth, default_unit: Option<u64>) -> u64 {
    let unit = match width {
        HistogramWidth::Fixed(width) => {
            let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
            max / width.max(1)
        }
        HistogramWidth::ReportDefault => default_unit.unwrap_or(1),
    };
    unit.max(1)
}

fn format_label(label: &str, width: Option<usize>) -> String {
    match width {
        Some(width) => format!("{label:<width$}"),
        None => label.to_string(),
    }
}

fn render_table(
    table: &ReportTable,
    histogram: Option<HistogramWidth>,
    default_unit: Option<u64>,
) -> Vec<String> {
    let Some(width) = histogram else {
        return table
            .rows
            .iter()
            .map(|row| format!("{}: {}", format_label(&row.label, table.label_width), row.count))
            .collect();
    };

    let unit = scale_unit(&table.rows, width, default_unit);
    log::debug!("Rendering histogram with {} records per '#'", unit);
    table
        .rows
        .iter()
        .map(|row| {
            let bars = "#".repeat(usize::try_from(row.count / unit).unwrap_or(usize::MAX));
            format!("{}: {}", format_label(&row.label, table.label_width), bars)
        })
        .collect()
}

/// Turn a report output into printable lines
///
/// Histogram settings only apply to labeled rows; single counts and merge
/// lines pass through unchanged. An empty table renders nothing.
#[must_use]
pub fn render(
    output: &ReportOutput,
    histogram: Option<HistogramWidth>,
    default_unit: Option<u64>,
) -> Vec<String> {
    match output {
        ReportOutput::Count(count) => vec![count.to_string()],
        ReportOutput::Lines(lines) => lines.clone(),
        ReportOutput::Table(table) => render_table(table, histogram, default_unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, u64)], label_width: Option<usize>) -> ReportOutput {
        ReportOutput::Table(ReportTable {
            rows: rows.iter().map(|(l, c)| ReportRow::new(*l, *c)).collect(),
            label_width,
        })
    }

    #[test]
    fn plain_rows() {
        let output = table(&[("A", 100), ("B", 50)], None);
        assert_eq!(render(&output, None, Some(10)), vec!["A: 100", "B: 50"]);
    }

    #[test]
    fn fixed_width_scales_to_max() {
        let output = table(&[("A", 100), ("B", 50)], None);
        let lines = render(&output, Some(HistogramWidth::Fixed(10)), None);
        assert_eq!(lines, vec!["A: ##########", "B: #####"]);
    }

    #[test]
    fn default_unit_is_used_without_width() {
        let output = table(&[("2020-03-01", 1200), ("2020-03-02", 499)], None);
        let lines = render(&output, Some(HistogramWidth::ReportDefault), Some(500));
        assert_eq!(lines, vec!["2020-03-01: ##", "2020-03-02: "]);
    }

    #[test]
    fn unit_is_clamped_to_one() {
        let rows = vec![ReportRow::new("A", 3)];
        assert_eq!(scale_unit(&rows, HistogramWidth::Fixed(10), None), 1);
        assert_eq!(scale_unit(&[], HistogramWidth::Fixed(10), None), 1);
    }

    #[test]
    fn padded_labels() {
        let output = table(&[("0-5", 2), (">105", 1)], Some(6));
        assert_eq!(render(&output, None, None), vec!["0-5   : 2", ">105  : 1"]);
        assert_eq!(
            render(&output, Some(HistogramWidth::Fixed(2)), None),
            vec!["0-5   : ##", ">105  : #"]
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        let output = table(&[], None);
        assert!(render(&output, Some(HistogramWidth::Fixed(5)), None).is_empty());
        assert!(render(&output, None, None).is_empty());
    }

    #[test]
    fn counts_ignore_histogram() {
        let output = ReportOutput::Count(7);
        assert_eq!(render(&output, Some(HistogramWidth::Fixed(3)), None), vec!["7"]);
    }

    #[test]
    fn width_parsing() {
        assert_eq!("12".parse::<HistogramWidth>().unwrap(), HistogramWidth::Fixed(12));
        assert!("0".parse::<HistogramWidth>().is_err());
        assert!("-3".parse::<HistogramWidth>().is_err());
        assert!("abc".parse::<HistogramWidth>().is_err());
        assert!("+4".parse::<HistogramWidth>().is_err());
        assert!("99999999999999999999999".parse::<HistogramWidth>().is_err());
    }

    #[test]
    fn width_tokens_are_digits_only() {
        assert!(is_width_token("007"));
        assert!(is_width_token("99999999999999999999999"));
        assert!(!is_width_token(""));
        assert!(!is_width_token("-4"));
        assert!(!is_width_token("+4"));
    }
}
