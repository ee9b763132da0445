//! Aggregation algorithms over validated records

pub mod report;

pub use report::{Aggregation, Report, ReportOutput, ReportRow, ReportTable};
