//! Configuration for a pipeline run.

use std::fmt;

use crate::algorithm::Report;
use crate::filter::FilterCriteria;
use crate::render::HistogramWidth;

/// Configuration for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// The report to produce
    pub report: Report,
    /// Date and gender filters
    pub filters: FilterCriteria,
    /// Histogram rendering, if requested
    pub histogram: Option<HistogramWidth>,
}

impl PipelineConfig {
    /// Create a configuration for a report with no filters
    #[must_use]
    pub fn for_report(report: Report) -> Self {
        Self {
            report,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filters(mut self, filters: FilterCriteria) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn with_histogram(mut self, histogram: HistogramWidth) -> Self {
        self.histogram = Some(histogram);
        self
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Report: {}", self.report)?;
        writeln!(f, "  Filters: {}", self.filters)?;
        if let Some(histogram) = self.histogram {
            writeln!(f, "  Histogram: {histogram}")?;
        }
        Ok(())
    }
}
