//! A Rust library for validating, filtering and aggregating line-oriented
//! epidemiological case records into count reports and ASCII histograms.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod render;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::{Report, ReportOutput, ReportRow};
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use filter::FilterCriteria;
pub use models::{Gender, Record};
pub use pipeline::{PipelineOutput, load_records, run};
pub use render::HistogramWidth;
pub use schema::HEADER;
