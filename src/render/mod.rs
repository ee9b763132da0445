//! Output rendering

pub mod histogram;

pub use histogram::{HistogramWidth, is_width_token, render, scale_unit};
