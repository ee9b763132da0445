//! Input schema: the fixed header, line parsing and record validation.

pub mod date_utils;
pub mod parser;
pub mod validation;

pub use parser::{RawRecord, parse_line};
pub use validation::{InvalidReason, Validation, validate};

/// The header line shared by every input file and by merge output
pub const HEADER: &str = "id,date,age,gender,region_code,district_code,imported_abroad_flag,country_code,reported_flag";

/// Number of positional fields per line
pub const FIELD_COUNT: usize = 9;
