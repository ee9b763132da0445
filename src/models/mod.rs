//! Domain models for case records

pub mod record;
pub mod types;

pub use record::Record;
pub use types::Gender;
