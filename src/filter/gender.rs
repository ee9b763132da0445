//! Gender filter

use crate::filter::generic::Filter;
use crate::models::{Gender, Record};

/// Keeps records whose gender equals the requested one exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderFilter {
    gender: Gender,
}

impl GenderFilter {
    #[must_use]
    pub const fn new(gender: Gender) -> Self {
        Self { gender }
    }
}

impl Filter<Record> for GenderFilter {
    fn matches(&self, input: &Record) -> bool {
        input.gender == self.gender
    }
}
