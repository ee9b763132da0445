//! Common domain type definitions
//!
//! This module contains the enum types shared by the record model,
//! the filters and the reports.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Gender of an infected individual as recorded in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    /// Male gender, raw value `M`
    Male,
    /// Female gender, raw value `Z`
    Female,
    /// Not specified, raw value is empty
    None,
}

impl Gender {
    /// Label used by the gender report
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "Z",
            Self::None => "None",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s {
            "M" => Self::Male,
            "Z" => Self::Female,
            _ => Self::None,
        }
    }
}

/// Strict parsing for filter arguments: only `M` and `Z` are accepted
impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "Z" => Ok(Self::Female),
            other => Err(Error::InvalidGender(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
