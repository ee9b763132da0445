//! Line parsing
//!
//! Splits one input line into the nine positional fields of the header. No
//! semantic checks happen here.

use crate::schema::{FIELD_COUNT, HEADER};

/// Remove every whitespace character from a line
#[must_use]
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The nine raw fields of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// The whitespace-stripped line, echoed in diagnostics
    pub line: String,
    fields: [String; FIELD_COUNT],
}

impl RawRecord {
    /// Field at a header position, empty for missing positions
    #[must_use]
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.field(0)
    }

    #[must_use]
    pub fn date(&self) -> &str {
        self.field(1)
    }

    #[must_use]
    pub fn age(&self) -> &str {
        self.field(2)
    }

    #[must_use]
    pub fn gender(&self) -> &str {
        self.field(3)
    }

    #[must_use]
    pub fn region_code(&self) -> &str {
        self.field(4)
    }

    #[must_use]
    pub fn district_code(&self) -> &str {
        self.field(5)
    }

    #[must_use]
    pub fn imported_abroad_flag(&self) -> &str {
        self.field(6)
    }

    #[must_use]
    pub fn country_code(&self) -> &str {
        self.field(7)
    }

    #[must_use]
    pub fn reported_flag(&self) -> &str {
        self.field(8)
    }
}

/// Parse one raw line
///
/// Returns `None` for blank lines and header lines, which are skipped silently.
/// Missing trailing fields become empty strings and extra fields are ignored.
#[must_use]
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let stripped = strip_whitespace(line);
    if stripped.is_empty() || stripped == HEADER {
        return None;
    }

    let mut fields: [String; FIELD_COUNT] = Default::default();
    for (slot, value) in fields.iter_mut().zip(stripped.split(',')) {
        *slot = value.to_string();
    }

    Some(RawRecord {
        line: stripped,
        fields,
    })
}
