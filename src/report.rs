//! Structured outcomes handed to whatever presents them.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, CompareError, DateOrdering, ErrorKind, prelude::*};

/// Which of the two inputs a value or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[display(fmt = "base")]
    Base,
    #[display(fmt = "compare")]
    Compare,
}

/// Result of comparing two valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub base:         CalendarDate,
    pub compare:      CalendarDate,
    /// Normalized day, month and year strings are all equal
    pub fields_match: bool,
    /// Where `base` falls relative to `compare`
    pub ordering:     DateOrdering,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.fields_match { "matches" } else { "does NOT match" };
        write!(
            f,
            "Tested: base date {base} {verb} compare date {compare}; base date is {ordering} compare date",
            base = self.base.to_month_first(),
            compare = self.compare.to_month_first(),
            ordering = self.ordering,
        )
    }
}

/// Serializable form of a [`CompareError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub side:    Side,
    pub kind:    ErrorKind,
    pub message: String,
}

impl From<&CompareError> for Rejection {
    fn from(err: &CompareError) -> Self {
        Self {
            side:    err.side(),
            kind:    err.kind(),
            message: err.to_string(),
        }
    }
}
