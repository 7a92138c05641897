use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use tracing::{debug, trace};

use crate::{MONTH_FIRST_SEPARATOR, consts::FIELD_COUNT, prelude::*};

/// Leading `M/D/YYYY` shape. Only ASCII digits count; whatever follows the
/// year (usually an `HH:mm:SS` time) is ignored.
#[allow(clippy::expect_used)]
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,2}/[0-9]{1,2}/[0-9]{4})").expect("date shape pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Malformed date {_0:?}: expected MM/DD/YYYY with an optional HH:mm:SS time")]
    MalformedDate(String),
}

impl std::error::Error for ParseError {}

/// The raw (month, day, year) strings pulled out of one input, in that order.
/// Nothing about their values has been checked yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{month}/{day}/{year}")]
pub struct DateFieldTriple {
    month: String,
    day:   String,
    year:  String,
}

impl DateFieldTriple {
    pub fn new(month: impl Into<String>, day: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            day:   day.into(),
            year:  year.into(),
        }
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    /// The year field as extracted. May carry trailing noise when the triple
    /// was built by hand; see [`crate::sanitize_year`].
    pub fn year(&self) -> &str {
        &self.year
    }
}

impl FromStr for DateFieldTriple {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_raw_date(s)
    }
}

/// Pulls the month, day and year fields out of `input`.
///
/// Leading whitespace is skipped and anything after the four digit year is
/// dropped, so `"1/1/2021 10:30:00"` yields `("1", "1", "2021")`.
///
/// # Errors
/// Returns `ParseError::MalformedDate` if `input` does not start with the
/// `M/D/YYYY` shape (one or two digit month and day, four digit year).
pub fn extract_raw_date(input: &str) -> Result<DateFieldTriple, ParseError> {
    let malformed = || ParseError::MalformedDate(input.to_owned());

    let Some(found) = DATE_SHAPE.captures(input).and_then(|caps| caps.get(1)) else {
        debug!(input, "input does not have a date shape");
        return Err(malformed());
    };

    let fields: Vec<&str> = found.as_str().split(MONTH_FIRST_SEPARATOR).collect();
    let [month, day, year] = fields.as_slice() else {
        debug!(
            input,
            found = fields.len(),
            expected = FIELD_COUNT,
            "wrong number of date fields"
        );
        return Err(malformed());
    };

    trace!(month, day, year, ignored = &input[found.end()..], "extracted date fields");
    Ok(DateFieldTriple::new(*month, *day, *year))
}
