//! Compare two `MM/DD/YYYY` dates, optionally followed by a time of day.
//!
//! Each input goes through the same pipeline:
//!
//! 1. [`extract_raw_date`] pulls out the raw month, day and year fields.
//! 2. [`validate_triple`] range checks each field on its own.
//! 3. [`compare_fields`] compares the normalized fields of both inputs.
//! 4. [`to_calendar_date`] builds a real [`CalendarDate`], rejecting days
//!    that do not exist, and [`compare_calendar`] orders the two dates.
//!
//! [`compare_dates`] runs all of it and stops at the first failure.
//!
//! ```
//! use date_compare::{DateOrdering, compare_dates};
//!
//! let outcome = compare_dates("01/05/2021", "1/5/2021 10:30:00").unwrap();
//! assert!(outcome.fields_match);
//! assert_eq!(outcome.ordering, DateOrdering::Equal);
//! ```

mod calendar;
mod compare;
mod consts;
mod normalize;
mod parse;
mod prelude;
mod report;
#[cfg(test)]
mod test_utils;
mod types;
mod validate;

pub use calendar::{CalendarDate, CalendarError, DateOrdering, compare_calendar, to_calendar_date};
pub use compare::compare_fields;
pub use consts::*;
pub use normalize::{NormalizedField, normalize};
pub use parse::{DateFieldTriple, ParseError, extract_raw_date};
pub use report::{Comparison, Rejection, Side};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{
    FieldError, ValidatedTriple, sanitize_year, validate_day, validate_month, validate_triple,
    validate_year,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Stage at which a comparison was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input does not have the `MM/DD/YYYY` shape
    MalformedDate,
    /// A field is outside its numeric range
    InvalidField,
    /// Fields are in range but the day does not exist
    InvalidCalendarDate,
}

/// Why a comparison produced no result, and for which input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("{side} date is malformed: {source}")]
    MalformedDate { side: Side, source: ParseError },

    #[error("{side} date has an invalid component: {source}")]
    InvalidField { side: Side, source: FieldError },

    #[error("{side} date is not a calendar date: {source}")]
    InvalidCalendarDate { side: Side, source: CalendarError },
}

impl CompareError {
    pub const fn side(&self) -> Side {
        match self {
            Self::MalformedDate { side, .. }
            | Self::InvalidField { side, .. }
            | Self::InvalidCalendarDate { side, .. } => *side,
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedDate { .. } => ErrorKind::MalformedDate,
            Self::InvalidField { .. } => ErrorKind::InvalidField,
            Self::InvalidCalendarDate { .. } => ErrorKind::InvalidCalendarDate,
        }
    }
}

fn parse_side(side: Side, input: &str) -> Result<DateFieldTriple, CompareError> {
    extract_raw_date(input).map_err(|source| CompareError::MalformedDate { side, source })
}

fn validate_side(side: Side, triple: DateFieldTriple) -> Result<ValidatedTriple, CompareError> {
    validate_triple(triple).map_err(|source| CompareError::InvalidField { side, source })
}

fn calendar_side(side: Side, triple: &ValidatedTriple) -> Result<CalendarDate, CompareError> {
    to_calendar_date(triple.year(), triple.month(), triple.day())
        .map_err(|source| CompareError::InvalidCalendarDate { side, source })
}

/// Parses, validates and compares `base` against `compare`.
///
/// Both inputs are parsed before either is validated, and both are validated
/// before any calendar date is built, so a malformed compare date is reported
/// ahead of an out of range base field.
///
/// # Errors
/// Returns the first `CompareError` hit. No partial result is produced.
pub fn compare_dates(base: &str, compare: &str) -> Result<Comparison, CompareError> {
    let result = run_pipeline(base, compare);
    if let Err(err) = &result {
        debug!(side = %err.side(), kind = ?err.kind(), %err, "comparison rejected");
    }
    result
}

fn run_pipeline(base: &str, compare: &str) -> Result<Comparison, CompareError> {
    let base_triple = parse_side(Side::Base, base)?;
    let compare_triple = parse_side(Side::Compare, compare)?;

    let base_valid = validate_side(Side::Base, base_triple)?;
    let compare_valid = validate_side(Side::Compare, compare_triple)?;

    let fields_match = compare_fields(base_valid.raw(), compare_valid.raw());

    let base_date = calendar_side(Side::Base, &base_valid)?;
    let compare_date = calendar_side(Side::Compare, &compare_valid)?;
    let ordering = compare_calendar(&base_date, &compare_date);

    info!(
        base = %base_date,
        compare = %compare_date,
        fields_match,
        ordering = ?ordering,
        "compared dates"
    );

    Ok(Comparison {
        base: base_date,
        compare: compare_date,
        fields_match,
        ordering,
    })
}
