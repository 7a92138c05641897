//! Range checks on the raw fields of a [`DateFieldTriple`].
//!
//! These checks only look at each field on its own. A day of `31` is accepted
//! here even for April; whether the date exists is decided later, when a
//! [`crate::CalendarDate`] is built.

use tracing::{debug, trace};

use crate::{
    DateFieldTriple,
    consts::{FIELD_WIDTH, MAX_DAY, MAX_MONTH, MIN_DAY, YEAR_DIGITS},
    prelude::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Invalid month {_0:?} (must be 1-{})", MAX_MONTH)]
    InvalidMonth(String),
    #[display(fmt = "Invalid day {_0:?} (must be 1-{})", MAX_DAY)]
    InvalidDay(String),
    #[display(fmt = "Invalid year {_0:?} (must start with {} digits)", YEAR_DIGITS)]
    InvalidYear(String),
}

impl std::error::Error for FieldError {}

/// Value of a one or two digit ASCII field, with or without a leading zero.
fn short_number(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > FIELD_WIDTH || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// `true` for `1`-`12`, optionally zero padded (`"7"`, `"07"`, `"12"`).
pub fn validate_month(field: &str) -> bool {
    short_number(field).is_some_and(|month| (1..=MAX_MONTH).contains(&month))
}

/// `true` for `1`-`31`, optionally zero padded. Month length is not
/// considered.
pub fn validate_day(field: &str) -> bool {
    short_number(field).is_some_and(|day| (MIN_DAY..=MAX_DAY).contains(&day))
}

/// Returns the four digits a year field starts with, dropping anything after
/// them. `None` when the field does not start with four ASCII digits.
pub fn sanitize_year(field: &str) -> Option<&str> {
    let prefix = field.get(..YEAR_DIGITS)?;
    prefix.bytes().all(|b| b.is_ascii_digit()).then_some(prefix)
}

pub fn validate_year(sanitized: Option<&str>) -> bool {
    sanitized.is_some_and(|year| year.len() == YEAR_DIGITS && year.bytes().all(|b| b.is_ascii_digit()))
}

/// A [`DateFieldTriple`] whose month, day and year all passed their range
/// checks. The year is stored sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{}/{year}", "raw.month()", "raw.day()")]
pub struct ValidatedTriple {
    raw:  DateFieldTriple,
    year: String,
}

impl ValidatedTriple {
    pub fn month(&self) -> &str {
        self.raw.month()
    }

    pub fn day(&self) -> &str {
        self.raw.day()
    }

    /// Sanitized four digit year
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The triple this was validated from, year field untouched
    pub const fn raw(&self) -> &DateFieldTriple {
        &self.raw
    }
}

/// Checks every field of `triple`, reporting the first one that fails
/// (month, then day, then year).
///
/// # Errors
/// Returns the matching `FieldError` variant carrying the offending field.
pub fn validate_triple(triple: DateFieldTriple) -> Result<ValidatedTriple, FieldError> {
    if !validate_month(triple.month()) {
        debug!(month = triple.month(), "month out of range");
        return Err(FieldError::InvalidMonth(triple.month().to_owned()));
    }
    if !validate_day(triple.day()) {
        debug!(day = triple.day(), "day out of range");
        return Err(FieldError::InvalidDay(triple.day().to_owned()));
    }

    let sanitized = sanitize_year(triple.year());
    if !validate_year(sanitized) {
        debug!(year = triple.year(), "year is not four digits");
        return Err(FieldError::InvalidYear(triple.year().to_owned()));
    }
    let year = sanitized.unwrap_or_default().to_owned();

    trace!(%triple, year = %year, "fields validated");
    Ok(ValidatedTriple { raw: triple, year })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month_accepts_all_forms() {
        for m in 1..=12 {
            assert!(validate_month(&m.to_string()), "{m} should be a month");
            assert!(validate_month(&format!("{m:02}")), "{m:02} should be a month");
        }
    }

    #[test]
    fn test_validate_month_rejects() {
        for field in ["", "0", "00", "13", "19", "20", "99", "012", " 1", "1 ", "a", "+1", "-1"] {
            assert!(!validate_month(field), "{field:?} should not be a month");
        }
    }

    #[test]
    fn test_validate_day_accepts_all_forms() {
        for d in 1..=31 {
            assert!(validate_day(&d.to_string()), "{d} should be a day");
            assert!(validate_day(&format!("{d:02}")), "{d:02} should be a day");
        }
    }

    #[test]
    fn test_validate_day_rejects() {
        for field in ["", "0", "00", "32", "39", "40", "3 1", "031", "x1", "\u{0661}"] {
            assert!(!validate_day(field), "{field:?} should not be a day");
        }
    }

    #[test]
    fn test_validate_day_ignores_month_length() {
        // Existence is checked when building a calendar date
        assert!(validate_day("31"));
        assert!(validate_day("30"));
    }

    #[test]
    fn test_sanitize_year() {
        assert_eq!(sanitize_year("2021"), Some("2021"));
        assert_eq!(sanitize_year("2021abc"), Some("2021"));
        assert_eq!(sanitize_year("2021 10:30:00"), Some("2021"));
        assert_eq!(sanitize_year("20215"), Some("2021"));
        assert_eq!(sanitize_year("20"), None);
        assert_eq!(sanitize_year(""), None);
        assert_eq!(sanitize_year("20a1"), None);
        assert_eq!(sanitize_year(" 2021"), None);
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(Some("2021")));
        assert!(validate_year(Some("0000")));
        assert!(!validate_year(None));
        assert!(!validate_year(Some("202")));
        assert!(!validate_year(Some("20210")));
    }

    #[test]
    fn test_validate_triple_keeps_raw_fields() {
        let validated = validate_triple(DateFieldTriple::new("1", "05", "2021 10:30:00")).unwrap();
        assert_eq!(validated.month(), "1");
        assert_eq!(validated.day(), "05");
        assert_eq!(validated.year(), "2021");
        assert_eq!(validated.raw().year(), "2021 10:30:00");
        assert_eq!(validated.to_string(), "1/05/2021");
    }

    #[test]
    fn test_validate_triple_errors() {
        let result = validate_triple(DateFieldTriple::new("13", "01", "2020"));
        assert_eq!(result, Err(FieldError::InvalidMonth("13".to_owned())));

        let result = validate_triple(DateFieldTriple::new("12", "32", "2020"));
        assert_eq!(result, Err(FieldError::InvalidDay("32".to_owned())));

        let result = validate_triple(DateFieldTriple::new("12", "31", "20"));
        assert_eq!(result, Err(FieldError::InvalidYear("20".to_owned())));
    }

    #[test]
    fn test_validate_triple_reports_month_first() {
        let result = validate_triple(DateFieldTriple::new("00", "00", "x"));
        assert!(matches!(result, Err(FieldError::InvalidMonth(_))));
    }

    #[test]
    fn test_validate_triple_accepts_nonexistent_date() {
        assert!(validate_triple(DateFieldTriple::new("02", "30", "2021")).is_ok());
        assert!(validate_triple(DateFieldTriple::new("4", "31", "2021")).is_ok());
    }
}
