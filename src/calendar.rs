use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, MONTH_FIRST_SEPARATOR, normalize,
    prelude::*,
    types::{Day, Month, Year},
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {_0}")]
    InvalidDay(u8),
    #[display(fmt = "No such date: day {day} does not exist in {year:04}-{month:02}")]
    InvalidCalendarDate { year: u16, month: u8, day: u8 },
}

impl std::error::Error for CalendarError {}

/// A day that exists on the proleptic Gregorian calendar.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Where the base date falls relative to the compare date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrdering {
    #[display(fmt = "before")]
    Before,
    #[display(fmt = "on the same day as")]
    Equal,
    #[display(fmt = "after")]
    After,
}

impl From<Ordering> for DateOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Before,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::After,
        }
    }
}

impl From<DateOrdering> for Ordering {
    fn from(ordering: DateOrdering) -> Self {
        match ordering {
            DateOrdering::Before => Self::Less,
            DateOrdering::Equal => Self::Equal,
            DateOrdering::After => Self::Greater,
        }
    }
}

impl CalendarDate {
    /// Builds a date from already validated components
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from plain numbers, checking the day against the month
    ///
    /// # Errors
    /// Returns `CalendarError` if any component is out of range or the day
    /// does not exist in that month.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Renders as `MM/DD/YYYY`
    pub fn to_month_first(&self) -> String {
        format!(
            "{month}{sep}{day}{sep}{year}",
            month = self.month,
            day = self.day,
            year = self.year,
            sep = MONTH_FIRST_SEPARATOR
        )
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, CalendarError> {
        s.parse::<u16>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, CalendarError> {
        s.parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses the ISO `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(s.to_owned()));
        };

        // Parse components - InvalidFormat if not numeric
        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;

        Self::from_parts(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Builds a calendar date from a sanitized year and raw month and day fields.
///
/// Month and day are normalized first, then the `YYYY-MM-DD` composite is
/// parsed as a real date.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarDate` for a day that does not exist
/// in that month (`02/29/2021`, `04/31/2020`), `CalendarError::InvalidYear`
/// for year `0000`, and `CalendarError::InvalidFormat` for non-numeric input.
pub fn to_calendar_date(year: &str, month: &str, day: &str) -> Result<CalendarDate, CalendarError> {
    let iso = format!(
        "{year}{sep}{month}{sep}{day}",
        month = normalize(month),
        day = normalize(day),
        sep = DATE_SEPARATOR
    );

    match iso.parse::<CalendarDate>() {
        Ok(date) => {
            trace!(%date, "built calendar date");
            Ok(date)
        }
        Err(err) => {
            debug!(iso = %iso, %err, "not a calendar date");
            Err(err)
        }
    }
}

/// Chronological position of `base` relative to `compare`.
pub fn compare_calendar(base: &CalendarDate, compare: &CalendarDate) -> DateOrdering {
    base.cmp(compare).into()
}
