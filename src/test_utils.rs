#![allow(clippy::unwrap_used)]

use crate::{
    CalendarDate,
    types::{Month, Year},
};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn date(y: u16, m: u8, d: u8) -> CalendarDate {
    CalendarDate::from_parts(y, m, d).unwrap()
}
