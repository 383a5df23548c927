//! Civil calendar dates and holiday lookup.
//!
//! Dates here never carry a time of day or a timezone, so comparisons are
//! made on the calendar day alone.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::models::{HolidayRow, PricingError};

/// A calendar day with no time-of-day or timezone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month and day. Returns `None` for days that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// ISO day of week, Monday = 1 through Sunday = 7.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn is_monday(&self) -> bool {
        self.day_of_week() == 1
    }

    /// Same civil day, compared on year and day-of-year.
    pub fn same_day(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.day_of_year() == other.day_of_year()
    }
}

impl FromStr for CalendarDate {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| PricingError::InvalidDateFormat {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parse an optional visit date.
///
/// Absent and empty input both mean "no date". Anything else must be a real
/// `YYYY-MM-DD` calendar day, otherwise `InvalidDateFormat` is returned.
pub fn parse_date(input: Option<&str>) -> Result<Option<CalendarDate>, PricingError> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.parse::<CalendarDate>().map(Some),
    }
}

/// Lookup capability answering whether a date is a recorded holiday.
pub trait HolidayCalendar {
    fn is_holiday(&self, date: CalendarDate) -> bool;
}

/// Snapshot of the holiday calendar for a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: Vec<CalendarDate>,
}

impl HolidaySet {
    pub fn new(dates: Vec<CalendarDate>) -> Self {
        Self { dates }
    }

    /// Build the set from stored holiday rows, parsing each date string.
    pub fn from_rows(rows: &[HolidayRow]) -> Result<Self, PricingError> {
        let dates = rows
            .iter()
            .map(|row| row.holiday.parse::<CalendarDate>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dates })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_holiday(&self, date: CalendarDate) -> bool {
        self.dates.iter().any(|holiday| holiday.same_day(&date))
    }
}
