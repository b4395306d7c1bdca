mod activity;
mod config;
mod consts;
mod label;
mod marking;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod trip;
mod types;
mod validate;

pub use activity::{ActivityDraft, ActivityItem, ActivityRequest, DayHeading, Modal, OccursAt};
pub use config::{CalendarConfig, ConfigError, LabelStyle, Limits, MarkingStyle, MonthFormat};
pub use consts::*;
pub use label::{derive_label, trip_summary};
pub use marking::{DayMarking, MarkedDates, derive_marked_dates};
pub use range::{DateRange, Days, RangeError, reconcile};
pub use trip::{Advance, StepForm, TripDraft, TripRequest};
pub use types::{Day, Month, Weekday, Year};
pub use validate::{GuestList, ValidationError, is_valid_email, validate_destination};

use crate::prelude::*;
use std::str::FromStr;
use types::days_in_month;

/// A single selectable calendar cell, identified by its ISO `YYYY-MM-DD` date.
///
/// Field order makes the derived ordering chronological, which is the same
/// order as comparing the ISO strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct CalendarDay {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDay {
    /// Creates a day from already validated components
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a day from raw numbers, validating each component
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
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

    pub fn weekday(&self) -> Weekday {
        Weekday::of(self.year, self.month, self.day)
    }

    /// The following calendar day, rolling over months and years.
    /// Returns `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = next_day(self.year.get(), self.month.get(), self.day.get())?;
        Self::from_ymd(y, m, d).ok()
    }

    /// ISO 8601 local timestamp at the given hour, e.g. `2024-03-12T14:00:00`
    pub fn at_hour(&self, hour: u8) -> String {
        format!("{self}T{hour:02}:00:00")
    }
}

// --- day arithmetic ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        if year >= MAX_YEAR { None } else { Some((year + 1, JANUARY)) }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year, month, day + 1))
    } else {
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

impl FromStr for CalendarDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY-MM-DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        Self::from_ymd(parse_component(y)?, parse_component(m)?, parse_component(d)?)
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
