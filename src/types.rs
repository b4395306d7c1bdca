use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MONTH_NAMES, SHORT_MONTH_LEN, WEEKDAY_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English name, e.g. "March"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }

    /// Abbreviated English name, e.g. "Mar"
    pub fn short_name(self) -> &'static str {
        let name = self.name();
        name.get(..SHORT_MONTH_LEN).unwrap_or(name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for the year and month it was
/// built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// Weekday of a proleptic Gregorian date (Sakamoto's method).
    pub(crate) fn of(year: Year, month: Month, day: Day) -> Self {
        const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let m = u32::from(month.get());
        let y = u32::from(year.get()) - u32::from(m < 3);
        let index = (y + y / 4 - y / 100 + y / 400 + OFFSETS[(m - 1) as usize] + u32::from(day.get())) % 7;
        Self::ALL[index as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: u16, m: u8, d: u8) -> (Year, Month, Day) {
        let year = Year::new(y).expect("valid year");
        let month = Month::new(m).expect("valid month");
        let day = Day::new(d, year, month).expect("valid day");
        (year, month, day)
    }

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_display_is_padded() {
        assert_eq!(Year::new(2024).expect("valid year").to_string(), "2024");
        assert_eq!(Year::new(33).expect("valid year").to_string(), "0033");
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        let march = Month::new(3).expect("valid month");
        assert_eq!(march.name(), "March");
        assert_eq!(march.short_name(), "Mar");
        assert_eq!(Month::new(5).expect("valid month").short_name(), "May");
        assert_eq!(Month::new(9).expect("valid month").short_name(), "Sep");
    }

    #[test]
    fn test_day_respects_month_length() {
        let y2023 = Year::new(2023).expect("valid year");
        let y2024 = Year::new(2024).expect("valid year");
        let feb = Month::new(2).expect("valid month");
        let apr = Month::new(4).expect("valid month");

        assert!(Day::new(28, y2023, feb).is_ok());
        assert!(Day::new(29, y2023, feb).is_err());
        assert!(Day::new(29, y2024, feb).is_ok());
        assert!(Day::new(30, y2024, apr).is_ok());
        assert!(matches!(
            Day::new(31, y2024, apr),
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(matches!(Day::new(0, y2024, apr), Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_weekday_cases() {
        struct TestCase {
            date:     (u16, u8, u8),
            expected: Weekday,
        }

        let cases = [
            TestCase {
                date:     (2024, 3, 12),
                expected: Weekday::Tuesday,
            },
            TestCase {
                date:     (2024, 2, 29),
                expected: Weekday::Thursday,
            },
            TestCase {
                date:     (2000, 1, 1),
                expected: Weekday::Saturday,
            },
            TestCase {
                date:     (1970, 1, 1),
                expected: Weekday::Thursday,
            },
            TestCase {
                date:     (2023, 12, 31),
                expected: Weekday::Sunday,
            },
        ];

        for case in &cases {
            let (y, m, d) = ymd(case.date.0, case.date.1, case.date.2);
            assert_eq!(Weekday::of(y, m, d), case.expected, "weekday of {:?}", case.date);
        }
    }

    #[test]
    fn test_weekday_name_matches_display() {
        assert_eq!(Weekday::Wednesday.name(), "Wednesday");
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_is_leap_year_cases() {
        for (year, leap) in [(2020, true), (2023, false), (1900, false), (2000, true), (2100, false)] {
            assert_eq!(is_leap_year(year), leap, "Year {year}");
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(days_in_month(2023, month), expected[month as usize], "Month {month}");
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
