//! Shorthand constructors for tests.

use crate::{CalendarDay, DateRange};

pub fn day(year: u16, month: u8, day: u8) -> CalendarDay {
    CalendarDay::from_ymd(year, month, day).expect("test day must be valid")
}

pub fn started(start: CalendarDay) -> DateRange {
    DateRange::starting(start)
}

pub fn complete(start: CalendarDay, end: CalendarDay) -> DateRange {
    DateRange::new(start, end).expect("test range must be ordered")
}
