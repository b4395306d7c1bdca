use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{CalendarDay, OPEN_BOUND, ParseError, RANGE_SEPARATOR};

/// A start/end selection under construction on the calendar.
///
/// `end` is only ever present together with `start`, and `start <= end`
/// whenever both are set. A single-day selection has `start == end`.
/// Values are replaced on every click, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    start: Option<CalendarDay>,
    end:   Option<CalendarDay>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDay, end: CalendarDay },

    /// An end was given without a start.
    #[error("Invalid date range: end ({end}) has no start")]
    EndWithoutStart { end: CalendarDay },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Applies one day click to the current selection.
///
/// - nothing selected yet: the click starts a range
/// - only a start: a click before it swaps (click becomes start, old start
///   becomes end), anything else becomes the end
/// - complete range: the click starts over, even on the current end
pub fn reconcile(current: &DateRange, clicked: CalendarDay) -> DateRange {
    match (current.start, current.end) {
        (None, _) => {
            trace!(%clicked, "starting new range");
            DateRange::starting(clicked)
        },
        (Some(start), None) if clicked < start => {
            trace!(%clicked, %start, "click before start, swapping");
            DateRange {
                start: Some(clicked),
                end:   Some(start),
            }
        },
        (Some(start), None) => {
            trace!(%start, end = %clicked, "closing range");
            DateRange {
                start: Some(start),
                end:   Some(clicked),
            }
        },
        (Some(_), Some(_)) => {
            trace!(%clicked, "range already complete, restarting");
            DateRange::starting(clicked)
        },
    }
}

impl DateRange {
    /// Nothing selected.
    pub const fn empty() -> Self {
        Self { start: None, end: None }
    }

    /// Start picked, end pending.
    pub const fn starting(start: CalendarDay) -> Self {
        Self {
            start: Some(start),
            end:   None,
        }
    }

    /// Creates a complete range.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDay, end: CalendarDay) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self {
            start: Some(start),
            end:   Some(end),
        })
    }

    pub const fn start(&self) -> Option<CalendarDay> {
        self.start
    }

    pub const fn end(&self) -> Option<CalendarDay> {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Method form of [`reconcile`].
    #[must_use]
    pub fn reconcile(self, clicked: CalendarDay) -> Self {
        reconcile(&self, clicked)
    }

    /// Every selected day in order. A start-only range yields just the start.
    pub fn days(&self) -> Days {
        Days {
            next: self.start,
            last: self.end.or(self.start),
        }
    }

    pub fn len_days(&self) -> usize {
        self.days().count()
    }

    pub fn contains(&self, day: &CalendarDay) -> bool {
        match (self.start, self.end.or(self.start)) {
            (Some(start), Some(end)) => start <= *day && *day <= end,
            _ => false,
        }
    }

    /// `(starts_at, ends_at)` as midnight ISO 8601 timestamps, once complete.
    pub fn to_timestamps(&self) -> Option<(String, String)> {
        let (start, end) = self.start.zip(self.end)?;
        Some((start.at_hour(0), end.at_hour(0)))
    }
}

/// Iterator over the days of a [`DateRange`], both ends inclusive.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CalendarDay>,
    last: Option<CalendarDay>,
}

impl Iterator for Days {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if Some(current) == self.last { None } else { current.succ() };
        Some(current)
    }
}

impl std::iter::FusedIterator for Days {}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<CalendarDay>| d.map_or_else(|| OPEN_BOUND.to_owned(), |d| d.to_string());
        write!(f, "{}{RANGE_SEPARATOR}{}", bound(self.start), bound(self.end))
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        let Some((start_str, end_str)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if separator_count > 1 {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            )));
        }

        let bound = |part: &str| -> Result<Option<CalendarDay>, RangeError> {
            let part = part.trim();
            if part == OPEN_BOUND { Ok(None) } else { Ok(Some(part.parse()?)) }
        };

        RawDateRange {
            start: bound(start_str)?,
            end:   bound(end_str)?,
        }
        .try_into()
    }
}

#[derive(Serialize, Deserialize)]
struct RawDateRange {
    #[serde(default)]
    start: Option<CalendarDay>,
    #[serde(default)]
    end:   Option<CalendarDay>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = RangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        match (raw.start, raw.end) {
            (None, None) => Ok(Self::empty()),
            (Some(start), None) => Ok(Self::starting(start)),
            (Some(start), Some(end)) => Self::new(start, end),
            (None, Some(end)) => Err(RangeError::EndWithoutStart { end }),
        }
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end:   range.end,
        }
    }
}
