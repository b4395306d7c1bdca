use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CalendarDay, DateRange, MAX_HOUR, MAX_MINUTE, ParseError, ValidationError, Weekday};

/// Which dialog the activities screen is showing.
///
/// The date picker is only reachable from the new-activity form and hands
/// control back to it when closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modal {
    #[default]
    None,
    Calendar,
    NewActivity,
}

impl Modal {
    /// "New activity" pressed.
    #[must_use]
    pub const fn open_new_activity(self) -> Self {
        Self::NewActivity
    }

    /// Date field pressed; ignored unless the new-activity form is open.
    #[must_use]
    pub const fn pick_date(self) -> Self {
        match self {
            Self::NewActivity | Self::Calendar => Self::Calendar,
            Self::None => Self::None,
        }
    }

    /// Close or confirm: the calendar returns to the form, the form closes.
    #[must_use]
    pub const fn close(self) -> Self {
        match self {
            Self::Calendar => Self::NewActivity,
            Self::NewActivity | Self::None => Self::None,
        }
    }

    /// After an activity is saved every dialog is dismissed.
    #[must_use]
    pub const fn saved(self) -> Self {
        Self::None
    }
}

/// A validated "new activity" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    title: String,
    date:  CalendarDay,
    hour:  u8,
}

/// Body of the create-activity call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRequest {
    #[serde(rename = "tripId")]
    pub trip_id:   String,
    pub occurs_at: String,
    pub title:     String,
}

impl ActivityDraft {
    /// Builds a draft from raw form input. `hour` is a whole hour, `0`-`23`,
    /// and `date` must fall inside `trip`.
    ///
    /// # Errors
    /// `MissingField` when the title, date or hour is blank, `DateOutsideTrip`
    /// when the day is not one of the trip's days, `InvalidHour` when the hour
    /// is not a number in range.
    pub fn new(title: &str, date: Option<CalendarDay>, hour: &str, trip: &DateRange) -> Result<Self, ValidationError> {
        let title = title.trim();
        let hour = hour.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        let Some(date) = date else {
            return Err(ValidationError::MissingField("date"));
        };
        if hour.is_empty() {
            return Err(ValidationError::MissingField("hour"));
        }
        if !trip.contains(&date) {
            debug!(%date, %trip, "activity day outside trip");
            return Err(ValidationError::DateOutsideTrip(date));
        }

        let parsed = hour.parse::<u8>().ok().filter(|h| *h <= MAX_HOUR);
        let Some(hour_value) = parsed else {
            debug!(hour, "rejected activity hour");
            return Err(ValidationError::InvalidHour(hour.to_owned()));
        };

        Ok(Self {
            title: title.to_owned(),
            date,
            hour: hour_value,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn date(&self) -> CalendarDay {
        self.date
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// The picked day plus the picked hour, e.g. `2024-03-12T14:00:00`.
    pub fn occurs_at(&self) -> String {
        self.date.at_hour(self.hour)
    }

    pub fn into_request(self, trip_id: impl Into<String>) -> ActivityRequest {
        ActivityRequest {
            trip_id:   trip_id.into(),
            occurs_at: self.occurs_at(),
            title:     self.title,
        }
    }
}

/// Minute-precision local time of an activity, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OccursAt {
    day:    CalendarDay,
    hour:   u8,
    minute: u8,
}

impl OccursAt {
    /// # Errors
    /// Returns `ParseError::InvalidFormat` when the hour or minute is out of range.
    pub fn new(day: CalendarDay, hour: u8, minute: u8) -> Result<Self, ParseError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE {
            return Err(ParseError::InvalidFormat(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { day, hour, minute })
    }

    pub const fn day(&self) -> CalendarDay {
        self.day
    }

    /// Twelve-hour clock label, e.g. `"02:30h"` for 14:30 and `"12:05h"` for 00:05.
    pub fn hour_label(&self) -> String {
        let twelve = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{twelve:02}:{:02}h", self.minute)
    }
}

impl fmt::Display for OccursAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{:02}:{:02}:00", self.day, self.hour, self.minute)
    }
}

impl FromStr for OccursAt {
    type Err = ParseError;

    /// Accepts `YYYY-MM-DDTHH:MM`, ignoring seconds, fractions and offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (date, time) = trimmed
            .split_once('T')
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;

        let clock = time.get(..5).unwrap_or(time);
        let Some((hh, mm)) = clock.split_once(':') else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };
        let digits = |part: &str| -> Result<u8, ParseError> {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidFormat(trimmed.to_owned()));
            }
            part.parse().map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))
        };

        Self::new(date.parse()?, digits(hh)?, digits(mm)?)
    }
}

/// One row of the activities list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub title:      String,
    pub hour_label: String,
    pub is_past:    bool,
}

impl ActivityItem {
    /// `now` is passed in so the projection stays deterministic.
    pub fn new(title: impl Into<String>, occurs_at: OccursAt, now: OccursAt) -> Self {
        Self {
            title:      title.into(),
            hour_label: occurs_at.hour_label(),
            is_past:    occurs_at < now,
        }
    }
}

/// Section title for one day in the activities list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayHeading {
    pub day_number: u8,
    pub weekday:    Weekday,
}

impl DayHeading {
    pub fn for_day(day: CalendarDay) -> Self {
        Self {
            day_number: day.day().get(),
            weekday:    day.weekday(),
        }
    }

    pub const fn day_name(&self) -> &'static str {
        self.weekday.name()
    }
}
