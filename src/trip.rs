use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CalendarDay, DateRange, GuestList, Limits, ValidationError, validate_destination};

/// Which half of the new-trip form is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepForm {
    /// Destination and dates.
    #[default]
    TripDetails,
    /// Guest e-mails; destination and dates are read-only.
    AddEmails,
}

impl StepForm {
    pub const fn details_editable(self) -> bool {
        matches!(self, Self::TripDetails)
    }

    /// "Change place/date": back to the details step, from either step.
    #[must_use]
    pub const fn back(self) -> Self {
        Self::TripDetails
    }
}

/// Outcome of pressing the form's main button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Step(StepForm),
    Confirm(TripRequest),
}

/// Body of the create-trip call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination:      String,
    pub starts_at:        String,
    pub ends_at:          String,
    pub emails_to_invite: Vec<String>,
}

/// Everything typed into the new-trip form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripDraft {
    destination: String,
    range:       DateRange,
    guests:      GuestList,
}

impl TripDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    /// Feeds a calendar click through [`crate::reconcile`] and keeps the result.
    pub fn select_day(&mut self, day: CalendarDay) -> &DateRange {
        self.range = self.range.reconcile(day);
        &self.range
    }

    pub fn clear_dates(&mut self) {
        self.range = DateRange::empty();
    }

    pub const fn guests(&self) -> &GuestList {
        &self.guests
    }

    pub fn guests_mut(&mut self) -> &mut GuestList {
        &mut self.guests
    }

    /// Moves the form forward from `step`.
    ///
    /// From `TripDetails` the destination and a complete date range are
    /// required before guests can be added; from `AddEmails` the same checks
    /// run again and the request to send is returned.
    ///
    /// # Errors
    /// `DestinationTooShort` or `IncompleteRange` when the draft is not ready.
    pub fn advance(&self, step: StepForm, limits: &Limits) -> Result<Advance, ValidationError> {
        validate_destination(&self.destination, limits.destination_min_len)?;
        let Some((starts_at, ends_at)) = self.range.to_timestamps() else {
            debug!(range = %self.range, "trip dates incomplete");
            return Err(ValidationError::IncompleteRange);
        };

        match step {
            StepForm::TripDetails => Ok(Advance::Step(StepForm::AddEmails)),
            StepForm::AddEmails => Ok(Advance::Confirm(TripRequest {
                destination: self.destination.trim().to_owned(),
                starts_at,
                ends_at,
                emails_to_invite: self.guests.to_vec(),
            })),
        }
    }
}
