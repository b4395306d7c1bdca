use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CalendarDay;

/// A form value the trip screens refuse to submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("destination must have at least {min} characters")]
    DestinationTooShort { min: usize },

    #[error("invalid e-mail: {0}")]
    InvalidEmail(String),

    #[error("{0} is already invited")]
    DuplicateGuest(String),

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("{0} is not one of the trip's days")]
    DateOutsideTrip(CalendarDay),

    #[error("invalid hour {0:?} (expected 0-23)")]
    InvalidHour(String),

    #[error("pick both a start and an end date")]
    IncompleteRange,
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email.trim()))
}

/// Checks the trimmed destination is at least `min_len` characters long.
///
/// # Errors
/// Returns `ValidationError::DestinationTooShort` otherwise.
pub fn validate_destination(destination: &str, min_len: usize) -> Result<(), ValidationError> {
    if destination.trim().chars().count() < min_len {
        debug!(destination, min_len, "destination too short");
        return Err(ValidationError::DestinationTooShort { min: min_len });
    }
    Ok(())
}

/// E-mails to invite, in the order they were added, without duplicates.
///
/// Addresses are stored trimmed and lowercased so `Ana@Mail.com` and
/// `ana@mail.com ` count as the same guest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestList(Vec<String>);

impl GuestList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a guest and returns the stored (normalized) address.
    ///
    /// # Errors
    /// `InvalidEmail` when the address does not look like an e-mail,
    /// `DuplicateGuest` when it is already on the list.
    pub fn add(&mut self, email: &str) -> Result<&str, ValidationError> {
        let normalized = email.trim().to_lowercase();
        if !is_valid_email(&normalized) {
            debug!(email, "rejected guest e-mail");
            return Err(ValidationError::InvalidEmail(email.trim().to_owned()));
        }
        if self.contains(&normalized) {
            debug!(email = %normalized, "guest already invited");
            return Err(ValidationError::DuplicateGuest(normalized));
        }
        self.0.push(normalized);
        Ok(self.0.last().map_or("", String::as_str))
    }

    /// Removes a guest; returns whether it was on the list.
    pub fn remove(&mut self, email: &str) -> bool {
        let normalized = email.trim().to_lowercase();
        let before = self.0.len();
        self.0.retain(|guest| *guest != normalized);
        self.0.len() != before
    }

    pub fn contains(&self, email: &str) -> bool {
        let normalized = email.trim().to_lowercase();
        self.0.iter().any(|guest| *guest == normalized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}
