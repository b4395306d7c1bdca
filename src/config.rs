//! Presentation and validation settings.
//!
//! Everything has a default matching the app's palette and form rules, so an
//! empty TOML document is a valid configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    DEFAULT_DESTINATION_DISPLAY_LEN, DEFAULT_DESTINATION_MIN_LEN, DEFAULT_MARK_COLOR,
    DEFAULT_MARK_TEXT_COLOR, Month,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse calendar config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid calendar config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub marking: MarkingStyle,
    pub label:   LabelStyle,
    pub limits:  Limits,
}

/// Colours applied to every marked day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkingStyle {
    pub color:      String,
    pub text_color: String,
}

impl Default for MarkingStyle {
    fn default() -> Self {
        Self {
            color:      DEFAULT_MARK_COLOR.to_owned(),
            text_color: DEFAULT_MARK_TEXT_COLOR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelStyle {
    pub month: MonthFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFormat {
    /// "Mar"
    #[default]
    Short,
    /// "March"
    Long,
}

impl MonthFormat {
    pub fn render(self, month: Month) -> &'static str {
        match self {
            Self::Short => month.short_name(),
            Self::Long => month.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Minimum destination length, in characters, after trimming
    pub destination_min_len:     usize,
    /// Destination characters kept by the trip summary
    pub destination_display_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            destination_min_len:     DEFAULT_DESTINATION_MIN_LEN,
            destination_display_len: DEFAULT_DESTINATION_DISPLAY_LEN,
        }
    }
}

impl CalendarConfig {
    /// Parses a TOML document, filling unset keys with defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed TOML or unknown keys, and
    /// `ConfigError::Invalid` when a value makes no sense (empty colour,
    /// zero-length summary).
    #[tracing::instrument(skip(input))]
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(input)?;
        cfg.validate()?;
        debug!(month = ?cfg.label.month, color = %cfg.marking.color, "calendar config loaded");
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.marking.color.trim().is_empty() {
            return Err(ConfigError::Invalid("marking.color must not be empty".to_owned()));
        }
        if self.marking.text_color.trim().is_empty() {
            return Err(ConfigError::Invalid("marking.text_color must not be empty".to_owned()));
        }
        if self.limits.destination_display_len == 0 {
            return Err(ConfigError::Invalid(
                "limits.destination_display_len must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
