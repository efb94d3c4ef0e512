//! Pipeline configuration: business hours, durations and meeting details.
//!
//! Every tunable travels in an [`AvailabilityConfig`] value, so independent
//! configurations can run side by side. The TOML form mirrors the struct:
//!
//! ```toml
//! business_hours_start = "09:00"
//! business_hours_end = "18:00"
//! min_meeting_minutes = 30
//! slot_minutes = 30
//! days = 3
//!
//! [meeting]
//! title = "Intro call"
//! email = "me@example.com"
//! zoom_link = "https://zoom.us/j/123"
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::BusinessWindow;
use crate::workdays::WorkWeek;

/// Details copied into every booking link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingDetails {
    pub title: String,
    /// Attendee added to the booked event.
    pub email: Option<String>,
    pub zoom_link: Option<String>,
}

impl Default for MeetingDetails {
    fn default() -> Self {
        Self {
            title: "Meeting".to_string(),
            email: None,
            zoom_link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    #[serde(with = "hhmm")]
    pub business_hours_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub business_hours_end: NaiveTime,
    /// Shortest free gap worth reporting.
    pub min_meeting_minutes: i64,
    /// Length of one grid step.
    pub slot_minutes: i64,
    /// How many days to evaluate.
    pub days: usize,
    pub include_saturday: bool,
    pub include_sunday: bool,
    pub meeting: MeetingDetails,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            business_hours_start: hour(9),
            business_hours_end: hour(18),
            min_meeting_minutes: 30,
            slot_minutes: 30,
            days: 3,
            include_saturday: false,
            include_sunday: false,
            meeting: MeetingDetails::default(),
        }
    }
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl AvailabilityConfig {
    /// Parse a TOML document; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidConfig` if the document does not parse or
    /// fails [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| SlotError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject business hours that close before they open.
    ///
    /// Non-positive durations are allowed; they simply produce empty results.
    pub fn validate(&self) -> Result<()> {
        if self.business_hours_end <= self.business_hours_start {
            return Err(SlotError::InvalidConfig(format!(
                "business hours end ({}) must be after start ({})",
                self.business_hours_end.format("%H:%M"),
                self.business_hours_start.format("%H:%M"),
            )));
        }
        Ok(())
    }

    pub fn work_week(&self) -> WorkWeek {
        WorkWeek {
            include_saturday: self.include_saturday,
            include_sunday: self.include_sunday,
        }
    }

    pub fn window_for(&self, day: NaiveDate) -> BusinessWindow {
        BusinessWindow::for_day(day, self.business_hours_start, self.business_hours_end)
    }
}

/// `"HH:MM"` (seconds optional) for business hours.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|_| de::Error::custom(format!("expected HH:MM, got '{}'", s)))
    }
}
