//! Turn a saved free/busy document into [`BusyInterval`]s.
//!
//! Two shapes are accepted:
//!
//! - a free/busy query response:
//!   `{"calendars": {"primary": {"busy": [{"start": "...", "end": "..."}]}}}`
//! - a bare array: `[{"start": "...", "end": "..."}]`
//!
//! Timestamps are RFC 3339 (`2026-10-16T10:00:00Z`, `...+02:00`) or naive
//! (`2026-10-16T10:00:00`). How an offset is resolved to naive local time is
//! governed by [`TimezonePolicy`].

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{Result, SlotError};
use crate::interval::BusyInterval;

/// How offset-bearing timestamps become naive local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezonePolicy {
    /// Keep the wall-clock reading as written and discard the offset.
    /// `10:00+02:00` and `10:00Z` both become `10:00`.
    #[default]
    StripOffset,
    /// Convert to the wall clock of the given zone, then discard the zone.
    Convert(Tz),
}

impl FromStr for TimezonePolicy {
    type Err = SlotError;

    /// `"strip"` selects [`TimezonePolicy::StripOffset`]; anything else must be
    /// an IANA zone name.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("strip") {
            return Ok(Self::StripOffset);
        }
        s.parse::<Tz>()
            .map(Self::Convert)
            .map_err(|_| SlotError::InvalidConfig(format!("unknown timezone: {}", s)))
    }
}

#[derive(Deserialize)]
struct RawBusy {
    start: String,
    end: String,
}

#[derive(Deserialize)]
struct CalendarBusy {
    #[serde(default)]
    busy: Vec<RawBusy>,
}

#[derive(Deserialize)]
struct FreeBusyResponse {
    calendars: BTreeMap<String, CalendarBusy>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Response(FreeBusyResponse),
    Bare(Vec<RawBusy>),
}

/// Parse one timestamp under `policy`.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` if `s` is neither RFC 3339 nor a naive
/// `YYYY-MM-DDTHH:MM[:SS]` datetime.
pub fn parse_timestamp(s: &str, policy: TimezonePolicy) -> Result<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(match policy {
            TimezonePolicy::StripOffset => dt.naive_local(),
            TimezonePolicy::Convert(tz) => dt.with_timezone(&tz).naive_local(),
        });
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| SlotError::InvalidTimestamp(s.to_string()))
}

/// Parse a free/busy document and return the busy intervals of `calendar_id`.
///
/// For the bare-array shape `calendar_id` is ignored. A response that does not
/// mention `calendar_id` yields no intervals.
///
/// # Errors
/// - `SlotError::Json` if `json` is not one of the accepted shapes.
/// - `SlotError::InvalidTimestamp` for an unparseable timestamp.
/// - `SlotError::InvalidInterval` for an interval that ends before it starts.
pub fn parse_freebusy(
    json: &str,
    calendar_id: &str,
    policy: TimezonePolicy,
) -> Result<Vec<BusyInterval>> {
    let raw = match serde_json::from_str::<Document>(json)? {
        Document::Bare(busy) => busy,
        Document::Response(mut response) => response
            .calendars
            .remove(calendar_id)
            .map(|c| c.busy)
            .unwrap_or_default(),
    };

    raw.iter()
        .map(|b| {
            BusyInterval::new(
                parse_timestamp(&b.start, policy)?,
                parse_timestamp(&b.end, policy)?,
            )
        })
        .collect()
}
