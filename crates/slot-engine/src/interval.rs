//! Interval types shared by the free/busy computation and the slot grid.
//!
//! All timestamps are naive local time. Whatever offset the calendar reported
//! has already been resolved by the time a value of these types exists (see
//! [`crate::ingest::TimezonePolicy`]).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A busy period reported by an external calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusyInterval {
    /// Build a busy interval, rejecting one that ends before it starts.
    ///
    /// Zero-length intervals are accepted; they never overlap a window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        let interval = Self { start, end };
        interval.check()?;
        Ok(interval)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.start > self.end {
            return Err(SlotError::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// True if either endpoint falls on `day`.
    pub(crate) fn touches(&self, day: NaiveDate) -> bool {
        self.start.date() == day || self.end.date() == day
    }
}

/// The business-hours range of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusinessWindow {
    /// The window `[day + open, day + close)`.
    pub fn for_day(day: NaiveDate, open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            start: day.and_time(open),
            end: day.and_time(close),
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whole minutes covered by the window, zero when degenerate.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A free stretch of a business window that is long enough to book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

impl FreeInterval {
    pub(crate) fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }

    /// True if `[start, end)` lies entirely inside this interval.
    pub fn contains(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start >= self.start && end <= self.end
    }
}

/// A merged busy period, clipped to a business window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyBlock {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One step of the fixed slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub available: bool,
}
