//! Per-day availability: busy blocks, free intervals and the slot grid.
//!
//! Each day is computed independently from the same busy list and the same
//! [`AvailabilityConfig`]; results are collected into a [`Schedule`] keyed by
//! date, so iteration is always chronological.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AvailabilityConfig;
use crate::error::Result;
use crate::freebusy;
use crate::interval::{BusinessWindow, BusyBlock, BusyInterval, FreeInterval, Slot};
use crate::slots;

/// Availability of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: NaiveDate,
    pub window: BusinessWindow,
    /// Merged busy blocks inside the window (sorted, non-overlapping).
    pub busy: Vec<BusyBlock>,
    /// Free intervals meeting the minimum meeting length.
    pub free: Vec<FreeInterval>,
    /// One entry per grid step, in order.
    pub slots: Vec<Slot>,
}

impl DaySchedule {
    pub fn available_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.available)
    }

    /// The slot starting at `time` on this day, if the grid has one.
    pub fn slot_at(&self, time: NaiveTime) -> Option<&Slot> {
        self.slots.iter().find(|s| s.start.time() == time)
    }
}

/// Availability across several days, ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: BTreeMap<NaiveDate, DaySchedule>,
}

impl Schedule {
    pub fn get(&self, day: NaiveDate) -> Option<&DaySchedule> {
        self.days.get(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Distinct grid start times across all days, in time-of-day order.
    ///
    /// These are the row labels of a rendered table.
    pub fn time_labels(&self) -> Vec<NaiveTime> {
        let mut times: Vec<NaiveTime> = self
            .iter()
            .flat_map(|d| d.slots.iter().map(|s| s.start.time()))
            .collect();
        times.sort();
        times.dedup();
        times
    }

    pub fn available_count(&self) -> usize {
        self.iter().map(|d| d.available_slots().count()).sum()
    }
}

/// Compute the availability of one day.
///
/// # Errors
/// Returns `SlotError::InvalidInterval` for any busy interval with `start > end`.
pub fn compute_day(
    busy: &[BusyInterval],
    day: NaiveDate,
    config: &AvailabilityConfig,
) -> Result<DaySchedule> {
    let window = config.window_for(day);
    let busy_blocks = freebusy::busy_blocks(busy, day, &window)?;
    let free = freebusy::free_intervals(busy, day, &window, config.min_meeting_minutes)?;
    let slots = slots::quantize(&free, &window, config.slot_minutes);

    debug!(
        %day,
        busy = busy_blocks.len(),
        free = free.len(),
        available = slots.iter().filter(|s| s.available).count(),
        "computed day"
    );

    Ok(DaySchedule {
        day,
        window,
        busy: busy_blocks,
        free,
        slots,
    })
}

/// Compute availability for every day in `days`.
///
/// Duplicate days collapse into a single entry.
///
/// # Errors
/// Returns `SlotError::InvalidInterval` for any busy interval with `start > end`.
pub fn compute_schedule(
    busy: &[BusyInterval],
    days: &[NaiveDate],
    config: &AvailabilityConfig,
) -> Result<Schedule> {
    let mut schedule = Schedule::default();
    for &day in days {
        schedule.days.insert(day, compute_day(busy, day, config)?);
    }
    Ok(schedule)
}
