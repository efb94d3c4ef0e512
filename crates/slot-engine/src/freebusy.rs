//! Compute free intervals from busy intervals within a day's business window.
//!
//! Busy intervals touching the day are clipped to the window and sorted by
//! start time; a single sweep then emits the gaps between them. Overlapping
//! busy periods merge implicitly because the sweep cursor never moves back.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::interval::{BusinessWindow, BusyBlock, BusyInterval, FreeInterval};

/// Busy intervals that touch `day` and overlap `window`, clipped to the window
/// and sorted by start time.
///
/// An interval "touches" the day when its start or its end falls on it.
/// Zero-length intervals cover no time and are dropped.
fn clipped_busy(
    busy: &[BusyInterval],
    day: NaiveDate,
    window: &BusinessWindow,
) -> Result<Vec<(NaiveDateTime, NaiveDateTime)>> {
    for interval in busy {
        interval.check()?;
    }
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let mut intervals: Vec<(NaiveDateTime, NaiveDateTime)> = busy
        .iter()
        .filter(|b| b.start < b.end && b.touches(day))
        .filter(|b| b.start < window.end && b.end > window.start)
        .map(|b| (b.start.max(window.start), b.end.min(window.end)))
        .collect();

    intervals.sort_by_key(|&(start, end)| (start, end));
    Ok(intervals)
}

/// Find the free intervals of `window` that last at least `min_duration_minutes`.
///
/// Returns intervals in chronological order. With no busy intervals the whole
/// window is a single free interval, provided it meets the minimum.
///
/// # Errors
/// Returns `SlotError::InvalidInterval` if any busy interval ends before it
/// starts, whether or not it falls on `day`.
///
/// A non-positive `min_duration_minutes` or an empty window is a degenerate
/// configuration and yields no intervals.
pub fn free_intervals(
    busy: &[BusyInterval],
    day: NaiveDate,
    window: &BusinessWindow,
    min_duration_minutes: i64,
) -> Result<Vec<FreeInterval>> {
    let clipped = clipped_busy(busy, day, window)?;

    if min_duration_minutes <= 0 || window.is_empty() {
        // Busy intervals were already validated by `clipped_busy`.
        return Ok(Vec::new());
    }

    let long_enough = |start: NaiveDateTime, end: NaiveDateTime| {
        (end - start).num_minutes() >= min_duration_minutes
    };

    let mut free = Vec::new();
    let mut cursor = window.start;

    for (busy_start, busy_end) in clipped {
        if cursor < busy_start && long_enough(cursor, busy_start) {
            free.push(FreeInterval::new(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < window.end && long_enough(cursor, window.end) {
        free.push(FreeInterval::new(cursor, window.end));
    }

    Ok(free)
}

/// Merge the busy intervals touching `day` into non-overlapping blocks inside
/// `window`.
///
/// Adjacent periods (one ending exactly when the next starts) merge into one
/// block. Together with the gaps reported by [`free_intervals`] at a one-minute
/// floor, the blocks tile the window.
///
/// # Errors
/// Returns `SlotError::InvalidInterval` for any busy interval with `start > end`.
pub fn busy_blocks(
    busy: &[BusyInterval],
    day: NaiveDate,
    window: &BusinessWindow,
) -> Result<Vec<BusyBlock>> {
    let clipped = clipped_busy(busy, day, window)?;

    let mut merged: Vec<BusyBlock> = Vec::new();
    for (start, end) in clipped {
        if let Some(last) = merged.last_mut() {
            if start <= last.end {
                last.end = last.end.max(end);
                continue;
            }
        }
        merged.push(BusyBlock { start, end });
    }

    Ok(merged)
}
