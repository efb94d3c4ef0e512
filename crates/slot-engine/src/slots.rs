//! Quantize free intervals onto a fixed grid of bookable slots.
//!
//! The grid starts at the window's opening time and steps by the slot length.
//! A slot that would run past the window's close is never emitted. Each slot is
//! available only when a single free interval contains it entirely; a slot that
//! straddles two free intervals is unavailable.

use chrono::{Duration, NaiveDateTime};

use crate::interval::{BusinessWindow, FreeInterval, Slot};

/// Start times of every grid step in `window`.
///
/// Empty when `slot_minutes` is not positive or longer than the window.
pub fn grid(window: &BusinessWindow, slot_minutes: i64) -> Vec<NaiveDateTime> {
    if slot_minutes <= 0 || slot_minutes > window.duration_minutes() {
        return Vec::new();
    }

    let step = Duration::minutes(slot_minutes);
    let mut starts = Vec::new();
    let mut t = window.start;
    while t + step <= window.end {
        starts.push(t);
        t += step;
    }
    starts
}

/// Lay `free` onto the slot grid of `window`.
///
/// Returns one [`Slot`] per grid step, in chronological order.
pub fn quantize(free: &[FreeInterval], window: &BusinessWindow, slot_minutes: i64) -> Vec<Slot> {
    grid(window, slot_minutes)
        .into_iter()
        .map(|start| {
            let end = start + Duration::minutes(slot_minutes);
            Slot {
                start,
                end,
                available: free.iter().any(|f| f.contains(start, end)),
            }
        })
        .collect()
}
