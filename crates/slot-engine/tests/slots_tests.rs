//! Tests for quantizing free intervals onto the slot grid.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use slot_engine::freebusy::free_intervals;
use slot_engine::slots::{grid, quantize};
use slot_engine::{BusinessWindow, BusyInterval, FreeInterval};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn at(hour: u32, min: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, min, 0).unwrap()
}

fn window(open: u32, close: u32) -> BusinessWindow {
    BusinessWindow::for_day(
        day(),
        NaiveTime::from_hms_opt(open, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(close, 0, 0).unwrap(),
    )
}

/// Free intervals for a busy list, with a one-minute floor so every gap shows up.
fn free_for(busy: &[(NaiveDateTime, NaiveDateTime)], window: &BusinessWindow) -> Vec<FreeInterval> {
    let busy: Vec<BusyInterval> = busy
        .iter()
        .map(|&(s, e)| BusyInterval::new(s, e).unwrap())
        .collect();
    free_intervals(&busy, day(), window, 1).unwrap()
}

#[test]
fn grid_covers_window_without_overrun() {
    let starts = grid(&window(9, 18), 30);

    assert_eq!(starts.len(), 18);
    assert_eq!(starts.first(), Some(&at(9, 0)));
    assert_eq!(starts.last(), Some(&at(17, 30)));
}

#[test]
fn grid_stops_before_partial_slot() {
    // 45-minute steps in 09:00-11:00: 09:00, 09:45; 10:30 would end at 11:15.
    let starts = grid(&window(9, 11), 45);

    assert_eq!(starts, vec![at(9, 0), at(9, 45)]);
}

#[test]
fn one_hour_free_gives_two_half_hour_slots() {
    let w = window(9, 18);
    let free = free_for(&[(at(10, 0), at(18, 0))], &w);
    assert_eq!((free[0].start, free[0].end), (at(9, 0), at(10, 0)));

    let slots = quantize(&free, &w, 30);

    assert_eq!(slots.len(), 18, "one slot per grid step regardless of availability");
    assert!(slots[0].available);
    assert_eq!((slots[0].start, slots[0].end), (at(9, 0), at(9, 30)));
    assert!(slots[1].available);
    assert_eq!((slots[1].start, slots[1].end), (at(9, 30), at(10, 0)));
    assert!(slots[2..].iter().all(|s| !s.available));
}

#[test]
fn free_interval_shorter_than_slot_gives_no_available_slot() {
    let w = window(9, 18);
    let free = free_for(&[(at(9, 20), at(18, 0))], &w);
    assert_eq!((free[0].start, free[0].end), (at(9, 0), at(9, 20)));

    let slots = quantize(&free, &w, 30);

    assert_eq!(slots.iter().filter(|s| s.available).count(), 0);
}

#[test]
fn slot_straddling_two_free_intervals_is_unavailable() {
    // Busy 10:10-10:20 splits the 10:00-10:30 step between two free intervals.
    let w = window(9, 12);
    let free = free_for(&[(at(10, 10), at(10, 20))], &w);
    assert_eq!(free.len(), 2);

    let slots = quantize(&free, &w, 30);

    let ten = slots.iter().find(|s| s.start == at(10, 0)).unwrap();
    assert!(!ten.available, "partial overlap must not count as free");
    let nine_thirty = slots.iter().find(|s| s.start == at(9, 30)).unwrap();
    assert!(nine_thirty.available);
    let ten_thirty = slots.iter().find(|s| s.start == at(10, 30)).unwrap();
    assert!(ten_thirty.available);
}

#[test]
fn misaligned_free_interval_only_marks_contained_steps() {
    // Free 09:15-10:45 contains 09:30-10:00 and 10:00-10:30 only.
    let w = window(9, 12);
    let free = free_for(&[(at(9, 0), at(9, 15)), (at(10, 45), at(12, 0))], &w);

    let slots = quantize(&free, &w, 30);

    let available: Vec<_> = slots.iter().filter(|s| s.available).map(|s| s.start).collect();
    assert_eq!(available, vec![at(9, 30), at(10, 0)]);
}

#[test]
fn slot_longer_than_window_yields_empty_grid() {
    let w = window(9, 10);
    let free = free_for(&[], &w);

    assert!(quantize(&free, &w, 90).is_empty());
}

#[test]
fn non_positive_slot_length_yields_empty_grid() {
    let w = window(9, 18);
    let free = free_for(&[], &w);

    assert!(quantize(&free, &w, 0).is_empty());
    assert!(quantize(&free, &w, -30).is_empty());
}

#[test]
fn no_free_intervals_marks_every_slot_unavailable() {
    let slots = quantize(&[], &window(9, 18), 60);

    assert_eq!(slots.len(), 9);
    assert!(slots.iter().all(|s| !s.available));
}
