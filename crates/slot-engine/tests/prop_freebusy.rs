//! Property-based tests for free/busy computation and slot quantization.
//!
//! These check invariants that must hold for *any* busy list, not just the
//! hand-picked cases in `freebusy_tests.rs` and `slots_tests.rs`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use slot_engine::freebusy::{busy_blocks, free_intervals};
use slot_engine::slots::quantize;
use slot_engine::{BusinessWindow, BusyInterval};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn midnight() -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap()
}

/// A busy interval starting between 20:00 the day before and 23:59 today,
/// lasting 0-10 hours, minute-aligned.
fn arb_busy() -> impl Strategy<Value = BusyInterval> {
    (-240i64..1440, 0i64..=600).prop_map(|(offset, len)| {
        let start = midnight() + Duration::minutes(offset);
        BusyInterval::new(start, start + Duration::minutes(len)).unwrap()
    })
}

fn arb_busy_list() -> impl Strategy<Value = Vec<BusyInterval>> {
    prop::collection::vec(arb_busy(), 0..12)
}

/// Business windows opening 06:00-11:00 and lasting 2-12 hours.
fn arb_window() -> impl Strategy<Value = BusinessWindow> {
    (6u32..=11, 2u32..=12).prop_map(|(open, hours)| {
        let open_time = NaiveTime::from_hms_opt(open, 0, 0).unwrap();
        let close_time = NaiveTime::from_hms_opt((open + hours).min(23), 0, 0).unwrap();
        BusinessWindow::for_day(day(), open_time, close_time)
    })
}

fn arb_min_duration() -> impl Strategy<Value = i64> {
    prop_oneof![Just(1i64), Just(15), Just(30), Just(60), 1i64..=180]
}

fn arb_slot_minutes() -> impl Strategy<Value = i64> {
    prop_oneof![Just(15i64), Just(30), Just(45), Just(60)]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Every free interval meets the floor and lies inside the window.
    #[test]
    fn free_intervals_are_long_enough_and_inside_window(
        busy in arb_busy_list(),
        window in arb_window(),
        min in arb_min_duration(),
    ) {
        let free = free_intervals(&busy, day(), &window, min).unwrap();

        for f in &free {
            prop_assert!(f.duration_minutes >= min, "{:?} shorter than {}", f, min);
            prop_assert_eq!(f.duration_minutes, (f.end - f.start).num_minutes());
            prop_assert!(f.start >= window.start && f.end <= window.end, "{:?} outside {:?}", f, window);
        }
    }

    /// Free intervals are chronological and pairwise disjoint.
    #[test]
    fn free_intervals_are_ordered_and_disjoint(
        busy in arb_busy_list(),
        window in arb_window(),
        min in arb_min_duration(),
    ) {
        let free = free_intervals(&busy, day(), &window, min).unwrap();

        for pair in free.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    /// At a one-minute floor, free intervals and busy blocks tile the window
    /// with no gaps and no double coverage.
    #[test]
    fn free_and_busy_partition_the_window(
        busy in arb_busy_list(),
        window in arb_window(),
    ) {
        let free = free_intervals(&busy, day(), &window, 1).unwrap();
        let blocks = busy_blocks(&busy, day(), &window).unwrap();

        let mut segments: Vec<(NaiveDateTime, NaiveDateTime)> = free
            .iter()
            .map(|f| (f.start, f.end))
            .chain(blocks.iter().map(|b| (b.start, b.end)))
            .collect();
        segments.sort();

        prop_assert!(!segments.is_empty());
        prop_assert_eq!(segments[0].0, window.start);
        prop_assert_eq!(segments[segments.len() - 1].1, window.end);
        for s in &segments {
            prop_assert!(s.0 < s.1, "empty segment {:?}", s);
        }
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].1, pair[1].0, "gap or overlap between {:?} and {:?}", pair[0], pair[1]);
        }
    }

    /// Raising the floor only removes intervals; it never splits or moves them.
    #[test]
    fn floor_only_filters(
        busy in arb_busy_list(),
        window in arb_window(),
        min in arb_min_duration(),
    ) {
        let all = free_intervals(&busy, day(), &window, 1).unwrap();
        let floored = free_intervals(&busy, day(), &window, min).unwrap();

        let expected: Vec<_> = all.into_iter().filter(|f| f.duration_minutes >= min).collect();
        prop_assert_eq!(floored, expected);
    }

    /// Treating the free intervals as busy gives back exactly the merged busy
    /// blocks: no interval was split without a busy period causing it.
    #[test]
    fn complement_of_free_is_busy(
        busy in arb_busy_list(),
        window in arb_window(),
    ) {
        let free = free_intervals(&busy, day(), &window, 1).unwrap();
        let as_busy: Vec<BusyInterval> = free
            .iter()
            .map(|f| BusyInterval::new(f.start, f.end).unwrap())
            .collect();

        let complement = free_intervals(&as_busy, day(), &window, 1).unwrap();
        let blocks = busy_blocks(&busy, day(), &window).unwrap();

        let complement: Vec<_> = complement.iter().map(|f| (f.start, f.end)).collect();
        let blocks: Vec<_> = blocks.iter().map(|b| (b.start, b.end)).collect();
        prop_assert_eq!(complement, blocks);
    }

    /// Available slots sit inside a free interval and never touch busy time.
    #[test]
    fn available_slots_are_free(
        busy in arb_busy_list(),
        window in arb_window(),
        min in arb_min_duration(),
        slot in arb_slot_minutes(),
    ) {
        let free = free_intervals(&busy, day(), &window, min).unwrap();
        let blocks = busy_blocks(&busy, day(), &window).unwrap();
        let slots = quantize(&free, &window, slot);

        for s in slots.iter().filter(|s| s.available) {
            prop_assert!(free.iter().any(|f| f.contains(s.start, s.end)), "{:?} not contained", s);
            for b in &blocks {
                prop_assert!(s.end <= b.start || s.start >= b.end, "{:?} overlaps busy {:?}", s, b);
            }
        }
    }

    /// The grid has one slot per whole step, in order, all inside the window.
    #[test]
    fn grid_shape_depends_only_on_window(
        busy in arb_busy_list(),
        window in arb_window(),
        slot in arb_slot_minutes(),
    ) {
        let free = free_intervals(&busy, day(), &window, 1).unwrap();
        let slots = quantize(&free, &window, slot);

        prop_assert_eq!(slots.len() as i64, window.duration_minutes() / slot);
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        if let Some(last) = slots.last() {
            prop_assert!(last.end <= window.end);
        }
    }
}
