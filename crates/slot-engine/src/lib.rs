//! # slot-engine
//!
//! Meeting availability from free/busy data.
//!
//! Given the busy intervals of one calendar and a business-hours window per
//! day, the engine computes the free intervals long enough to book and lays
//! them onto a fixed grid of slots. Every step is a pure function over
//! naive local time; days are independent of each other.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{compute_schedule, next_working_days, AvailabilityConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(); // a Friday
//! let days = next_working_days(today, 2);
//! let schedule = compute_schedule(&[], &days, &AvailabilityConfig::default()).unwrap();
//!
//! // 09:00-18:00 in 30-minute steps, all free.
//! assert_eq!(schedule.available_count(), 2 * 18);
//! ```
//!
//! ## Modules
//!
//! - [`workdays`] — pick the days to evaluate
//! - [`freebusy`] — busy intervals → free intervals (and merged busy blocks)
//! - [`slots`] — free intervals → slot grid
//! - [`availability`] — run the pipeline per day into a [`Schedule`]
//! - [`ingest`] — free/busy JSON → busy intervals, with a timezone policy
//! - [`render`] — schedule → markdown / HTML / plain text with booking links
//! - [`config`] — business hours, durations and meeting details
//! - [`error`] — Error types

pub mod availability;
pub mod config;
pub mod error;
pub mod freebusy;
pub mod ingest;
pub mod interval;
pub mod render;
pub mod slots;
pub mod workdays;

pub use availability::{compute_day, compute_schedule, DaySchedule, Schedule};
pub use config::{AvailabilityConfig, MeetingDetails};
pub use error::SlotError;
pub use freebusy::{busy_blocks, free_intervals};
pub use ingest::{parse_freebusy, TimezonePolicy};
pub use interval::{BusinessWindow, BusyBlock, BusyInterval, FreeInterval, Slot};
pub use render::{booking_link, render, OutputFormat};
pub use slots::quantize;
pub use workdays::{next_days, next_working_days, WorkWeek};
