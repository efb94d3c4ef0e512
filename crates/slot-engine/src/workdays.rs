//! Select the days to evaluate, walking forward from an injected "today".

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which weekdays count as bookable. Monday to Friday always do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkWeek {
    pub include_saturday: bool,
    pub include_sunday: bool,
}

impl WorkWeek {
    pub fn includes(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sat => self.include_saturday,
            Weekday::Sun => self.include_sunday,
            _ => true,
        }
    }
}

/// The next `n` days of `week`, starting at `today` inclusive.
pub fn next_days(today: NaiveDate, n: usize, week: WorkWeek) -> Vec<NaiveDate> {
    today
        .iter_days()
        .filter(|d| week.includes(d.weekday()))
        .take(n)
        .collect()
}

/// The next `n` Monday-to-Friday dates, starting at `today` inclusive.
pub fn next_working_days(today: NaiveDate, n: usize) -> Vec<NaiveDate> {
    next_days(today, n, WorkWeek::default())
}
