//! Render a [`Schedule`] as a bookable table.
//!
//! All renderers are pure: they read the schedule and the meeting details and
//! return a string. Rows are the grid start times shared by all days
//! ([`Schedule::time_labels`]), columns are days in date order. An available
//! cell links to a pre-filled Google Calendar event for that slot.

use std::fmt::Write;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use url::Url;

use crate::availability::Schedule;
use crate::config::MeetingDetails;
use crate::error::{Result, SlotError};
use crate::interval::Slot;

const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Cell text for a slot that cannot be booked.
pub const UNAVAILABLE: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Plain,
    Json,
}

impl OutputFormat {
    /// File extension for saved output.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Plain => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "plain" | "text" | "txt" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(SlotError::InvalidConfig(format!(
                "unknown output format '{}'. Available formats: markdown, html, plain, json",
                other
            ))),
        }
    }
}

/// Render `schedule` in the requested format.
///
/// # Errors
/// Only [`OutputFormat::Json`] can fail, with `SlotError::Json`.
pub fn render(schedule: &Schedule, details: &MeetingDetails, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Markdown => render_markdown(schedule, details),
        OutputFormat::Html => render_html(schedule, details),
        OutputFormat::Plain => render_plain(schedule, details),
        OutputFormat::Json => serde_json::to_string_pretty(schedule)?,
    })
}

/// A Google Calendar "create event" link pre-filled for `slot`.
///
/// Times are written as floating local time (`YYYYMMDDTHHMMSS`, no `Z`), so the
/// calendar interprets them in the booker's own zone.
pub fn booking_link(slot: &Slot, details: &MeetingDetails) -> Url {
    let dates = format!("{}/{}", calendar_time(slot.start), calendar_time(slot.end));

    let mut url = Url::parse(CALENDAR_RENDER_URL).expect("calendar URL is a valid constant");
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("action", "TEMPLATE")
            .append_pair("text", &details.title)
            .append_pair("dates", &dates);
        if let Some(link) = details.zoom_link.as_deref().filter(|l| !l.is_empty()) {
            query.append_pair("details", &format!("Zoom: {}", link));
        }
        if let Some(email) = details.email.as_deref().filter(|e| !e.is_empty()) {
            query.append_pair("add", email);
        }
    }
    url
}

fn calendar_time(t: NaiveDateTime) -> String {
    t.format("%Y%m%dT%H%M%S").to_string()
}

/// Column header for a day, e.g. `Wed 8/27`.
pub fn day_label(day: NaiveDate) -> String {
    day.format("%a %-m/%-d").to_string()
}

/// Row label for a grid time, e.g. `9:00` or `13:30`.
pub fn time_label(time: NaiveTime) -> String {
    time.format("%-H:%M").to_string()
}

/// Slot length used in footers, taken from the first slot of the grid.
fn slot_minutes(schedule: &Schedule) -> Option<i64> {
    schedule
        .iter()
        .flat_map(|d| d.slots.first())
        .map(|s| (s.end - s.start).num_minutes())
        .next()
}

/// Markdown table with one `[**BOOK**](link)` cell per available slot.
///
/// ```text
/// | Time | **Wed 8/27** | **Thu 8/28** |
/// |:----:|:------------:|:------------:|
/// | **9:00** | [**BOOK**](https://...) | — |
/// ```
pub fn render_markdown(schedule: &Schedule, details: &MeetingDetails) -> String {
    let mut out = String::from("| Time |");
    for day in schedule.iter() {
        let _ = write!(out, " **{}** |", day_label(day.day));
    }
    out.push_str("\n|:----:|");
    for _ in schedule.iter() {
        out.push_str(":------------:|");
    }
    out.push('\n');

    for time in schedule.time_labels() {
        let _ = write!(out, "| **{}** |", time_label(time));
        for day in schedule.iter() {
            match day.slot_at(time).filter(|s| s.available) {
                Some(slot) => {
                    let _ = write!(out, " [**BOOK**]({}) |", booking_link(slot, details));
                }
                None => {
                    let _ = write!(out, " {} |", UNAVAILABLE);
                }
            }
        }
        out.push('\n');
    }

    if let Some(minutes) = slot_minutes(schedule) {
        let _ = write!(
            out,
            "\n**Click any BOOK link to schedule that {}-minute slot.**\n",
            minutes
        );
    }
    out
}

/// The same grid as an HTML table, preceded by the meeting details.
pub fn render_html(schedule: &Schedule, details: &MeetingDetails) -> String {
    let mut out = String::from("<div class=\"freebusy-availability\">\n");
    out.push_str("  <div class=\"meeting-details\">\n    <h3>Meeting Availability</h3>\n");
    let _ = writeln!(
        out,
        "    <p><strong>Meeting:</strong> {}</p>",
        escape_html(&details.title)
    );
    if let Some(link) = details.zoom_link.as_deref().filter(|l| !l.is_empty()) {
        let _ = writeln!(
            out,
            "    <p><strong>Zoom:</strong> <a href=\"{}\">Join Meeting</a></p>",
            escape_html(link)
        );
    }
    if let Some(email) = details.email.as_deref().filter(|e| !e.is_empty()) {
        let _ = writeln!(
            out,
            "    <p><strong>Attendee:</strong> {}</p>",
            escape_html(email)
        );
    }
    out.push_str("  </div>\n\n");

    out.push_str("  <table class=\"availability-table\">\n    <thead>\n      <tr>\n        <th>Time</th>\n");
    for day in schedule.iter() {
        let _ = writeln!(out, "        <th><strong>{}</strong></th>", day_label(day.day));
    }
    out.push_str("      </tr>\n    </thead>\n    <tbody>\n");

    for time in schedule.time_labels() {
        let _ = writeln!(
            out,
            "      <tr>\n        <td><strong>{}</strong></td>",
            time_label(time)
        );
        for day in schedule.iter() {
            match day.slot_at(time).filter(|s| s.available) {
                Some(slot) => {
                    let _ = writeln!(
                        out,
                        "        <td><a href=\"{}\">book</a></td>",
                        escape_html(booking_link(slot, details).as_str())
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "        <td><span class=\"unavailable\">{}</span></td>",
                        UNAVAILABLE
                    );
                }
            }
        }
        out.push_str("      </tr>\n");
    }

    out.push_str("    </tbody>\n  </table>\n</div>\n");
    out
}

/// Per-day list of bookable start times.
pub fn render_plain(schedule: &Schedule, details: &MeetingDetails) -> String {
    let mut out = String::from("Meeting Availability\n\n");
    let _ = writeln!(out, "Meeting: {}", details.title);
    if let Some(link) = details.zoom_link.as_deref().filter(|l| !l.is_empty()) {
        let _ = writeln!(out, "Zoom: {}", link);
    }
    if let Some(email) = details.email.as_deref().filter(|e| !e.is_empty()) {
        let _ = writeln!(out, "Attendee: {}", email);
    }
    out.push('\n');

    for day in schedule.iter() {
        let _ = writeln!(out, "{}:", day_label(day.day));
        let mut any = false;
        for slot in day.available_slots() {
            let _ = writeln!(out, "  {} - AVAILABLE", time_label(slot.start.time()));
            any = true;
        }
        if !any {
            out.push_str("  (no availability)\n");
        }
        out.push('\n');
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
