//! `freebusy` CLI — turn a free/busy export into a bookable availability table.
//!
//! ## Usage
//!
//! ```sh
//! # Markdown table for the next 3 working days (stdin → stdout)
//! cat busy.json | freebusy schedule
//!
//! # Explicit config, start date and output file
//! freebusy schedule -i busy.json -c availability.toml --today 2026-10-19 -o table.md
//!
//! # Convert offsets to a zone's wall clock instead of stripping them
//! freebusy schedule -i busy.json --timezone America/New_York
//!
//! # Save as meeting_availability_<YYYYMMDD>.md in the current directory
//! freebusy schedule -i busy.json --save
//!
//! # List the days that would be evaluated
//! freebusy days --days 5 --weekends
//! ```
//!
//! Set `RUST_LOG=debug` to see per-day summaries on stderr.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use slot_engine::{
    compute_schedule, next_days, parse_freebusy, render, AvailabilityConfig, OutputFormat,
    TimezonePolicy, WorkWeek,
};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "freebusy",
    version,
    about = "Meeting availability tables from free/busy data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render the availability grid
    Schedule {
        /// Free/busy JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// TOML configuration file (defaults apply if omitted)
        #[arg(short, long)]
        config: Option<String>,
        /// First day to consider, YYYY-MM-DD (defaults to the local date)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
        /// Number of days to show (overrides the config)
        #[arg(long)]
        days: Option<usize>,
        /// Calendar id to read from a free/busy response
        #[arg(long, default_value = "primary")]
        calendar: String,
        /// IANA zone to convert offsets into, or "strip" to drop them
        #[arg(long, default_value = "strip")]
        timezone: TimezonePolicy,
        /// Output format: markdown, html, plain or json
        #[arg(short, long, default_value = "markdown")]
        format: OutputFormat,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, conflicts_with = "save")]
        output: Option<String>,
        /// Write to meeting_availability_<YYYYMMDD>.<ext> in the current directory
        #[arg(long)]
        save: bool,
    },
    /// Print the days that would be evaluated
    Days {
        /// First day to consider, YYYY-MM-DD (defaults to the local date)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
        /// Number of days to list
        #[arg(long, default_value_t = 3)]
        days: usize,
        /// Include Saturdays and Sundays
        #[arg(long)]
        weekends: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            input,
            config,
            today,
            days,
            calendar,
            timezone,
            format,
            output,
            save,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(days) = days {
                config.days = days;
            }
            let today = today.unwrap_or_else(|| Local::now().date_naive());

            let json = read_input(input.as_deref())?;
            let busy = parse_freebusy(&json, &calendar, timezone)
                .context("Failed to read free/busy data")?;
            info!(busy = busy.len(), calendar = %calendar, "loaded busy periods");

            let selected = next_days(today, config.days, config.work_week());
            debug!(?selected, "selected days");

            let schedule =
                compute_schedule(&busy, &selected, &config).context("Failed to compute availability")?;
            let rendered =
                render(&schedule, &config.meeting, format).context("Failed to render availability")?;

            let output = if save {
                Some(saved_file_name(today, format))
            } else {
                output.map(PathBuf::from)
            };
            write_output(output.as_ref(), &rendered)?;
            if let Some(path) = output {
                info!(path = %path.display(), "saved availability");
                eprintln!("Table saved to: {}", path.display());
            }
        }
        Commands::Days {
            today,
            days,
            weekends,
        } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let week = WorkWeek {
                include_saturday: weekends,
                include_sunday: weekends,
            };
            for day in next_days(today, days, week) {
                println!("{}", day.format("%Y-%m-%d %a"));
            }
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// `meeting_availability_<YYYYMMDD>.<ext>`, relative to the working directory.
fn saved_file_name(today: NaiveDate, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!(
        "meeting_availability_{}.{}",
        today.format("%Y%m%d"),
        format.extension()
    ))
}

fn load_config(path: Option<&str>) -> Result<AvailabilityConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            AvailabilityConfig::from_toml_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path))
        }
        None => Ok(AvailabilityConfig::default()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
