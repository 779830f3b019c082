//! `ranges` CLI — compute availability date ranges from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Expand an availability rule set over a window
//! ranges build -i availability.json --timezone Europe/Berlin \
//!   --from 2026-01-05T00:00:00Z --to 2026-01-12T00:00:00Z
//!
//! # Intersect several participants' range lists (stdin → stdout)
//! cat participants.json | ranges intersect
//!
//! # Carve busy time out of availability
//! ranges subtract -i day_ranges.json --excluded busy.json
//! ```
//!
//! Rules use the storage wire shape: working hours carry `days` as
//! Sunday-indexed integers (0 = Sunday .. 6 = Saturday), overrides carry a
//! `date` in `YYYY-MM-DD`; times are `HH:MM` or `HH:MM:SS`.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use range_engine::{AvailabilityRule, DateOverride, DateRange, WorkingHours};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "ranges", version, about = "Availability date-range CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand an availability rule set into concrete date ranges
    Build {
        /// Input rules file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Organizer IANA timezone (e.g., "Europe/Berlin")
        #[arg(short, long)]
        timezone: String,
        /// Window start (RFC 3339, e.g., "2026-01-05T00:00:00Z")
        #[arg(long)]
        from: String,
        /// Window end (RFC 3339)
        #[arg(long)]
        to: String,
    },
    /// Intersect several participants' range lists
    Intersect {
        /// Input file with an array of range lists (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Subtract excluded ranges from source ranges
    Subtract {
        /// Input file with the source ranges (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// File with the ranges to carve out
        #[arg(long)]
        excluded: String,
    },
}

// ---------------------------------------------------------------------------
// JSON wire shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleInput {
    #[serde(default)]
    days: Option<Vec<u8>>,
    #[serde(default)]
    date: Option<String>,
    start_time: String,
    end_time: String,
}

#[derive(Serialize, Deserialize)]
struct RangeDto {
    start: String,
    end: String,
}

impl From<&DateRange> for RangeDto {
    fn from(r: &DateRange) -> Self {
        Self {
            start: r.start.to_rfc3339(),
            end: r.end.to_rfc3339(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            timezone,
            from,
            to,
        } => {
            let rules = parse_rules(&read_input(input.as_deref())?)?;
            let from = parse_datetime(&from)?;
            let to = parse_datetime(&to)?;

            let ranges = range_engine::build_date_ranges(&rules, &timezone, from, to)?;
            write_output(output.as_deref(), &render_ranges(&ranges)?)?;
        }
        Commands::Intersect { input, output } => {
            let lists: Vec<Vec<RangeDto>> = serde_json::from_str(&read_input(input.as_deref())?)
                .context("Failed to parse participants JSON")?;
            let participants = lists
                .into_iter()
                .map(|list| parse_ranges(list))
                .collect::<Result<Vec<_>>>()?;

            let common = range_engine::intersect(&participants);
            write_output(output.as_deref(), &render_ranges(&common)?)?;
        }
        Commands::Subtract {
            input,
            output,
            excluded,
        } => {
            let sources = parse_ranges_str(&read_input(input.as_deref())?)?;
            let excluded_json = std::fs::read_to_string(&excluded)
                .with_context(|| format!("Failed to read excluded file: {}", excluded))?;
            let excluded = parse_ranges_str(&excluded_json)?;

            let free = range_engine::subtract_ranges(&sources, &excluded);
            write_output(output.as_deref(), &render_ranges(&free)?)?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Parsing and rendering
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime, RFC 3339 or naive-interpreted-as-UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime: {}", s))
}

/// Parse a time of day, with or without seconds ("09:00" or "09:00:00").
fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .with_context(|| format!("Invalid time: {}", s))
}

fn parse_rules(json: &str) -> Result<Vec<AvailabilityRule>> {
    let inputs: Vec<RuleInput> =
        serde_json::from_str(json).context("Failed to parse availability JSON")?;

    inputs
        .into_iter()
        .map(|input| {
            let start_time = parse_time_of_day(&input.start_time)?;
            let end_time = parse_time_of_day(&input.end_time)?;
            match (input.date, input.days) {
                (Some(date), _) => {
                    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                        .with_context(|| format!("Invalid date: {}", date))?;
                    Ok(AvailabilityRule::DateOverride(DateOverride {
                        date,
                        start_time,
                        end_time,
                    }))
                }
                (None, Some(days)) => {
                    let days = days
                        .into_iter()
                        .map(|d| {
                            range_engine::weekday_from_sunday_index(d)
                                .with_context(|| format!("Invalid day index: {}", d))
                        })
                        .collect::<Result<Vec<_>>>()?;
                    Ok(AvailabilityRule::WorkingHours(WorkingHours {
                        days,
                        start_time,
                        end_time,
                    }))
                }
                (None, None) => bail!("Rule must carry either \"days\" or \"date\""),
            }
        })
        .collect()
}

fn parse_ranges(dtos: Vec<RangeDto>) -> Result<Vec<DateRange>> {
    dtos.into_iter()
        .map(|dto| {
            let start = parse_datetime(&dto.start)?;
            let end = parse_datetime(&dto.end)?;
            Ok(DateRange {
                start: start.with_timezone(&chrono_tz::UTC),
                end: end.with_timezone(&chrono_tz::UTC),
            })
        })
        .collect()
}

fn parse_ranges_str(json: &str) -> Result<Vec<DateRange>> {
    let dtos: Vec<RangeDto> = serde_json::from_str(json).context("Failed to parse ranges JSON")?;
    parse_ranges(dtos)
}

fn render_ranges(ranges: &[DateRange]) -> Result<String> {
    let dtos: Vec<RangeDto> = ranges.iter().map(RangeDto::from).collect();
    serde_json::to_string_pretty(&dtos).context("Failed to serialize ranges")
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, content)
            .with_context(|| format!("Failed to write output file: {}", p)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
