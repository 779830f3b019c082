//! WASM bindings for range-engine.
//!
//! Exposes date-range building, multi-participant intersection, busy-time
//! subtraction, and per-day grouping to JavaScript via `wasm-bindgen`. All
//! complex types are passed as JSON strings.
//!
//! Availability rules use the storage wire shape: working hours carry `days`
//! as Sunday-indexed integers (0 = Sunday .. 6 = Saturday), overrides carry a
//! `date` in `YYYY-MM-DD`. The two are told apart by which field is present —
//! only at the wire; inside the engine they are an explicit enum.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p range-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/range-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/range_engine_wasm.wasm
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use range_engine::{AvailabilityRule, DateOverride, DateRange, WorkingHours};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
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

/// Input format for ranges passed from JavaScript.
#[derive(Deserialize)]
struct RangeInput {
    start: String,
    end: String,
}

/// Input format for availability rules passed from JavaScript.
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

// ---------------------------------------------------------------------------
// Parse helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-01-05T09:00:00Z")
/// and naive local time (e.g., "2026-01-05T09:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_timezone(timezone: &str) -> Result<Tz, JsValue> {
    timezone
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid timezone: {}", timezone)))
}

/// Parse a time of day, with or without seconds ("09:00" or "09:00:00").
fn parse_time_of_day(s: &str) -> Result<NaiveTime, JsValue> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| JsValue::from_str(&format!("Invalid time '{}': {}", s, e)))
}

/// Convert a list of `{start, end}` inputs into ranges carrying `tz`.
fn ranges_from_inputs(inputs: Vec<RangeInput>, tz: Tz) -> Result<Vec<DateRange>, JsValue> {
    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(DateRange {
                start: start.with_timezone(&tz),
                end: end.with_timezone(&tz),
            })
        })
        .collect()
}

/// Convert a JSON array of `{start, end}` range objects into `Vec<DateRange>`.
fn parse_ranges_json(json: &str, tz: Tz) -> Result<Vec<DateRange>, JsValue> {
    let inputs: Vec<RangeInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid ranges JSON: {}", e)))?;
    ranges_from_inputs(inputs, tz)
}

/// Convert a JSON array of rule objects into `Vec<AvailabilityRule>`.
fn parse_rules_json(json: &str) -> Result<Vec<AvailabilityRule>, JsValue> {
    let inputs: Vec<RuleInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid availability JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start_time = parse_time_of_day(&input.start_time)?;
            let end_time = parse_time_of_day(&input.end_time)?;
            match (input.date, input.days) {
                // A date wins over days, matching the storage shape where an
                // override row still carries an (ignored) days column.
                (Some(date), _) => {
                    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                        JsValue::from_str(&format!("Invalid date '{}': {}", date, e))
                    })?;
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
                            range_engine::weekday_from_sunday_index(d).ok_or_else(|| {
                                JsValue::from_str(&format!("Invalid day index: {}", d))
                            })
                        })
                        .collect::<Result<Vec<_>, JsValue>>()?;
                    Ok(AvailabilityRule::WorkingHours(WorkingHours {
                        days,
                        start_time,
                        end_time,
                    }))
                }
                (None, None) => Err(JsValue::from_str(
                    "Rule must carry either \"days\" or \"date\"",
                )),
            }
        })
        .collect()
}

fn ranges_to_json(ranges: &[DateRange]) -> Result<String, JsValue> {
    let dtos: Vec<RangeDto> = ranges.iter().map(RangeDto::from).collect();
    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Build one participant's concrete availability over a window.
///
/// `availability_json` is a JSON array of rule objects; `timezone` is the
/// organizer's IANA zone; `date_from`/`date_to` are ISO 8601 datetimes.
/// Returns a JSON array of `{start, end}` objects with RFC 3339 datetimes.
#[wasm_bindgen(js_name = "buildDateRanges")]
pub fn build_date_ranges(
    availability_json: &str,
    timezone: &str,
    date_from: &str,
    date_to: &str,
) -> Result<String, JsValue> {
    let availability = parse_rules_json(availability_json)?;
    let from = parse_datetime(date_from)?;
    let to = parse_datetime(date_to)?;

    let ranges = range_engine::build_date_ranges(&availability, timezone, from, to)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    ranges_to_json(&ranges)
}

/// Intersect several participants' range lists.
///
/// `lists_json` must be a JSON array of arrays of `{start, end}` objects.
/// Returns the ranges during which every participant is available.
#[wasm_bindgen(js_name = "intersectRanges")]
pub fn intersect_ranges(lists_json: &str) -> Result<String, JsValue> {
    let inputs: Vec<Vec<RangeInput>> = serde_json::from_str(lists_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid participants JSON: {}", e)))?;

    let participants = inputs
        .into_iter()
        .map(|list| ranges_from_inputs(list, chrono_tz::UTC))
        .collect::<Result<Vec<_>, JsValue>>()?;

    ranges_to_json(&range_engine::intersect(&participants))
}

/// Carve excluded ranges out of source ranges.
///
/// Both arguments are JSON arrays of `{start, end}` objects. Returns the
/// surviving free fragments of the sources.
#[wasm_bindgen(js_name = "subtractRanges")]
pub fn subtract_ranges(sources_json: &str, excluded_json: &str) -> Result<String, JsValue> {
    let sources = parse_ranges_json(sources_json, chrono_tz::UTC)?;
    let excluded = parse_ranges_json(excluded_json, chrono_tz::UTC)?;

    ranges_to_json(&range_engine::subtract_ranges(&sources, &excluded))
}

/// Group ranges by calendar date in the given timezone.
///
/// Returns a JSON object mapping `YYYY-MM-DD` strings to arrays of
/// `{start, end}` objects, in date order.
#[wasm_bindgen(js_name = "groupByDate")]
pub fn group_by_date(ranges_json: &str, timezone: &str) -> Result<String, JsValue> {
    let tz = parse_timezone(timezone)?;
    let ranges = parse_ranges_json(ranges_json, tz)?;

    let grouped: BTreeMap<String, Vec<RangeDto>> = range_engine::group_by_date(&ranges)
        .iter()
        .map(|(date, bucket)| (date.clone(), bucket.iter().map(RangeDto::from).collect()))
        .collect();

    serde_json::to_string(&grouped)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
