//! Rule expansion -- converts availability rules into concrete date ranges.
//!
//! A `WorkingHours` rule yields one candidate range per matching calendar day
//! inside the requested window; a `DateOverride` yields exactly one range for
//! its date. Both operations are pure and take an explicit organizer timezone.

use crate::dst::resolve_wall_clock;
use crate::range::DateRange;
use crate::rules::{DateOverride, WorkingHours};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

/// A calendar day at one of a rule's times of day, as a naive local datetime.
/// Only the hour and minute of `time` are read.
fn at_time_of_day(day: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
        + Duration::hours(i64::from(time.hour()))
        + Duration::minutes(i64::from(time.minute()))
}

/// Expand a recurring working-hours rule against `[window_start, window_end]`.
///
/// Walks calendar days in `tz`, starting from `window_start`'s local date and
/// advancing one calendar day at a time -- never a fixed 24 h step, which
/// would drift across DST transitions. For each day whose *local* weekday is
/// in `rule.days`, the rule's start/end times of day are resolved as
/// wall-clock times in `tz` (so a 09:00 rule stays 09:00 local on transition
/// days), clipped to the window, and emitted when still strictly positive.
///
/// Degenerate or inverted candidates produce no output.
///
/// # Arguments
/// - `rule` -- The weekly pattern to expand
/// - `tz` -- The organizer's timezone
/// - `window_start` -- Start of the requested window (attendee-side instant)
/// - `window_end` -- End of the requested window
pub fn expand_working_hours(
    rule: &WorkingHours,
    tz: Tz,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<DateRange> {
    let mut results = Vec::new();

    let mut day = window_start.with_timezone(&tz).date_naive();
    loop {
        let midnight = resolve_wall_clock(tz, day.and_time(NaiveTime::MIN));
        if midnight >= window_end {
            break;
        }

        // The weekday check must use the local calendar date, not the UTC
        // date, or rules go off by one near midnight at zone boundaries.
        if rule.days.contains(&day.weekday()) {
            let candidate_start = resolve_wall_clock(tz, at_time_of_day(day, rule.start_time));
            let candidate_end = resolve_wall_clock(tz, at_time_of_day(day, rule.end_time));

            let start = if candidate_start < window_start {
                window_start.with_timezone(&tz)
            } else {
                candidate_start
            };
            let end = if candidate_end > window_end {
                window_end.with_timezone(&tz)
            } else {
                candidate_end
            };

            if start < end {
                results.push(DateRange { start, end });
            }
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    results
}

/// Expand a date override into its single concrete range.
///
/// The override's date plus its hour/minute offsets are read as a wall-clock
/// datetime and resolved in `tz`. Always returns exactly one range -- a
/// zero-length result is meaningful (it cancels the date) and must survive
/// until grouping, so it is never dropped here.
pub fn expand_date_override(rule: &DateOverride, tz: Tz) -> DateRange {
    DateRange {
        start: resolve_wall_clock(tz, at_time_of_day(rule.date, rule.start_time)),
        end: resolve_wall_clock(tz, at_time_of_day(rule.date, rule.end_time)),
    }
}
