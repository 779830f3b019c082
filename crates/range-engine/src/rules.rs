//! Availability rule types: recurring working hours and one-off date overrides.
//!
//! Rules arrive from the scheduling-profile storage layer already split per
//! participant. A rule is either a weekly pattern (`WorkingHours`) or a
//! single-date replacement (`DateOverride`); the two are an explicit enum
//! rather than being told apart by which fields happen to be present.

use chrono::{NaiveDate, NaiveTime, Weekday};

/// A recurring weekly availability pattern.
///
/// Repeats on every matching local day-of-week within a requested window.
/// `start_time` and `end_time` are wall-clock times of day; only their hour
/// and minute are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHours {
    /// Days of the week this pattern applies to.
    pub days: Vec<Weekday>,
    /// Daily start time (wall clock, organizer timezone).
    pub start_time: NaiveTime,
    /// Daily end time (wall clock, organizer timezone).
    pub end_time: NaiveTime,
}

/// A one-off rule for a single calendar date.
///
/// Supersedes any `WorkingHours`-derived availability on that date. A
/// zero-length override (`start_time == end_time`) cancels the date outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOverride {
    /// The calendar date this override applies to (organizer timezone).
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// One entry in an availability configuration.
///
/// Entries are an ordered sequence with no uniqueness constraint; later
/// entries do not shadow earlier ones. The only precedence is
/// override-over-working-hours, applied per date by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityRule {
    WorkingHours(WorkingHours),
    DateOverride(DateOverride),
}

/// Convert a Sunday-indexed day number (0 = Sunday .. 6 = Saturday), as the
/// profile layer stores them, into a [`Weekday`].
///
/// Returns `None` for values outside `0..=6`.
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
