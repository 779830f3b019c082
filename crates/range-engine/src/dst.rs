//! Wall-clock resolution across DST transitions.
//!
//! Availability rules are stated in wall-clock time ("09:00 in
//! Europe/Berlin"), so expanding them means mapping naive local datetimes
//! onto real instants. On a fall-back day the wall clock repeats an hour and
//! the mapping is ambiguous; on a spring-forward day it skips an hour and the
//! mapping has a hole.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Resolve a naive wall-clock datetime in `tz`.
///
/// Ambiguous times (fall-back) resolve to the earliest instant. Times inside
/// a spring-forward gap slide forward to the first valid wall-clock minute
/// after the gap.
pub fn resolve_wall_clock(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Inside a gap. Gaps in the tz database are at most a few hours,
            // so probing forward a minute at a time terminates quickly.
            let mut probe = local;
            loop {
                probe += Duration::minutes(1);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => return dt,
                    LocalResult::Ambiguous(earliest, _) => return earliest,
                    LocalResult::None => continue,
                }
            }
        }
    }
}
