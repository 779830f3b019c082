//! Date-range assembly: expand a full rule set and apply override precedence.

use std::collections::BTreeMap;

use crate::error::{RangeError, Result};
use crate::expander::{expand_date_override, expand_working_hours};
use crate::range::DateRange;
use crate::rules::AvailabilityRule;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Bucket ranges by the calendar date of their start, formatted `YYYY-MM-DD`
/// in each range's own timezone.
///
/// Insertion order inside a bucket is preserved; buckets iterate in date
/// order. The date string is a merge key -- [`build_date_ranges`] uses it to
/// let override buckets replace working-hours buckets wholesale. Also exposed
/// for callers that need per-day grouping, e.g. day-view rendering.
pub fn group_by_date(ranges: &[DateRange]) -> BTreeMap<String, Vec<DateRange>> {
    let mut grouped: BTreeMap<String, Vec<DateRange>> = BTreeMap::new();
    for range in ranges {
        let key = range.start.format("%Y-%m-%d").to_string();
        grouped.entry(key).or_default().push(range.clone());
    }
    grouped
}

/// Build one participant's concrete availability over a window.
///
/// Working-hours rules are expanded against the window and grouped by date;
/// date overrides are expanded and grouped the same way. For any date present
/// in both groupings, the override bucket replaces the working-hours bucket
/// entirely. Zero-length ranges are removed at the very end, after the merge:
/// a zero-length override therefore cancels a working-hours day, while the
/// same override on an otherwise free date produces nothing at all. The
/// filter must stay after the merge to keep that behavior.
///
/// Output is ordered date-ascending, insertion order within a day.
///
/// # Errors
/// Returns [`RangeError::InvalidTimezone`] if `time_zone` is not a valid IANA
/// identifier, and [`RangeError::InvalidWindow`] if `date_from > date_to`.
pub fn build_date_ranges(
    availability: &[AvailabilityRule],
    time_zone: &str,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
) -> Result<Vec<DateRange>> {
    let tz: Tz = time_zone
        .parse()
        .map_err(|_| RangeError::InvalidTimezone(time_zone.to_string()))?;

    if date_from > date_to {
        return Err(RangeError::InvalidWindow {
            from: date_from,
            to: date_to,
        });
    }

    let working_hours: Vec<DateRange> = availability
        .iter()
        .filter_map(|rule| match rule {
            AvailabilityRule::WorkingHours(wh) => {
                Some(expand_working_hours(wh, tz, date_from, date_to))
            }
            AvailabilityRule::DateOverride(_) => None,
        })
        .flatten()
        .collect();

    let overrides: Vec<DateRange> = availability
        .iter()
        .filter_map(|rule| match rule {
            AvailabilityRule::DateOverride(ov) => Some(expand_date_override(ov, tz)),
            AvailabilityRule::WorkingHours(_) => None,
        })
        .collect();

    let mut grouped = group_by_date(&working_hours);
    for (date, bucket) in group_by_date(&overrides) {
        grouped.insert(date, bucket);
    }

    Ok(grouped
        .into_values()
        .flatten()
        .filter(|range| !range.is_empty())
        .collect())
}
