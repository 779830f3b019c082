//! Timezone-aware range primitives.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// A concrete availability range: a pair of instants carrying their timezone.
///
/// Ranges compare as instants; the zone only matters for calendar-date
/// grouping and display. Half-open in practice: `start == end` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRange {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl DateRange {
    /// Whether this range covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two ranges overlap. Adjacent ranges (one ends exactly where the
    /// other starts) do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A range carrying an arbitrary payload that set operations preserve.
///
/// Subtraction clones the payload onto every fragment it emits for the
/// source range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRange<T> {
    pub range: DateRange,
    pub payload: T,
}

impl From<DateRange> for AnnotatedRange<()> {
    fn from(range: DateRange) -> Self {
        Self { range, payload: () }
    }
}
