//! Set operations over date ranges: multi-participant intersection and
//! busy-time subtraction.

use crate::range::{AnnotatedRange, DateRange};

/// Intersect the availability of N participants.
///
/// Starts from the first participant's ranges and narrows: each further
/// participant replaces the running set with every pairwise overlap between
/// the running set and that participant's ranges. An empty outer list yields
/// an empty result; a participant with no ranges empties the running set for
/// good -- there is no time when everyone is available.
pub fn intersect(participants: &[Vec<DateRange>]) -> Vec<DateRange> {
    let Some((first, rest)) = participants.split_first() else {
        return Vec::new();
    };

    let mut common = first.clone();
    for participant in rest {
        common = common
            .iter()
            .flat_map(|held| {
                participant
                    .iter()
                    .filter_map(|candidate| intersection(held, candidate))
            })
            .collect();
    }
    common
}

/// The overlap of two ranges, or `None` when they only touch or are disjoint.
fn intersection(a: &DateRange, b: &DateRange) -> Option<DateRange> {
    let start = if a.start > b.start { a.start } else { b.start };
    let end = if a.end < b.end { a.end } else { b.end };
    (start < end).then_some(DateRange { start, end })
}

/// Carve excluded ranges out of annotated source ranges.
///
/// Exclusions that do not overlap a source are ignored for that source
/// entirely. Overlapping exclusions are swept in start order: a cursor walks
/// from the source's start, emitting the free fragment before each exclusion
/// and jumping past it. Every emitted fragment carries the source's payload,
/// so one source can produce zero, one, or many output ranges.
pub fn subtract<T: Clone>(
    sources: &[AnnotatedRange<T>],
    excluded: &[DateRange],
) -> Vec<AnnotatedRange<T>> {
    let mut result = Vec::new();

    for source in sources {
        let mut cursor = source.range.start;

        let mut overlapping: Vec<&DateRange> = excluded
            .iter()
            .filter(|ex| ex.overlaps(&source.range))
            .collect();
        overlapping.sort_by(|a, b| a.start.cmp(&b.start));

        for ex in overlapping {
            if ex.start > cursor {
                result.push(AnnotatedRange {
                    range: DateRange {
                        start: cursor,
                        end: ex.start,
                    },
                    payload: source.payload.clone(),
                });
            }
            if ex.end > cursor {
                cursor = ex.end;
            }
        }

        if source.range.end > cursor {
            result.push(AnnotatedRange {
                range: DateRange {
                    start: cursor,
                    end: source.range.end,
                },
                payload: source.payload.clone(),
            });
        }
    }

    result
}

/// [`subtract`] for plain ranges with nothing to carry through.
pub fn subtract_ranges(sources: &[DateRange], excluded: &[DateRange]) -> Vec<DateRange> {
    let annotated: Vec<AnnotatedRange<()>> =
        sources.iter().cloned().map(AnnotatedRange::from).collect();
    subtract(&annotated, excluded)
        .into_iter()
        .map(|fragment| fragment.range)
        .collect()
}
