//! Tests for set operations: multi-participant intersection and busy-time
//! subtraction with payload pass-through.

use chrono::TimeZone;
use chrono_tz::Tz;
use range_engine::{intersect, subtract, subtract_ranges, AnnotatedRange, DateRange};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A UTC range on 2026-03-16 given (start hour, start min, end hour, end min).
fn range(sh: u32, sm: u32, eh: u32, em: u32) -> DateRange {
    let tz: Tz = "UTC".parse().unwrap();
    DateRange {
        start: tz.with_ymd_and_hms(2026, 3, 16, sh, sm, 0).unwrap(),
        end: tz.with_ymd_and_hms(2026, 3, 16, eh, em, 0).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// intersect
// ---------------------------------------------------------------------------

#[test]
fn two_participants_narrow_to_overlap() {
    let a = vec![range(9, 0, 12, 0)];
    let b = vec![range(10, 0, 14, 0)];

    let common = intersect(&[a, b]);

    assert_eq!(common, vec![range(10, 0, 12, 0)]);
}

#[test]
fn intersection_is_commutative() {
    let a = vec![range(9, 0, 10, 0), range(11, 0, 12, 0)];
    let b = vec![range(9, 30, 11, 30)];

    let forward = intersect(&[a.clone(), b.clone()]);
    let backward = intersect(&[b, a]);

    assert_eq!(forward, vec![range(9, 30, 10, 0), range(11, 0, 11, 30)]);
    assert_eq!(forward, backward);
}

#[test]
fn three_way_equals_two_step_intersection() {
    let a = vec![range(9, 0, 17, 0)];
    let b = vec![range(8, 0, 12, 0), range(14, 0, 18, 0)];
    let c = vec![range(10, 0, 15, 0)];

    let direct = intersect(&[a.clone(), b.clone(), c.clone()]);
    let two_step = intersect(&[intersect(&[a, b]), c]);

    assert_eq!(direct, vec![range(10, 0, 12, 0), range(14, 0, 15, 0)]);
    assert_eq!(direct, two_step);
}

#[test]
fn no_participants_yields_empty() {
    assert!(intersect(&[]).is_empty());
}

#[test]
fn participant_with_no_ranges_empties_the_result() {
    let a = vec![range(9, 0, 17, 0)];

    assert!(intersect(&[a.clone(), vec![]]).is_empty());
    assert!(intersect(&[vec![], a]).is_empty());
}

#[test]
fn disjoint_participants_share_nothing() {
    let a = vec![range(9, 0, 10, 0)];
    let b = vec![range(11, 0, 12, 0)];

    assert!(intersect(&[a, b]).is_empty());
}

#[test]
fn touching_ranges_do_not_intersect() {
    let a = vec![range(9, 0, 10, 0)];
    let b = vec![range(10, 0, 11, 0)];

    assert!(intersect(&[a, b]).is_empty());
}

// ---------------------------------------------------------------------------
// subtract
// ---------------------------------------------------------------------------

#[test]
fn subtraction_carves_out_every_exclusion() {
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(10, 0, 11, 0), range(13, 0, 14, 0)];

    let free = subtract_ranges(&sources, &excluded);

    assert_eq!(
        free,
        vec![
            range(9, 0, 10, 0),
            range(11, 0, 13, 0),
            range(14, 0, 17, 0),
        ]
    );
}

#[test]
fn fully_covered_source_vanishes() {
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(8, 0, 18, 0)];

    assert!(subtract_ranges(&sources, &excluded).is_empty());
}

#[test]
fn non_overlapping_exclusion_is_a_noop() {
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(18, 0, 19, 0)];

    assert_eq!(subtract_ranges(&sources, &excluded), sources);
}

#[test]
fn adjacent_exclusion_is_a_noop() {
    // Touching at 17:00 is not an overlap.
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(17, 0, 18, 0)];

    assert_eq!(subtract_ranges(&sources, &excluded), sources);
}

#[test]
fn exclusion_overlapping_the_start_clips_it() {
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(8, 0, 10, 0)];

    assert_eq!(subtract_ranges(&sources, &excluded), vec![range(10, 0, 17, 0)]);
}

#[test]
fn unsorted_exclusions_are_swept_in_start_order() {
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(13, 0, 14, 0), range(10, 0, 11, 0)];

    assert_eq!(
        subtract_ranges(&sources, &excluded),
        vec![
            range(9, 0, 10, 0),
            range(11, 0, 13, 0),
            range(14, 0, 17, 0),
        ]
    );
}

#[test]
fn overlapping_exclusions_merge_during_the_sweep() {
    let sources = vec![range(9, 0, 17, 0)];
    let excluded = vec![range(10, 0, 12, 0), range(11, 0, 13, 0)];

    assert_eq!(
        subtract_ranges(&sources, &excluded),
        vec![range(9, 0, 10, 0), range(13, 0, 17, 0)]
    );
}

#[test]
fn payload_is_carried_onto_every_fragment() {
    let sources = vec![AnnotatedRange {
        range: range(9, 0, 17, 0),
        payload: "team-standup".to_string(),
    }];
    let excluded = vec![range(12, 0, 13, 0)];

    let fragments = subtract(&sources, &excluded);

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].range, range(9, 0, 12, 0));
    assert_eq!(fragments[0].payload, "team-standup");
    assert_eq!(fragments[1].range, range(13, 0, 17, 0));
    assert_eq!(fragments[1].payload, "team-standup");
}

#[test]
fn each_source_is_carved_independently() {
    let sources = vec![range(9, 0, 11, 0), range(14, 0, 16, 0)];
    let excluded = vec![range(10, 0, 15, 0)];

    assert_eq!(
        subtract_ranges(&sources, &excluded),
        vec![range(9, 0, 10, 0), range(15, 0, 16, 0)]
    );
}
