use std::cmp::Ordering;

use crate::curated::{curated_position, MEASURE_PREFIX};
use crate::model::Contest;

/// Sorts contests into presentation order. `sort_by` is stable, so contests
/// comparing equal keep their input order.
pub fn order(mut races: Vec<Contest>) -> Vec<Contest> {
    races.sort_by(|a, b| compare_contests(&a.contest_id, &b.contest_id));
    races
}

/// Curated-list position first, then measures by trailing letter, then plain
/// lexicographic order.
pub fn compare_contests(a: &str, b: &str) -> Ordering {
    match (curated_position(a), curated_position(b)) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_unlisted(a, b),
    }
}

// Unreachable while the curated filter only admits listed contests and
// single-letter measures, but the comparator stays total in case the filter
// is ever relaxed.
fn compare_unlisted(a: &str, b: &str) -> Ordering {
    let a_measure = a.starts_with(MEASURE_PREFIX);
    let b_measure = b.starts_with(MEASURE_PREFIX);
    match (a_measure, b_measure) {
        (true, true) => a.chars().last().cmp(&b.chars().last()),
        // Measures go last
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
