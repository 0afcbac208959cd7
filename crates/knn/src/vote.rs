//! Majority vote with first-occurrence tie-breaking.

/// Returns the most frequent label in `labels`.
///
/// `tally` records `(label, count)` in the order labels are first seen, and
/// only a strictly larger count replaces the current leader, so among equally
/// frequent labels the one that appears first in `labels` wins.
///
/// # Panics
///
/// Debug-asserts that `labels` is non-empty.
pub(crate) fn majority_label(labels: &[usize], tally: &mut Vec<(usize, usize)>) -> usize {
    debug_assert!(!labels.is_empty());

    tally.clear();
    for &label in labels {
        match tally.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    let mut best = tally[0];
    for &entry in &tally[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    best.0
}
