//! Deterministic display ordering for ad groups.
//!
//! Groups are ordered by their first asset's file name using a
//! numeric-prefix-aware comparison: names that both start with a digit run
//! compare numerically, everything else falls back to a case-folded
//! lexicographic compare. The sort is stable, so equal keys keep their
//! input order, and it is re-run on every snapshot refresh rather than
//! cached -- group composition changes move sort keys.

use std::cmp::Ordering;

use crate::models::group::AdGroup;

/// Sort groups in place for display.
pub fn sort_groups(groups: &mut [AdGroup]) {
    groups.sort_by(compare_groups);
}

/// Return the indices of `groups` in display order without reordering the
/// slice itself. Used by renumbering, which assigns numbers in sort order
/// but leaves the snapshot's storage order untouched.
pub fn sorted_indices(groups: &[AdGroup]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..groups.len()).collect();
    indices.sort_by(|&a, &b| compare_groups(&groups[a], &groups[b]));
    indices
}

fn compare_groups(a: &AdGroup, b: &AdGroup) -> Ordering {
    let a_name = a.first_asset_name();
    let b_name = b.first_asset_name();

    match (leading_number(a_name), leading_number(b_name)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => compare_names(a_name, b_name),
    }
}

/// Parse a leading run of ASCII digits, if any.
///
/// A run too long for `u64` is treated as "no leading number" so the
/// comparison degrades to lexicographic instead of failing.
fn leading_number(name: &str) -> Option<u64> {
    let digits: &str = {
        let end = name
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(name.len());
        &name[..end]
    };

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Case-folded lexicographic compare, with the raw bytes as a tiebreaker so
/// the ordering stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
