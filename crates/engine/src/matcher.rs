//! Greedy leftmost subsequence matcher.

use smallvec::SmallVec;

use crate::fold::fold_for_compare;

/// Position list kept inline for the common short-query case.
pub type Positions = SmallVec<[u8; 8]>;

/// Find `tail` as a subsequence of `haystack`, scanning forward from `start`.
///
/// Both sides are case-folded before comparison (the matcher never compares raw
/// bytes directly), and each query byte consumes the earliest possible remaining
/// haystack byte — the greedy leftmost rule. Returns the matched positions, or
/// `None` if `tail` cannot be found in order from `start`.
pub fn match_tail(haystack: &[u8], start: usize, tail: &[u8]) -> Option<Positions> {
    let mut cursor = start;
    let mut positions = Positions::with_capacity(tail.len());

    for &want in tail {
        let folded_want = fold_for_compare(want);
        let found = haystack[cursor..]
            .iter()
            .position(|&b| fold_for_compare(b) == folded_want);
        let pos = cursor + found?;
        positions.push(crate::posting::saturate_pos(pos));
        cursor = pos + 1;
    }

    Some(positions)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
