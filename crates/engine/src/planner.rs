//! Cost-based plan selection.
//!
//! A simple `Cost` newtype lets the three candidate plans be compared by a single
//! `u64` estimate before one is picked and run.

use crate::index::Index;

/// An estimated query cost in arbitrary units: candidate-list length times the
/// plan's per-candidate verification weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cost(pub u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const IMPOSSIBLE: Cost = Cost(u64::MAX);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Seed from the bigram list for `(Q[0], Q[1])`.
    LeadingBigram,
    /// Seed from the rarest `(Q[0], Q[i])` bigram list, `i` in `2..|Q|`.
    LeadingChar { anchor: usize },
    /// Seed from the rarest bigram list among any pair within the first 16 query bytes.
    Unsorted { seed: (usize, usize) },
}

const LEADING_BIGRAM_WEIGHT: u64 = 1;
const LEADING_CHAR_WEIGHT: u64 = 4;
const UNSORTED_WEIGHT: u64 = 16;
const UNSORTED_WINDOW: usize = 16;

/// Choose the cheapest of the three plans for a query of at least two bytes.
pub fn choose_plan(index: &Index, query: &[u8]) -> Plan {
    debug_assert!(query.len() >= 2);

    let leading_bigram_cost = Cost(index.bigram_list_len(query[0], query[1]) as u64 * LEADING_BIGRAM_WEIGHT);

    let mut leading_char_anchor = 1usize;
    let mut leading_char_cost = Cost::IMPOSSIBLE;
    for i in 2..query.len() {
        let len = index.bigram_list_len(query[0], query[i]) as u64;
        let cost = Cost(len * LEADING_CHAR_WEIGHT);
        if cost < leading_char_cost {
            leading_char_cost = cost;
            leading_char_anchor = i;
        }
    }

    let window = query.len().min(UNSORTED_WINDOW);
    let mut unsorted_seed = (0usize, 1usize);
    let mut unsorted_cost = Cost::IMPOSSIBLE;
    for i in 0..window {
        for j in (i + 1)..window {
            let len = index.bigram_list_len(query[i], query[j]) as u64;
            let cost = Cost(len * UNSORTED_WEIGHT);
            if cost < unsorted_cost {
                unsorted_cost = cost;
                unsorted_seed = (i, j);
            }
        }
    }

    let chosen = if leading_bigram_cost <= leading_char_cost && leading_bigram_cost <= unsorted_cost {
        Plan::LeadingBigram
    } else if leading_char_cost <= unsorted_cost {
        Plan::LeadingChar { anchor: leading_char_anchor }
    } else {
        Plan::Unsorted { seed: unsorted_seed }
    };

    #[cfg(debug_assertions)]
    log::debug!(
        "chose {chosen:?} for query len {} (costs: leading_bigram={leading_bigram_cost:?}, \
         leading_char={leading_char_cost:?}, unsorted={unsorted_cost:?})",
        query.len(),
    );

    chosen
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
