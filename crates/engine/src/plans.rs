//! Plan execution.

use smallvec::SmallVec;

use crate::index::Index;
use crate::matcher::match_tail;
use crate::planner::Plan;
use crate::sink::ResultSink;

type PositionBuf = SmallVec<[u8; 8]>;

/// Run the chosen plan, feeding matches to `sink` in ascending `(positions, str_id)`
/// order within each anchor group, until `max` results have been emitted or the
/// sink asks to stop.
pub fn run(index: &Index, query: &[u8], plan: Plan, max: usize, sink: &mut dyn ResultSink) {
    match plan {
        Plan::LeadingBigram => run_leading_bigram(index, query, max, sink),
        Plan::LeadingChar { anchor } => run_leading_char(index, query, anchor, max, sink),
        Plan::Unsorted { seed } => run_unsorted(index, query, seed, max, sink),
    }
}

/// Group the `(Q[0], Q[1])` bigram list by `(pos0, pos1)`, verify the tail
/// `Q[2..]` from `pos1 + 1`, and emit matches sorted within each group.
fn run_leading_bigram(index: &Index, query: &[u8], max: usize, sink: &mut dyn ResultSink) {
    let Some(c0) = crate::fold::fold(query[0]) else { return };
    let Some(c1) = crate::fold::fold(query[1]) else { return };
    let list = index.bigram_list(crate::fold::bigram_code(c0, c1));
    let tail = &query[2..];

    let mut remaining = max;
    let mut group: Vec<(PositionBuf, u32)> = Vec::new();
    let mut i = 0;
    while i < list.len() {
        if remaining == 0 {
            return;
        }
        let (pos0, pos1) = (list[i].pos0, list[i].pos1);
        group.clear();
        while i < list.len() && list[i].pos0 == pos0 && list[i].pos1 == pos1 {
            let entry = &list[i];
            let haystack = index.string_bytes(entry.str_id);
            if let Some(tail_positions) = match_tail(haystack, entry.pos1 as usize + 1, tail) {
                group.push((tail_positions, entry.str_id));
            }
            i += 1;
        }
        group.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        for (tail_positions, str_id) in &group {
            if remaining == 0 {
                return;
            }
            let mut positions = PositionBuf::with_capacity(2 + tail_positions.len());
            positions.push(pos0);
            positions.push(pos1);
            positions.extend_from_slice(tail_positions);
            if !sink.emit(index.string_str(*str_id), &positions) {
                return;
            }
            remaining -= 1;
        }
    }
}

/// Group the `(Q[0], Q[anchor])` bigram list by `pos0` alone, verify the full
/// tail `Q[1..]` from `pos0 + 1`.
fn run_leading_char(index: &Index, query: &[u8], anchor: usize, max: usize, sink: &mut dyn ResultSink) {
    let Some(c0) = crate::fold::fold(query[0]) else { return };
    let Some(ca) = crate::fold::fold(query[anchor]) else { return };
    let list = index.bigram_list(crate::fold::bigram_code(c0, ca));
    let tail = &query[1..];

    let mut remaining = max;
    let mut group: Vec<(PositionBuf, u32)> = Vec::new();
    let mut i = 0;
    while i < list.len() {
        if remaining == 0 {
            return;
        }
        let pos0 = list[i].pos0;
        group.clear();
        while i < list.len() && list[i].pos0 == pos0 {
            let entry = &list[i];
            let haystack = index.string_bytes(entry.str_id);
            if let Some(tail_positions) = match_tail(haystack, entry.pos0 as usize + 1, tail) {
                group.push((tail_positions, entry.str_id));
            }
            i += 1;
        }
        group.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        for (tail_positions, str_id) in &group {
            if remaining == 0 {
                return;
            }
            let mut positions = PositionBuf::with_capacity(1 + tail_positions.len());
            positions.push(pos0);
            positions.extend_from_slice(tail_positions);
            if !sink.emit(index.string_str(*str_id), &positions) {
                return;
            }
            remaining -= 1;
        }
    }
}

/// Seed candidates from the rarest pair within the first 16 query bytes,
/// re-verify the whole query from position 0 for each candidate.
fn run_unsorted(index: &Index, query: &[u8], seed: (usize, usize), max: usize, sink: &mut dyn ResultSink) {
    let (i, j) = seed;
    let Some(c0) = crate::fold::fold(query[i]) else { return };
    let Some(c1) = crate::fold::fold(query[j]) else { return };
    let list = index.bigram_list(crate::fold::bigram_code(c0, c1));

    let mut matches: Vec<(PositionBuf, u32)> = Vec::new();
    for entry in list {
        let haystack = index.string_bytes(entry.str_id);
        if let Some(positions) = match_tail(haystack, 0, query) {
            matches.push((positions, entry.str_id));
        }
    }
    matches.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut remaining = max;
    for (positions, str_id) in &matches {
        if remaining == 0 {
            return;
        }
        if !sink.emit(index.string_str(*str_id), positions) {
            return;
        }
        remaining -= 1;
    }
}

#[cfg(test)]
#[path = "plans_tests.rs"]
mod tests;
