//! The immutable, queryable index.

use crate::fold::{ALPHABET_SIZE, bigram_code, fold};
use crate::planner::choose_plan;
use crate::plans;
use crate::posting::{BigramPosting, MonogramPosting};
use crate::sink::ResultSink;
use crate::span::StringSpan;

/// A built subsequence search index over a fixed corpus of strings.
///
/// `Index` holds no interior mutability and no locks: it is `Sync` by construction,
/// and every [`Index::query`] call only reads. There is no way back to a [`Builder`](crate::Builder) —
/// once built, an index is done changing.
pub struct Index {
    buffer: Vec<u8>,
    records: Vec<StringSpan>,
    monograms: Vec<Vec<MonogramPosting>>,
    bigrams: Vec<Vec<BigramPosting>>,
}

impl Index {
    pub(crate) fn from_parts(
        buffer: Vec<u8>,
        records: Vec<StringSpan>,
        monograms: Vec<Vec<MonogramPosting>>,
        bigrams: Vec<Vec<BigramPosting>>,
    ) -> Self {
        debug_assert_eq!(monograms.len(), ALPHABET_SIZE);
        debug_assert_eq!(bigrams.len(), ALPHABET_SIZE * ALPHABET_SIZE);
        Self { buffer, records, monograms, bigrams }
    }

    /// Number of distinct (case-insensitively deduplicated) strings in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Strings in case-insensitive lexicographic order (their `str_id` order).
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| self.bytes_to_str(r.bytes(&self.buffer)))
    }

    pub(crate) fn string_bytes(&self, str_id: u32) -> &[u8] {
        self.records[str_id as usize].bytes(&self.buffer)
    }

    pub(crate) fn string_str(&self, str_id: u32) -> &str {
        self.bytes_to_str(self.string_bytes(str_id))
    }

    fn bytes_to_str<'a>(&self, bytes: &'a [u8]) -> &'a str {
        // Every span bounds a whole string originally passed to `Builder::insert`,
        // so this is always valid UTF-8; fall back defensively rather than panic.
        std::str::from_utf8(bytes).unwrap_or("")
    }

    pub(crate) fn bigram_list(&self, code: usize) -> &[BigramPosting] {
        &self.bigrams[code]
    }

    pub(crate) fn monogram_list(&self, code: usize) -> &[MonogramPosting] {
        &self.monograms[code]
    }

    /// Length of the bigram posting list for the ordered pair of raw query bytes,
    /// or `0` if either byte is unindexable (no such pair can ever have postings).
    pub(crate) fn bigram_list_len(&self, q0: u8, q1: u8) -> usize {
        match (fold(q0), fold(q1)) {
            (Some(c0), Some(c1)) => self.bigrams[bigram_code(c0, c1)].len(),
            _ => 0,
        }
    }

    /// Stream matches for `query` into `sink`, stopping after `max` results or when
    /// the sink returns `false`.
    pub fn query<S: ResultSink>(&self, query: &str, max: usize, sink: &mut S) {
        if max == 0 {
            return;
        }
        let q = query.as_bytes();

        match q.len() {
            0 => {
                for (str_id, _) in self.records.iter().enumerate().take(max) {
                    if !sink.emit(self.string_str(str_id as u32), &[]) {
                        return;
                    }
                }
            }
            1 => {
                let Some(code) = fold(q[0]) else { return };
                for posting in self.monogram_list(code as usize).iter().take(max) {
                    if !sink.emit(self.string_str(posting.str_id), &[posting.pos]) {
                        return;
                    }
                }
            }
            _ => {
                let plan = choose_plan(self, q);
                plans::run(self, q, plan, max, sink);
            }
        }
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
