//! Index construction.
//!
//! Strings are interned into a shared buffer, staged, then packed into sorted
//! posting arrays on `build()`. Postings are kept in dense per-code `Vec`s rather
//! than a hash map keyed by code, since the monogram/bigram code space here is
//! small and fully enumerable up front.

use crate::fold::{ALPHABET_SIZE, bigram_code, case_insensitive_cmp, fold};
use crate::index::Index;
use crate::posting::{BigramPosting, MonogramPosting, saturate_pos};
use crate::span::StringSpan;

/// Accumulates strings and consumes itself into an immutable [`Index`] on [`Builder::build`].
///
/// Consuming `self` by value in `build()` is the ownership-system's way of enforcing
/// the "a builder is staged exactly once" rule: there is no live `Builder` left over
/// to accidentally reuse or mutate after the index exists.
#[derive(Debug, Default)]
pub struct Builder {
    buffer: Vec<u8>,
    spans: Vec<StringSpan>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one corpus string. Strings are kept verbatim in insertion order in the
    /// shared buffer; ordering and deduplication happen later, in [`Builder::build`].
    pub fn insert(&mut self, s: &str) {
        let start = self.buffer.len() as u32;
        self.buffer.extend_from_slice(s.as_bytes());
        let end = self.buffer.len() as u32;
        self.spans.push(StringSpan { start, end });
    }

    /// Consume the builder and produce a queryable [`Index`].
    pub fn build(self) -> Index {
        let Builder { buffer, spans } = self;

        let mut order: Vec<u32> = (0..spans.len() as u32).collect();
        order.sort_by(|&a, &b| {
            case_insensitive_cmp(
                spans[a as usize].bytes(&buffer),
                spans[b as usize].bytes(&buffer),
            )
        });
        order.dedup_by(|&mut a, &mut b| spans[a as usize].bytes(&buffer) == spans[b as usize].bytes(&buffer));

        let records: Vec<StringSpan> = order.iter().map(|&i| spans[i as usize]).collect();

        let mut monograms: Vec<Vec<MonogramPosting>> = vec![Vec::new(); ALPHABET_SIZE];
        let mut bigrams: Vec<Vec<BigramPosting>> = vec![Vec::new(); ALPHABET_SIZE * ALPHABET_SIZE];

        // Generation-stamped "last string id that touched this slot" in place of a
        // bitmap that would need clearing before every string.
        let mut mono_seen: Vec<u32> = vec![u32::MAX; ALPHABET_SIZE];
        let mut bi_seen: Vec<u32> = vec![u32::MAX; ALPHABET_SIZE * ALPHABET_SIZE];

        for (str_id, record) in records.iter().enumerate() {
            let str_id = str_id as u32;
            let bytes = record.bytes(&buffer);

            for (pos, &b) in bytes.iter().enumerate() {
                let Some(code) = fold(b) else { continue };
                let idx = code as usize;
                if mono_seen[idx] != str_id {
                    mono_seen[idx] = str_id;
                    monograms[idx].push(MonogramPosting { pos: saturate_pos(pos), str_id });
                }
            }

            for i in 0..bytes.len() {
                let Some(c0) = fold(bytes[i]) else { continue };
                for j in (i + 1)..bytes.len() {
                    let Some(c1) = fold(bytes[j]) else { continue };
                    let code = bigram_code(c0, c1);
                    if bi_seen[code] != str_id {
                        bi_seen[code] = str_id;
                        bigrams[code].push(BigramPosting {
                            pos0: saturate_pos(i),
                            pos1: saturate_pos(j),
                            str_id,
                        });
                    }
                }
            }
        }

        for list in &mut monograms {
            list.sort_unstable();
        }
        for list in &mut bigrams {
            list.sort_unstable();
        }

        log::debug!(
            "built index: {} records ({} deduped from {}), {} bytes buffered",
            records.len(),
            spans.len() - records.len(),
            spans.len(),
            buffer.len(),
        );

        Index::from_parts(buffer, records, monograms, bigrams)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
