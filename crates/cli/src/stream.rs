//! Crossbeam-channel convenience around [`subseq_engine::Index::query`].
//!
//! A thin wrapper: the query runs on its own thread and feeds a `Receiver` the
//! caller can drain lazily instead of blocking until every result is collected.

use std::sync::Arc;

use crossbeam::channel::{self, Receiver};
use subseq_engine::Index;

/// Run `query` against `index` on a background thread, streaming matches back
/// over an unbounded channel. The sink's `continue` signal is wired to whether
/// the channel's receiver is still alive, so a dropped `Receiver` stops the query.
pub fn stream_query(index: Arc<Index>, query: String, max: usize) -> Receiver<(String, Vec<u8>)> {
    let (tx, rx) = channel::unbounded();

    std::thread::spawn(move || {
        index.query(&query, max, &mut |s: &str, positions: &[u8]| {
            tx.send((s.to_string(), positions.to_vec())).is_ok()
        });
    });

    rx
}

/// Run `query` against `index` in-place, collecting every match into a `Vec`.
///
/// A synchronous convenience for callers that don't need the background-thread
/// streaming [`stream_query`] offers.
pub fn collect_query(index: &Index, query: &str, max: usize) -> Vec<(String, Vec<u8>)> {
    let mut out = Vec::new();
    index.query(query, max, &mut |s: &str, positions: &[u8]| {
        out.push((s.to_string(), positions.to_vec()));
        true
    });
    out
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
