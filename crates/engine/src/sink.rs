//! Result emission.
//!
//! A query streams results into a sink rather than returning a collected buffer.
//! The sink's return value doubles as the cancellation signal: Rust has no
//! closed-channel or exception idiom this direct.

/// Receives one matched string and its match positions at a time.
///
/// Returning `false` stops the query early; `true` asks for more results (subject
/// to the query's own `max` budget).
pub trait ResultSink {
    fn emit(&mut self, s: &str, positions: &[u8]) -> bool;
}

impl<F> ResultSink for F
where
    F: FnMut(&str, &[u8]) -> bool,
{
    fn emit(&mut self, s: &str, positions: &[u8]) -> bool {
        self(s, positions)
    }
}
