mod builder;
mod fold;
mod index;
mod matcher;
mod planner;
mod plans;
mod posting;
mod sink;
mod span;

pub use builder::Builder;
pub use fold::{ALPHABET_SIZE, case_insensitive_cmp, fold};
pub use index::Index;
pub use sink::ResultSink;
