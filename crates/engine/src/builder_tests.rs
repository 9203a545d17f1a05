use super::*;

#[test]
fn build_orders_case_insensitively_without_merging_distinct_case_variants() {
    let mut b = Builder::new();
    for s in ["hello", "Hello", "world", "help", "shelter"] {
        b.insert(s);
    }
    let index = b.build();
    // "Hello" and "hello" differ in raw bytes, so dedup (exact-byte) keeps both;
    // only literal duplicates collapse.
    assert_eq!(index.len(), 5);
    assert_eq!(
        index.strings().collect::<Vec<_>>(),
        vec!["Hello", "hello", "help", "shelter", "world"],
    );
}

#[test]
fn build_dedups_exact_byte_duplicates() {
    let mut b = Builder::new();
    for s in ["hello", "hello", "world"] {
        b.insert(s);
    }
    let index = b.build();
    assert_eq!(index.len(), 2);
}

#[test]
fn empty_builder_produces_empty_index() {
    let index = Builder::new().build();
    assert_eq!(index.len(), 0);
}
