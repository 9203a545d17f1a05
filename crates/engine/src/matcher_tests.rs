use super::*;

#[test]
fn matches_case_insensitive_subsequence() {
    let got = match_tail(b"Hello", 0, b"hl");
    assert_eq!(got.unwrap().as_slice(), &[0, 2]);
}

#[test]
fn fails_when_order_is_wrong() {
    assert!(match_tail(b"hello", 0, b"oh").is_none());
}

#[test]
fn greedy_takes_earliest_available_byte() {
    // "ll" in "hello": first 'l' at 2, second at 3.
    let got = match_tail(b"hello", 0, b"ll");
    assert_eq!(got.unwrap().as_slice(), &[2, 3]);
}

#[test]
fn respects_start_cursor() {
    assert!(match_tail(b"hello", 3, b"he").is_none());
    let got = match_tail(b"hello", 3, b"lo");
    assert_eq!(got.unwrap().as_slice(), &[3, 4]);
}
