use super::*;
use crate::builder::Builder;

fn collect(index: &Index, query: &[u8], plan: Plan, max: usize) -> Vec<(String, Vec<u8>)> {
    let mut out = Vec::new();
    run(index, query, plan, max, &mut |s: &str, pos: &[u8]| {
        out.push((s.to_string(), pos.to_vec()));
        true
    });
    out
}

#[test]
fn leading_char_plan_matches_rare_anchor_and_verifies_tail() {
    let mut b = Builder::new();
    b.insert("aaaaaaaaz");
    for last in "bcdefghij".bytes() {
        b.insert(&format!("aaaaaaaa{}", last as char));
    }
    let index = b.build();

    let query = b"aaaaaaaaz";
    assert_eq!(
        crate::planner::choose_plan(&index, query),
        Plan::LeadingChar { anchor: 8 },
    );

    let got = collect(&index, query, Plan::LeadingChar { anchor: 8 }, 10);
    assert_eq!(
        got,
        vec![("aaaaaaaaz".to_string(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8])],
    );
}

#[test]
fn unsorted_plan_seeds_from_unanchored_pair_and_verifies_whole_query() {
    let mut b = Builder::new();
    b.insert("abcq");
    for i in 0..20 {
        b.insert(&format!("ab{i}"));
    }
    for i in 0..9 {
        b.insert(&format!("ac{i}"));
    }
    for i in 0..9 {
        b.insert(&format!("aq{i}"));
    }
    let index = b.build();

    let query = b"abcq";
    assert_eq!(
        crate::planner::choose_plan(&index, query),
        Plan::Unsorted { seed: (1, 2) },
    );

    let got = collect(&index, query, Plan::Unsorted { seed: (1, 2) }, 10);
    assert_eq!(got, vec![("abcq".to_string(), vec![0, 1, 2, 3])]);
}

#[test]
fn unsorted_plan_respects_max() {
    let mut b = Builder::new();
    for s in ["abcq", "abcr", "abcs"] {
        b.insert(s);
    }
    let index = b.build();
    // "abc" is a subsequence of all three records; cap at 1 and expect exactly one.
    let got = collect(&index, b"abc", Plan::Unsorted { seed: (0, 1) }, 1);
    assert_eq!(got.len(), 1);
}
