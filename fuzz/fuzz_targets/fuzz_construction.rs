#![no_main]

use dnatrie::tree::{Match, SuffixTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either be rejected up front or yield a tree
    // that finds every one of its own suffixes
    let Ok(tree) = SuffixTree::from_bases(data) else {
        assert!(data.iter().any(|b| !b"ACGT".contains(b)));
        return;
    };

    assert_eq!(tree.leaf_count(), data.len() + 1);
    for j in 0..data.len() {
        match tree.find_first_occurrence(&data[j..]) {
            Match::Found(k) => assert!(k <= j && data[k..].starts_with(&data[j..])),
            Match::NotFound => panic!("suffix {} missing", j),
        }
    }
});
