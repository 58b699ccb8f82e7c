#![no_main]

use arbitrary::Arbitrary;
use dnatrie::tree::SuffixTree;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    /// Indices into ACGT, so most inputs build a tree
    sequence: Vec<u8>,
    patterns: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    let bases: Vec<u8> = input.sequence.iter().map(|b| b"ACGT"[(b % 4) as usize]).collect();
    let tree = SuffixTree::from_bases(&bases).expect("bases are in the alphabet");

    // Raw patterns may hold any byte, the terminator included; search must
    // agree with a plain scan of the terminated text
    let text = [bases.as_slice(), &b"$"[..]].concat();
    for pattern in &input.patterns {
        let expected = if pattern.is_empty() {
            Some(0)
        } else {
            text.windows(pattern.len()).position(|w| w == pattern.as_slice())
        };
        assert_eq!(tree.find_first_occurrence(pattern).offset(), expected);
    }
});
