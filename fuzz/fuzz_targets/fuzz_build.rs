#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the alphabet size, the rest become symbols of it
    if let Some((&first, rest)) = data.split_first() {
        let k = first % 26 + 1;
        let input: String = rest.iter().map(|&b| (b'a' + b % k) as char).collect();

        if !input.is_empty() {
            let tree = sfx::SuffixTree::build(&input).expect("mapped input is valid");
            assert_eq!(tree.check_invariants(), Ok(()));
            assert_eq!(tree.suffixes().count(), input.len() + 1);
        }
    }

    // Raw text must either build or fail with a BuildError, never panic
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(tree) = sfx::SuffixTree::build(text) {
            assert_eq!(tree.check_invariants(), Ok(()));
        }
    }
});
