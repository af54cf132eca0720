#![no_main]

use arbitrary::Arbitrary;
use filters::{Candidate, FilterChain};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    seed: &'a str,
    source: &'a [u8],
    path: &'a str,
    only_inheritable: bool,
}

fuzz_target!(|input: Input<'_>| {
    let mut chain = FilterChain::new();
    let _ = chain.load(input.seed.as_bytes());
    let before = chain.len();

    let entry = Candidate::from_path(input.path);
    let excluded = chain.excluded(&entry, input.only_inheritable);
    let included = chain.included(&entry, input.only_inheritable);

    if chain.load(input.source).is_err() {
        assert_eq!(chain.len(), before);
        assert_eq!(chain.excluded(&entry, input.only_inheritable), excluded);
        assert_eq!(chain.included(&entry, input.only_inheritable), included);
    }
});
