//! String generator meta tests
//!
//! Length, character range and space-run invariants checked over drawn
//! configurations, including ranges that contain the space character.

use crate::{arbitrary_seed, meta_config};
use gencheck::*;

fn check_string(s: &str, min_len: usize, max_len: usize, lo: char, hi: char) -> bool {
    let len = s.chars().count();
    len >= min_len
        && len <= max_len
        && s.chars().all(|c| c == ' ' || (lo..=hi).contains(&c))
        && longest_space_run(s) <= MAX_SPACE_RUN
}

/// Property: Strings respect length, characters and the space-run cap
pub fn test_string_invariants_for_any_config() {
    let prop = for_all(
        (
            (IntGen::new(0usize, 10).unwrap(), IntGen::new(0usize, 30).unwrap()),
            IntGen::new(0usize, 40).unwrap(),
            arbitrary_seed(),
        ),
        |&((min_len, extra), max_spaces, seed): &((usize, usize), usize, u64)| {
            let max_len = min_len + extra;
            let gen = StringGen::new(min_len, max_len, 'a', 'z')
                .unwrap()
                .with_max_spaces(max_spaces);
            let mut source = Source::from_seed(seed);
            (0..20).all(|_| check_string(&gen.generate(&mut source), min_len, max_len, 'a', 'z'))
        },
    )
    .named("string invariants");

    let result = prop.run(&meta_config(40));
    assert!(result.all_passed(), "{result}");
    println!("✓ String invariants property passed");
}

/// Property: Ranges that include the space character still cap space runs
pub fn test_space_heavy_ranges() {
    let prop = for_all(
        (IntGen::new(0usize, 25).unwrap(), arbitrary_seed()),
        |&(max_spaces, seed): &(usize, u64)| {
            let gen = StringGen::new(10, 40, ' ', '#')
                .unwrap()
                .with_max_spaces(max_spaces);
            let mut source = Source::from_seed(seed);
            (0..20).all(|_| check_string(&gen.generate(&mut source), 10, 40, ' ', '#'))
        },
    )
    .named("space-heavy ranges");

    let result = prop.run(&meta_config(40));
    assert!(result.all_passed(), "{result}");

    // Only spaces is acceptable as long as a run can never exceed the cap.
    let gen = StringGen::new(0, MAX_SPACE_RUN, ' ', ' ').unwrap();
    let mut source = Source::from_seed(7);
    assert!((0..100).all(|_| gen.generate(&mut source).chars().all(|c| c == ' ')));
    assert!(StringGen::new(0, MAX_SPACE_RUN + 1, ' ', ' ').is_err());
    println!("✓ Space-heavy range property passed");
}
