//! Check runner meta tests

use crate::{arbitrary_seed, meta_config};
use gencheck::*;

/// Property: A run evaluates exactly the configured number of samples
pub fn test_runner_counts() {
    let prop = for_all(
        (IntGen::new(0usize, 60).unwrap(), arbitrary_seed()),
        |&(count, seed): &(usize, u64)| {
            let inner = for_all(IntGen::<i32>::symmetric(), |&x| x % 2 == 0)
                .run(&meta_config(count).with_seed(seed));
            inner.tests_run() == count
                && inner.passed_count() + inner.failed_count() == count
                && inner.seed == seed
        },
    )
    .named("runner counts");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ Runner count property passed");
}

/// Property: `all_passed` is exactly the conjunction of the outcomes
pub fn test_all_passed_agrees_with_outcomes() {
    let prop = for_all(
        (IntGen::new(0, 10).unwrap(), arbitrary_seed()),
        |&(threshold, seed): &(i32, u64)| {
            let inner = for_all(IntGen::new(0, 10).unwrap(), move |&x| x <= threshold)
                .run(&meta_config(15).with_seed(seed));
            let expected = inner.outcomes.iter().all(|o| o.value <= threshold);
            let verdicts_match = inner.outcomes.iter().all(|o| o.passed == (o.value <= threshold));
            inner.all_passed() == expected && verdicts_match
        },
    )
    .named("all_passed agreement");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ all_passed agreement property passed");
}
