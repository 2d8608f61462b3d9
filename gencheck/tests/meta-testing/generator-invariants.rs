//! Generator invariant meta tests
//!
//! Properties that must hold for every configuration a generator accepts.

use crate::{arbitrary_seed, meta_config};
use gencheck::*;

/// Property: Integer generators stay within any valid closed range
pub fn test_int_bounds_hold_for_any_range() {
    let prop = for_all(
        (
            IntGen::new(-1000, 0).unwrap(),
            IntGen::new(0, 1000).unwrap(),
            arbitrary_seed(),
        ),
        |&(min, max, seed): &(i32, i32, u64)| {
            let gen = IntGen::new(min, max).unwrap();
            let mut source = Source::from_seed(seed);
            (0..50).all(|_| {
                let value = gen.generate(&mut source);
                value >= min && value <= max
            })
        },
    )
    .named("int bounds");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ Int bounds property passed");
}

/// Property: The same seed produces the same values
pub fn test_generator_determinism() {
    let prop = for_all(arbitrary_seed(), |&seed: &u64| {
        let gen = (
            IntGen::<i64>::symmetric(),
            StringGen::default(),
            VecGen::new(CharGen::default(), 8),
        );
        let first: Vec<_> = {
            let mut source = Source::from_seed(seed);
            (0..10).map(|_| gen.generate(&mut source)).collect()
        };
        let second: Vec<_> = {
            let mut source = Source::from_seed(seed);
            (0..10).map(|_| gen.generate(&mut source)).collect()
        };
        first == second
    })
    .named("determinism");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ Generator determinism property passed");
}

/// Property: Sequences never exceed their length bound
pub fn test_sequence_bounds() {
    let prop = for_all(
        (IntGen::new(0usize, 30).unwrap(), arbitrary_seed()),
        |&(max_len, seed): &(usize, u64)| {
            let gen = VecGen::new(IntGen::new(-3, 3).unwrap(), max_len);
            let mut source = Source::from_seed(seed);
            (0..20).all(|_| {
                let v = gen.generate(&mut source);
                v.len() <= max_len && v.iter().all(|x| (-3..=3).contains(x))
            })
        },
    )
    .named("sequence bounds");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ Sequence bounds property passed");
}
