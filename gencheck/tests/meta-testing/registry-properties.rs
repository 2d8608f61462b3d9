//! Registry meta tests

use crate::{arbitrary_seed, meta_config};
use gencheck::*;

/// Property: An override for `i32` is seen by every composite built on it
pub fn test_int_override_reaches_every_composite() {
    let prop = for_all(
        (IntGen::new(-50, 0).unwrap(), IntGen::new(0, 50).unwrap(), arbitrary_seed()),
        |&(min, max, seed): &(i32, i32, u64)| {
            let mut registry = Registry::with_defaults();
            registry.register_generator(IntGen::new(min, max).unwrap());

            let in_range = |x: &i32| (min..=max).contains(x);
            let mut source = Source::from_seed(seed);
            let single = registry.resolve::<i32>().unwrap();
            let pairs = registry.resolve::<(i32, i32)>().unwrap();
            let vecs = registry.resolve::<Vec<i32>>().unwrap();
            (0..10).all(|_| {
                let (a, b) = pairs.generate(&mut source);
                in_range(&single.generate(&mut source))
                    && in_range(&a)
                    && in_range(&b)
                    && vecs.generate(&mut source).iter().all(|x| in_range(x))
            })
        },
    )
    .named("registry overrides");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ Registry override property passed");
}

/// Property: Resolving twice and drawing with the same seed agrees
pub fn test_resolution_is_deterministic() {
    let registry = Registry::with_defaults();
    let prop = for_all(arbitrary_seed(), move |&seed: &u64| {
        let first = registry.resolve::<Vec<String>>().unwrap();
        let second = registry.resolve::<Vec<String>>().unwrap();
        first.generate(&mut Source::from_seed(seed)) == second.generate(&mut Source::from_seed(seed))
    })
    .named("deterministic resolution");

    let result = prop.run(&meta_config(30));
    assert!(result.all_passed(), "{result}");
    println!("✓ Deterministic resolution property passed");
}
