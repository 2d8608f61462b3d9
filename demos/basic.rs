//! Basic example demonstrating gencheck property checks.

use gencheck::*;

fn multiply_with_loop(a: i32, b: i32) -> i32 {
    let product: i32 = (0..b.unsigned_abs()).map(|_| a).sum();
    if b < 0 {
        -product
    } else {
        product
    }
}

fn main() {
    println!("gencheck Property Checking Examples");
    println!();

    // Example 1: Simple boolean property
    println!("Testing boolean property: all booleans are either true or false");
    #[allow(clippy::nonminimal_bool)]
    let result = check(BoolGen, |&b| b || !b, 10);
    println!("{result}");
    println!();

    // Example 2: Two multiplication implementations agree
    println!("Testing integer property: a * b equals repeated addition");
    let pairs = (IntGen::<i32>::symmetric(), IntGen::<i32>::symmetric());
    let result = for_all(pairs, |&(a, b)| a * b == multiply_with_loop(a, b))
        .named("multiplication")
        .run(&Config::default());
    println!("{result}");
    println!();

    // Example 3: Property that fails on some samples
    println!("Testing property that should fail: all integers are positive");
    let result = for_all(IntGen::new(-10, 10).unwrap_or_default(), |&x| x > 0)
        .named("positive")
        .run(&Config::default().with_tests(10));
    println!("{result}");
    println!();

    // Example 4: Replay a run from its seed
    println!("Replaying the failing run with seed {}", result.seed);
    let replay = for_all(IntGen::new(-10, 10).unwrap_or_default(), |&x| x > 0)
        .run(&Config::default().with_tests(10).with_seed(result.seed).with_trace(false));
    println!("Same outcomes: {}", replay.outcomes == result.outcomes);
}
