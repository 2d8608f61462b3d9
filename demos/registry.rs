//! Resolving generators by type, with derived records and overrides.

use gencheck::*;

fn adult_age(_registry: &Registry) -> gencheck::Result<Gen<i32>> {
    Ok(IntGen::new(18, 99)?.boxed())
}

#[derive(Arbitrary, Debug, Clone, PartialEq)]
enum Role {
    Student,
    Teacher,
}

#[derive(Arbitrary, Debug, Clone)]
struct Person {
    first_name: String,
    last_name: String,
    #[arbitrary(with = adult_age)]
    age: i32,
    role: Role,
}

fn main() -> gencheck::Result<()> {
    let mut registry = Registry::with_defaults();
    registry
        .register_arbitrary::<Role>()
        .register_arbitrary::<Person>();

    let config = Config::default().with_tests(5);
    println!("People from the default registry:");
    let result = quick_check::<Person, _>(&registry, |p| p.age >= 18, &config)?;
    println!("{result}");
    println!();

    println!("People with names from a fixed list:");
    let names = OneOf::new(vec!["Ada".to_string(), "Alan".to_string(), "Grace".to_string()])?;
    registry.register_generator(names);
    let result = quick_check::<Person, _>(&registry, |p| p.first_name.len() <= 5, &config)?;
    println!("{result}");
    println!();

    registry.remove::<Role>();
    match registry.resolve::<Person>() {
        Ok(_) => println!("Person still resolves"),
        Err(err) => println!("Without Role: {err}"),
    }
    Ok(())
}
