//! Tour of the built-in generators.

use gencheck::*;

#[derive(Debug, Clone, Default)]
struct Book {
    title: String,
    pages: u32,
    genre: &'static str,
}

fn main() -> gencheck::Result<()> {
    let config = Config::from_env()?;
    let mut source = config.source();
    println!("Drawing from {source}");
    println!();

    println!("Integers in [-10, 20]:");
    let ints = IntGen::new(-10, 20)?;
    for _ in 0..5 {
        println!("  {}", ints.generate(&mut source));
    }

    println!("Characters in ['a', 'f']:");
    let chars = CharGen::new('a', 'f')?;
    for _ in 0..5 {
        println!("  {:?}", chars.generate(&mut source));
    }

    println!("Strings of 3 to 12 characters with up to 8 spaces:");
    let strings = StringGen::new(3, 12, 'a', 'z')?.with_max_spaces(8);
    for _ in 0..5 {
        println!("  {:?}", strings.generate(&mut source));
    }

    println!("Sequences of up to 4 booleans:");
    let flags = VecGen::new(BoolGen, 4);
    for _ in 0..5 {
        println!("  {:?}", flags.generate(&mut source));
    }

    println!("Records:");
    let books = RecordGen::new(Book::default)
        .field("title", StringGen::default(), |b, v| b.title = v)
        .field("pages", IntGen::new(40u32, 900)?, |b, v| b.pages = v)
        .field("genre", OneOf::new(vec!["poetry", "history", "fiction"])?, |b, v| {
            b.genre = v
        });
    for _ in 0..3 {
        println!("  {:?}", books.generate(&mut source));
    }

    println!();
    println!("Checking page counts with the runner:");
    let result = for_all(books, |b: &Book| b.pages >= 40).named("pages").run(&config);
    println!("{result}");
    Ok(())
}
