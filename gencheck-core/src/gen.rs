//! The generator trait and the boxed generator type.

use crate::data::*;

/// A source of randomized values of one type.
///
/// Implementors hold their configuration, fixed at construction, and draw
/// one fresh value per call from the source they are handed.
pub trait Generator {
    /// The type of value produced.
    type Value;

    /// Produce one value.
    fn generate(&self, source: &mut Source) -> Self::Value;

    /// Erase the concrete generator type.
    fn boxed(self) -> Gen<Self::Value>
    where
        Self: Sized + 'static,
    {
        Gen::new(move |source| self.generate(source))
    }
}

/// A type-erased generator for values of type `T`.
///
/// Generators are explicit, first-class values that can be composed and
/// stored in a [`Registry`](crate::Registry).
pub struct Gen<T> {
    generator: Box<dyn Fn(&mut Source) -> T>,
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Source) -> T + 'static,
    {
        Gen {
            generator: Box::new(f),
        }
    }

    /// Create a generator that always produces the same value.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |_source| value.clone())
    }

    /// Draw one value from the process-wide shared source.
    pub fn sample(&self) -> T {
        SharedSource::global().draw(self)
    }
}

impl<T: 'static> Gen<T> {
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + 'static,
    {
        Gen::new(move |source| f(self.generate(source)))
    }
}

impl<T> Generator for Gen<T> {
    type Value = T;

    fn generate(&self, source: &mut Source) -> T {
        (self.generator)(source)
    }
}

impl<T> std::fmt::Debug for Gen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Gen { .. }")
    }
}

macro_rules! tuple_generator {
    ($($name:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($name: Generator),+> Generator for ($($name,)+) {
            type Value = ($($name::Value,)+);

            fn generate(&self, source: &mut Source) -> Self::Value {
                let ($($name,)+) = self;
                ($($name.generate(source),)+)
            }
        }
    };
}

tuple_generator!(A, B);
tuple_generator!(A, B, C);
tuple_generator!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;

    impl Generator for Counter {
        type Value = u64;

        fn generate(&self, source: &mut Source) -> u64 {
            source.next_u64() % 10
        }
    }

    #[test]
    fn test_constant() {
        let gen = Gen::constant("x");
        let mut source = Source::from_seed(0);
        for _ in 0..5 {
            assert_eq!(gen.generate(&mut source), "x");
        }
    }

    #[test]
    fn test_map_and_boxed() {
        let gen = Counter.boxed().map(|n| n + 100);
        let mut source = Source::from_seed(3);
        for _ in 0..50 {
            let value = gen.generate(&mut source);
            assert!((100..110).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let gen = Counter.boxed();
        let first: Vec<u64> = {
            let mut source = Source::from_seed(11);
            (0..20).map(|_| gen.generate(&mut source)).collect()
        };
        let second: Vec<u64> = {
            let mut source = Source::from_seed(11);
            (0..20).map(|_| gen.generate(&mut source)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_tuple_draws_each_component() {
        let gen = (Gen::constant(1), Counter, Gen::constant('z'));
        let mut source = Source::from_seed(5);
        let (a, b, c) = gen.generate(&mut source);
        assert_eq!(a, 1);
        assert!(b < 10);
        assert_eq!(c, 'z');
    }

    #[test]
    fn test_sample_uses_global_source() {
        let gen = Counter.boxed();
        assert!(gen.sample() < 10);
    }
}
