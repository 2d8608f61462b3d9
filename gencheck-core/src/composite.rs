//! Generators that assemble collections and records from other generators.

use crate::{data::*, error::*, gen::*, registry::*};
use rand::Rng;

/// Default upper bound for sequence lengths.
pub const DEFAULT_VEC_LEN: usize = 10;

/// Generator for sequences of `0..=max_len` elements.
///
/// The length is drawn uniformly first, then the element generator is
/// invoked that many times; elements keep their generation order.
#[derive(Debug, Clone)]
pub struct VecGen<G> {
    element: G,
    max_len: usize,
}

impl<G: Generator> VecGen<G> {
    pub fn new(element: G, max_len: usize) -> Self {
        VecGen { element, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl<G: Generator> Generator for VecGen<G> {
    type Value = Vec<G::Value>;

    fn generate(&self, source: &mut Source) -> Self::Value {
        let len = source.gen_range(0..=self.max_len);
        (0..len).map(|_| self.element.generate(source)).collect()
    }
}

/// Uniform choice over a fixed, non-empty set of values.
///
/// Used for category fields: a discrete index is drawn and mapped to the
/// corresponding member.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<T> {
    values: Vec<T>,
}

impl<T: Clone> OneOf<T> {
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(GencheckError::InvalidConfiguration {
                message: "one_of needs at least one value".to_string(),
            });
        }
        Ok(OneOf { values })
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone> Generator for OneOf<T> {
    type Value = T;

    fn generate(&self, source: &mut Source) -> T {
        let index = source.gen_range(0..self.values.len());
        self.values[index].clone()
    }
}

type Assign<T> = Box<dyn Fn(&mut T, &mut Source)>;

/// Builder for record generators with one generator per named field.
///
/// `generate()` starts from the value returned by `init` and invokes each
/// field generator exactly once, in the order the fields were added.
///
/// ```
/// use gencheck_core::*;
///
/// #[derive(Debug, Default)]
/// struct Account {
///     owner: String,
///     balance: u32,
/// }
///
/// let gen = RecordGen::new(Account::default)
///     .field("owner", StringGen::default(), |a, v| a.owner = v)
///     .field("balance", IntGen::new(0u32, 1000).unwrap(), |a, v| a.balance = v);
///
/// let account = gen.generate(&mut Source::from_seed(1));
/// assert!(account.balance <= 1000);
/// ```
pub struct RecordGen<T> {
    init: Box<dyn Fn() -> T>,
    fields: Vec<(&'static str, Assign<T>)>,
}

impl<T: 'static> RecordGen<T> {
    /// Start a record generator from an initial value.
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        RecordGen {
            init: Box::new(init),
            fields: Vec::new(),
        }
    }

    /// Add a field filled by `generator`.
    pub fn field<G, F>(mut self, name: &'static str, generator: G, set: F) -> Self
    where
        G: Generator + 'static,
        F: Fn(&mut T, G::Value) + 'static,
    {
        let assign: Assign<T> = Box::new(move |record: &mut T, source: &mut Source| {
            set(record, generator.generate(source))
        });
        self.fields.push((name, assign));
        self
    }

    /// Add a field whose generator is resolved from `registry`.
    pub fn field_from<V, F>(self, registry: &Registry, name: &'static str, set: F) -> Result<Self>
    where
        V: 'static,
        F: Fn(&mut T, V) + 'static,
    {
        let generator = registry.resolve::<V>()?;
        Ok(self.field(name, generator, set))
    }

    /// Field names in generation order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }
}

impl<T> Generator for RecordGen<T> {
    type Value = T;

    fn generate(&self, source: &mut Source) -> T {
        let mut record = (self.init)();
        for (_, assign) in &self.fields {
            assign(&mut record, source);
        }
        record
    }
}

impl<T> std::fmt::Debug for RecordGen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordGen")
            .field("fields", &self.fields.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}
