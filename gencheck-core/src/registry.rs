//! Type-indexed generator registry.
//!
//! A [`Registry`] maps a type to the factory producing its canonical
//! generator. Factories receive the registry itself, so a composite factory
//! resolves its parts at resolution time and picks up any override
//! registered for them.

use crate::{composite::*, error::*, gen::*, primitive::*};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

type Factory<T> = Box<dyn Fn(&Registry) -> Result<Gen<T>>>;

/// Types that know how to build their own generator from a registry.
///
/// Usually derived with `#[derive(Arbitrary)]` and installed with
/// [`Registry::register_arbitrary`].
pub trait Arbitrary: Sized + 'static {
    fn arbitrary(registry: &Registry) -> Result<Gen<Self>>;
}

/// Lookup table from a type to its generator factory.
pub struct Registry {
    factories: HashMap<TypeId, Box<dyn Any>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in generators.
    ///
    /// Scalars use the `Default` configuration of their generator; the
    /// built-in sequences hold up to [`DEFAULT_VEC_LEN`] elements resolved
    /// through the registry.
    pub fn with_defaults() -> Self {
        let mut registry = Registry::new();
        registry
            .register_generator(BoolGen)
            .register_generator(CharGen::default())
            .register_generator(StringGen::default());

        macro_rules! register_ints {
            ($registry:ident; $($t:ty),*) => {
                $( $registry.register_generator(IntGen::<$t>::default()); )*
            };
        }
        register_ints!(registry; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

        registry
            .register::<(i32, i32), _>(|r| Ok((r.resolve::<i32>()?, r.resolve::<i32>()?).boxed()))
            .register::<Vec<i32>, _>(|r| r.resolve_vec::<i32>(DEFAULT_VEC_LEN))
            .register::<Vec<bool>, _>(|r| r.resolve_vec::<bool>(DEFAULT_VEC_LEN))
            .register::<Vec<char>, _>(|r| r.resolve_vec::<char>(DEFAULT_VEC_LEN))
            .register::<Vec<String>, _>(|r| r.resolve_vec::<String>(DEFAULT_VEC_LEN));
        registry
    }

    /// Register the factory for `T`, replacing any existing one.
    pub fn register<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&Registry) -> Result<Gen<T>> + 'static,
    {
        let factory: Factory<T> = Box::new(factory);
        self.factories.insert(TypeId::of::<T>(), Box::new(factory));
        self
    }

    /// Register a fixed generator; each resolution hands out a copy.
    pub fn register_generator<G>(&mut self, generator: G) -> &mut Self
    where
        G: Generator + Clone + 'static,
        G::Value: 'static,
    {
        self.register::<G::Value, _>(move |_| Ok(generator.clone().boxed()))
    }

    /// Register `T`'s own [`Arbitrary`] implementation.
    pub fn register_arbitrary<T: Arbitrary>(&mut self) -> &mut Self {
        self.register::<T, _>(T::arbitrary)
    }

    /// Resolve the generator for `T`.
    ///
    /// Fails with [`GencheckError::UnresolvedType`] when nothing is
    /// registered for `T`; there is no fallback value.
    pub fn resolve<T: 'static>(&self) -> Result<Gen<T>> {
        let factory = self
            .factories
            .get(&TypeId::of::<T>())
            .and_then(|factory| factory.downcast_ref::<Factory<T>>())
            .ok_or(GencheckError::UnresolvedType {
                type_name: type_name::<T>(),
            })?;
        factory(self)
    }

    /// Resolve a sequence generator over the registered generator for `T`.
    pub fn resolve_vec<T: 'static>(&self, max_len: usize) -> Result<Gen<Vec<T>>> {
        Ok(VecGen::new(self.resolve::<T>()?, max_len).boxed())
    }

    /// Check if a generator is registered for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.factories.contains_key(&TypeId::of::<T>())
    }

    /// Remove the generator for `T`, returning whether one was registered.
    pub fn remove<T: 'static>(&mut self) -> bool {
        self.factories.remove(&TypeId::of::<T>()).is_some()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("generators", &self.factories.len())
            .finish()
    }
}
