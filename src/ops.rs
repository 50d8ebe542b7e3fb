use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash and equality for set elements, supplied at construction.
///
/// Implementations must be deterministic and mutually consistent: if
/// `eq(a, b)` then `hash(a) == hash(b)`. An ops value must not touch the
/// table it is serving.
pub trait SetOps<T> {
    fn hash(&self, value: &T) -> u64;
    fn eq(&self, a: &T, b: &T) -> bool;
}

/// Ops backed by the element type's own `Hash` and `Eq` implementations.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultOps;

impl<T: Hash + Eq> SetOps<T> for DefaultOps {
    fn hash(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Ops built from a pair of functions, for element types without usable
/// `Hash`/`Eq` implementations or with a nonstandard notion of identity.
#[derive(Clone, Copy, Debug)]
pub struct FnOps<H, E> {
    hash: H,
    eq: E,
}

impl<H, E> FnOps<H, E> {
    pub fn new(hash: H, eq: E) -> Self {
        FnOps { hash, eq }
    }
}

impl<T, H, E> SetOps<T> for FnOps<H, E>
where
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }
}
