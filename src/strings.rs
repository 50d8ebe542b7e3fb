use crate::ops::SetOps;
use crate::table::FixedSet;

/// Case-sensitive rolling hash over the string's bytes: `h = 31*h + b`
/// with u32 wraparound.
pub fn strhash(s: &str) -> u32 {
    let mut h: u32 = 0;
    for b in s.bytes() {
        h = h.wrapping_mul(31).wrapping_add(b as u32);
    }
    h
}

/// Ops for string-keyed sets: `strhash` plus content equality. Works for
/// any element that can be viewed as `&str`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrOps;

impl<S: AsRef<str>> SetOps<S> for StrOps {
    fn hash(&self, value: &S) -> u64 {
        strhash(value.as_ref()) as u64
    }

    fn eq(&self, a: &S, b: &S) -> bool {
        a.as_ref() == b.as_ref()
    }
}

/// Fixed-capacity set of owned strings hashed with `strhash`.
pub type StringSet = FixedSet<String, StrOps>;

impl StringSet {
    /// Creates a string set holding at most `capacity` strings.
    pub fn with_capacity(capacity: usize) -> StringSet {
        FixedSet::with_ops(capacity, StrOps)
    }
}
