use std::fmt;
use std::hash::Hash;
use std::mem;

use crate::error::Error;
use crate::ops::{DefaultOps, SetOps};

enum Slot<T> {
    Empty,
    Occupied(T),
    Tombstone,
}

/// Fixed-capacity hash set with open addressing and linear probing.
///
/// Capacity is set at creation and never grows. Removing an element leaves
/// a tombstone in its slot so probe chains that pass through it keep
/// working; a tombstone is reused by a later insert but never turns back
/// into an empty slot. Hashing and equality come from the `SetOps` value
/// supplied at construction.
pub struct FixedSet<T, O = DefaultOps> {
    slots: Box<[Slot<T>]>,
    len: usize,
    ops: O,
}

enum Probe {
    Found(usize),
    Vacant(usize),
    Full,
}

impl<T: Hash + Eq> FixedSet<T> {
    /// Creates a set holding at most `capacity` elements, hashed and
    /// compared with the element type's own `Hash`/`Eq`.
    pub fn new(capacity: usize) -> Self {
        Self::with_ops(capacity, DefaultOps)
    }
}

impl<T, O: SetOps<T>> FixedSet<T, O> {
    /// Creates a set holding at most `capacity` elements, using `ops` for
    /// hashing and equality.
    pub fn with_ops(capacity: usize, ops: O) -> Self {
        FixedSet {
            slots: std::iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            len: 0,
            ops,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of elements the set can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // Walks the probe sequence for `value`: home slot, then +1 with
    // wraparound, visiting each slot at most once. An empty slot ends the
    // walk, but the insertion target prefers the first tombstone passed on
    // the way so deleted slots get reused. A match ends the walk
    // immediately.
    fn probe(&self, value: &T) -> Probe {
        let cap = self.slots.len();
        if cap == 0 {
            return Probe::Full;
        }
        let home = (self.ops.hash(value) % cap as u64) as usize;
        let mut tombstone = None;
        for i in 0..cap {
            let idx = (home + i) % cap;
            match &self.slots[idx] {
                Slot::Empty => return Probe::Vacant(tombstone.unwrap_or(idx)),
                Slot::Occupied(stored) => {
                    if self.ops.eq(stored, value) {
                        return Probe::Found(idx);
                    }
                }
                Slot::Tombstone => {
                    if tombstone.is_none() {
                        tombstone = Some(idx);
                    }
                }
            }
        }
        match tombstone {
            Some(idx) => Probe::Vacant(idx),
            None => Probe::Full,
        }
    }

    /// Inserts `value`, taking ownership. Returns `Ok(true)` if it was
    /// newly added, `Ok(false)` if an equal element was already present
    /// (the set keeps its existing element and `value` is dropped), and
    /// `Err(Error::CapacityExceeded)` when no free or reusable slot
    /// exists.
    pub fn insert(&mut self, value: T) -> Result<bool, Error> {
        match self.probe(&value) {
            Probe::Found(_) => Ok(false),
            Probe::Vacant(idx) => {
                self.slots[idx] = Slot::Occupied(value);
                self.len += 1;
                Ok(true)
            }
            Probe::Full => Err(Error::CapacityExceeded {
                capacity: self.slots.len(),
            }),
        }
    }

    /// Removes the element equal to `value`, returning it. Removing an
    /// absent element is a no-op returning `None`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let idx = match self.probe(value) {
            Probe::Found(idx) => idx,
            _ => return None,
        };
        let Slot::Occupied(stored) = mem::replace(&mut self.slots[idx], Slot::Tombstone) else {
            return None;
        };
        self.len -= 1;
        Some(stored)
    }

    /// Removes the element equal to `value`. Returns whether it was
    /// present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Returns a reference to the stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let idx = match self.probe(value) {
            Probe::Found(idx) => idx,
            _ => return None,
        };
        match &self.slots[idx] {
            Slot::Occupied(stored) => Some(stored),
            _ => None,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Iterates over the live elements in slot order. Slot order is an
    /// artifact of hashing and probing, not insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Returns a freshly allocated snapshot of the live elements, in slot
    /// order. The caller owns the snapshot; mutating it does not affect
    /// the set.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T, O: SetOps<T>> IntoIterator for &'a FixedSet<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for FixedSet<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.slots.iter().filter_map(|s| match s {
            Slot::Occupied(v) => Some(v),
            _ => None,
        });
        f.debug_set().entries(live).finish()
    }
}

/// Borrowing iterator over a set's live elements.
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(v) = slot {
                self.remaining -= 1;
                return Some(v);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
