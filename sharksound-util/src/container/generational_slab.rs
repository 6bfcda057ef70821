//! Implements a generational slab.

use std::iter::Enumerate;
use std::marker::PhantomData;
use std::mem::replace;
use std::num::NonZeroU32;
use std::slice::{Iter, IterMut};

/// Trait for keys of generation slabs.
pub trait GenerationalKey: Copy {
    #[doc(hidden)]
    /// Creates a new fixed key. Must not be called by the user.
    fn new(key: u32, generation: NonZeroU32) -> Self;
    #[doc(hidden)]
    /// Returns the key value.
    fn key(&self) -> u32;
    #[doc(hidden)]
    /// Returns the generation.
    fn generation(&self) -> NonZeroU32;
}

enum Slot<T> {
    Occupied {
        value: T,
        generation: NonZeroU32,
    },
    Empty {
        next_free: Option<u32>,
        last_generation: NonZeroU32,
    },
}

/// A slab with generational slots. Can have at most [`u32::MAX`] entries.
///
/// Removing a value bumps the generation of its slot, so keys that were
/// handed out for the removed value never resolve to a later occupant.
pub struct GenerationalSlab<I, V> {
    entries: Vec<Slot<V>>,
    next_free: Option<u32>,
    count: usize,
    _marker: PhantomData<I>,
}

impl<I: GenerationalKey, V> Default for GenerationalSlab<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: GenerationalKey, V> GenerationalSlab<I, V> {
    /// Creates a new generational slab.
    pub fn new() -> Self {
        Self {
            entries: Vec::default(),
            next_free: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a new generational slab with the given pre-allocated capacity.
    pub fn with_capacity(size: u32) -> Self {
        Self {
            entries: Vec::with_capacity(size as usize),
            next_free: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Inserts a new value into the slab. Returns the key of the value if
    /// there was still space left for the value inside the slab.
    #[must_use]
    pub fn insert(&mut self, value: V) -> Option<I> {
        if let Some(key) = self.next_free {
            let Some(Slot::Empty {
                next_free,
                last_generation,
            }) = self.entries.get(key as usize)
            else {
                return None;
            };

            let generation = last_generation.checked_add(1).unwrap_or(NonZeroU32::MIN);
            self.next_free = *next_free;
            self.entries[key as usize] = Slot::Occupied { value, generation };
            self.count += 1;

            return Some(I::new(key, generation));
        }

        let key = u32::try_from(self.entries.len()).ok().filter(|key| *key < u32::MAX)?;
        let generation = NonZeroU32::MIN;

        self.entries.push(Slot::Occupied { value, generation });
        self.count += 1;

        Some(I::new(key, generation))
    }

    /// Returns a reference to the value of the given key.
    #[must_use]
    pub fn get(&self, key: I) -> Option<&V> {
        match self.entries.get(key.key() as usize) {
            Some(Slot::Occupied { value, generation }) if key.generation() == *generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value of the given key.
    #[must_use]
    pub fn get_mut(&mut self, key: I) -> Option<&mut V> {
        match self.entries.get_mut(key.key() as usize) {
            Some(Slot::Occupied { value, generation }) if key.generation() == *generation => Some(value),
            _ => None,
        }
    }

    /// Returns true if the key points to an occupied slot of the same
    /// generation.
    #[must_use]
    pub fn contains_key(&self, key: I) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value with the given key if present.
    #[must_use]
    pub fn remove(&mut self, key: I) -> Option<V> {
        let entry = self.entries.get_mut(key.key() as usize)?;

        let generation = match entry {
            Slot::Occupied { generation, .. } if key.generation() == *generation => *generation,
            _ => return None,
        };

        let empty_slot = Slot::Empty {
            next_free: self.next_free,
            last_generation: generation,
        };

        self.next_free = Some(key.key());
        self.count -= 1;

        match replace(entry, empty_slot) {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty { .. } => None,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates over all non-empty entries.
    #[must_use]
    pub fn iter(&self) -> GenerationalIter<'_, I, V> {
        GenerationalIter {
            entries: self.entries.iter().enumerate(),
            remaining: self.count,
            _marker: PhantomData,
        }
    }

    /// Iterates mutably over all non-empty entries.
    #[must_use]
    pub fn iter_mut(&mut self) -> GenerationalIterMut<'_, I, V> {
        GenerationalIterMut {
            entries: self.entries.iter_mut().enumerate(),
            remaining: self.count,
            _marker: PhantomData,
        }
    }

    /// Clears the slab. Keys handed out before are not guaranteed to stay
    /// invalid after this call.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_free = None;
        self.count = 0;
    }
}

/// Iterator over all non-empty entry slots.
pub struct GenerationalIter<'a, I, T: 'a> {
    entries: Enumerate<Iter<'a, Slot<T>>>,
    remaining: usize,
    _marker: PhantomData<I>,
}

impl<'a, I: GenerationalKey, T> Iterator for GenerationalIter<'a, I, T> {
    type Item = (I, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.entries.by_ref() {
            if let Slot::Occupied { value, generation } = slot {
                self.remaining -= 1;
                return Some((I::new(index as u32, *generation), value));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Mutable iterator over all non-empty entry slots.
pub struct GenerationalIterMut<'a, I, T: 'a> {
    entries: Enumerate<IterMut<'a, Slot<T>>>,
    remaining: usize,
    _marker: PhantomData<I>,
}

impl<'a, I: GenerationalKey, T> Iterator for GenerationalIterMut<'a, I, T> {
    type Item = (I, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.entries.by_ref() {
            if let Slot::Occupied { value, generation } = slot {
                self.remaining -= 1;
                return Some((I::new(index as u32, *generation), value));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crate::container::{GenerationalKey, GenerationalSlab};

    create_generational_key!(TestKey);

    #[test]
    fn test_generational_key() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();
        let key_0 = slab.insert(0).unwrap();
        let key_1 = slab.insert(1).unwrap();

        assert_eq!(key_0.key(), 0);
        assert_eq!(key_0.generation().get(), 1);
        assert_eq!(key_1.key(), 1);
        assert_eq!(key_1.generation().get(), 1);

        assert!(slab.remove(key_0).is_some());
        let key_0 = slab.insert(42).unwrap();

        assert_eq!(key_0.key(), 0);
        assert_eq!(key_0.generation().get(), 2);
    }

    #[test]
    fn test_generational_reuses_freed_slots() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();
        let resident = slab.insert(7).unwrap();

        for index in 0..1000 {
            let key = slab.insert(index).unwrap();
            assert_eq!(key.key(), 1);
            assert!(slab.remove(key).is_some());
        }

        let key = slab.insert(0).unwrap();
        assert_eq!(key.key(), 1);
        assert_eq!(key.generation().get(), 1001);
        assert_eq!(*slab.get(resident).unwrap(), 7);
        assert_eq!(slab.len(), 2);
    }

    #[test]
    fn test_generational_get_mut() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();

        let key_0 = slab.insert(0).unwrap();
        *slab.get_mut(key_0).unwrap() = 13;

        assert_eq!(*slab.get(key_0).unwrap(), 13);
    }

    #[test]
    fn test_generational_old_key() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();
        let key_0 = slab.insert(2).unwrap();
        assert!(slab.remove(key_0).is_some());
        let key_1 = slab.insert(3).unwrap();

        assert!(slab.contains_key(key_1));
        assert!(!slab.contains_key(key_0));
        assert!(slab.get_mut(key_0).is_none());

        assert!(slab.remove(key_0).is_none());
        assert_eq!(*slab.get(key_1).unwrap(), 3);
    }

    #[test]
    fn test_generational_len() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::with_capacity(4);
        assert!(slab.is_empty());

        let key_0 = slab.insert(0).unwrap();
        let _key_1 = slab.insert(1).unwrap();
        assert_eq!(slab.len(), 2);

        assert!(slab.remove(key_0).is_some());
        assert!(slab.remove(key_0).is_none());
        assert_eq!(slab.len(), 1);
    }

    #[test]
    fn test_generational_iter_skips_empty() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();
        let keys: Vec<TestKey> = (0..10).map(|index| slab.insert(index).unwrap()).collect();

        for key in keys.iter().step_by(2) {
            assert!(slab.remove(*key).is_some());
        }

        let iterator = slab.iter();
        assert_eq!(iterator.size_hint(), (5, Some(5)));

        for (key, value) in iterator {
            assert!(keys.contains(&key));
            assert_eq!(*value % 2, 1);
        }
    }

    #[test]
    fn test_generational_iter_mut() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();
        let key_0 = slab.insert(1).unwrap();
        let key_1 = slab.insert(2).unwrap();

        slab.iter_mut().for_each(|(_, value)| *value *= 10);

        assert_eq!(*slab.get(key_0).unwrap(), 10);
        assert_eq!(*slab.get(key_1).unwrap(), 20);
    }

    #[test]
    fn test_generational_slab_clear() {
        let mut slab: GenerationalSlab<TestKey, u32> = GenerationalSlab::default();
        for index in 0..10 {
            let _ = slab.insert(index);
        }
        assert_eq!(slab.iter().count(), 10);
        slab.clear();
        assert_eq!(slab.iter().count(), 0);
        assert!(slab.is_empty());
        assert!(slab.insert(0).is_some());
    }
}
