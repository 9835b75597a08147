//! Declares core types for [`HashSet`].
use crate::compare::NaturalOrder;
use crate::copy::Copier;
use crate::hashing::SeededHasher;
use crate::sync::{LocalLock, LockPolicy, SharedLock};
use hoard_core::{Comparer, Hasher, SetView};
use parking_lot::lock_api::RwLock;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

/// Default initial capacity of a bucket.
pub const DEFAULT_BUCKET_CAPACITY: usize = 2;

/// Hash-chained set with set algebra.
///
/// # Guarantees
///
/// - Expected O(1) `add`, `remove` and `contains` for a hasher with few collisions.
/// - Every structural mutation bumps the modification version, invalidating outstanding
///   iterators.
/// - Results of set algebra are new sets sharing nothing with the operands.
///
/// # Examples
///
/// ```rust
/// use hoard::hash_set::HashSet;
///
/// let odd = HashSet::<u32>::new();
/// let small = HashSet::<u32>::new();
/// odd.add_range([1, 3, 5, 7]);
/// small.add_range([1, 2, 3]);
///
/// let mut both = odd.intersection(&small).to_vec();
/// both.sort();
/// assert_eq!(both, vec![1, 3]);
/// ```
pub struct HashSet<T, H = SeededHasher, C = NaturalOrder, L: LockPolicy = LocalLock> {
    pub(crate) state: RwLock<L, SetState<T>>,
    pub(crate) hasher: H,
    pub(crate) comparer: C,
    pub(crate) copier: Copier<T>,
    pub(crate) concurrent: bool,
}

/// A [`HashSet`] that can be shared between threads.
pub type SyncHashSet<T, H = SeededHasher, C = NaturalOrder> = HashSet<T, H, C, SharedLock>;

impl<T, H: Debug, C: Debug, L: LockPolicy> Debug for HashSet<T, H, C, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashSet")
            .field("size", &state.size)
            .field("buckets", &state.buckets.len())
            .field("collisions", &state.collisions)
            .field("bucket_capacity", &state.bucket_capacity)
            .field("version", &state.version)
            .field("hasher", &self.hasher)
            .field("comparer", &self.comparer)
            .field("copier", &self.copier)
            .field("concurrent", &self.concurrent)
            .finish()
    }
}

/// Elements sharing a single hash code.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<T> {
    pub(crate) hash: u64,
    pub(crate) items: Vec<T>,
}

/// Passes hash codes through unchanged, they are already mixed by the set's hasher.
#[derive(Default)]
pub(crate) struct CodeHasher(u64);

impl std::hash::Hasher for CodeHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, code: u64) {
        self.0 = code;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

/// Storage of a [`HashSet`], guarded by the set's lock.
///
/// Buckets are kept dense and never empty: `index` maps a hash code to the position of its bucket.
pub struct SetState<T> {
    pub(crate) buckets: Vec<Bucket<T>>,
    pub(crate) index: HashMap<u64, usize, BuildHasherDefault<CodeHasher>>,
    pub(crate) size: usize,
    /// Number of elements added to an already occupied bucket.
    pub(crate) collisions: usize,
    pub(crate) bucket_capacity: usize,
    pub(crate) version: u64,
}

impl<T> SetState<T> {
    pub(crate) fn with_capacity(capacity: usize, bucket_capacity: usize) -> Self {
        Self {
            buckets: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, Default::default()),
            size: 0,
            collisions: 0,
            bucket_capacity,
            version: 0,
        }
    }

    #[inline]
    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    #[inline]
    pub(crate) fn bucket(&self, hash: u64) -> Option<&Bucket<T>> {
        self.index.get(&hash).map(|&idx| &self.buckets[idx])
    }

    /// Check if an element equal to `value` is stored under `hash`.
    pub(crate) fn contains<C: Comparer<T>>(&self, hash: u64, value: &T, comparer: &C) -> bool {
        self.bucket(hash)
            .is_some_and(|bucket| bucket.items.iter().any(|item| comparer.equals(item, value)))
    }

    /// Append `value` to the bucket of `hash`.
    ///
    /// The caller guarantees that no equal element is present.
    pub(crate) fn insert_distinct(&mut self, hash: u64, value: T) {
        match self.index.get(&hash) {
            Some(&idx) => {
                self.buckets[idx].items.push(value);
                self.collisions += 1;
            }
            None => {
                let mut items = Vec::with_capacity(self.bucket_capacity);
                items.push(value);
                self.index.insert(hash, self.buckets.len());
                self.buckets.push(Bucket { hash, items });
            }
        }
        self.size += 1;
    }

    /// Take the element equal to `value` out of the bucket of `hash`.
    ///
    /// The last element of the bucket takes the place of the removed one, a bucket left empty is
    /// deleted.
    pub(crate) fn remove<C: Comparer<T>>(&mut self, hash: u64, value: &T, comparer: &C) -> Option<T> {
        let idx = *self.index.get(&hash)?;
        let bucket = &mut self.buckets[idx];
        let pos = bucket
            .items
            .iter()
            .position(|item| comparer.equals(item, value))?;

        let removed = bucket.items.swap_remove(pos);
        if bucket.items.is_empty() {
            self.index.remove(&hash);
            self.buckets.swap_remove(idx);
            if let Some(moved) = self.buckets.get(idx) {
                self.index.insert(moved.hash, idx);
            }
        }
        self.size -= 1;

        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
        self.index.clear();
        self.size = 0;
        self.collisions = 0;
    }

    /// Iterate over the elements together with their hash codes.
    pub(crate) fn values(&self) -> impl Iterator<Item = (u64, &T)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.items.iter().map(move |item| (bucket.hash, item)))
    }
}

/// A [`SetView`] over a [`SetState`] whose lock is held by the caller.
pub(crate) struct LockedSet<'a, T, H, C> {
    pub(crate) state: &'a SetState<T>,
    pub(crate) hasher: &'a H,
    pub(crate) comparer: &'a C,
}

impl<T, H: Hasher<T>, C: Comparer<T>> SetView<T> for LockedSet<'_, T, H, C> {
    fn len(&self) -> usize {
        self.state.size
    }

    fn contains(&self, value: &T) -> bool {
        self.state
            .contains(self.hasher.hash(value), value, self.comparer)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        for (_, value) in self.state.values() {
            f(value);
        }
    }
}

impl<T, H, C, L: LockPolicy> HashSet<T, H, C, L> {
    /// Wrap already locked `state` into a [`SetView`].
    pub(crate) fn view<'a>(&'a self, state: &'a SetState<T>) -> LockedSet<'a, T, H, C> {
        LockedSet {
            state,
            hasher: &self.hasher,
            comparer: &self.comparer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hash codes collide for values congruent modulo 4.
    fn state_of(values: &[u32]) -> SetState<u32> {
        let mut state = SetState::with_capacity(4, DEFAULT_BUCKET_CAPACITY);
        for &value in values {
            state.insert_distinct((value % 4) as u64, value);
        }
        state
    }

    #[test]
    fn test_insert_counts_collisions() {
        let state = state_of(&[0, 1, 4, 8, 5]);

        assert_eq!(state.size, 5);
        assert_eq!(state.buckets.len(), 2);
        assert_eq!(state.collisions, 3);
        assert_eq!(state.bucket(0).map(|b| b.items.clone()), Some(vec![0, 4, 8]));
        assert!(state.contains(1, &5, &NaturalOrder));
        assert!(!state.contains(1, &9, &NaturalOrder));
    }

    #[test]
    fn test_remove_swaps_within_bucket() {
        let mut state = state_of(&[0, 4, 8, 12]);

        assert_eq!(state.remove(0, &4, &NaturalOrder), Some(4));
        assert_eq!(state.bucket(0).map(|b| b.items.clone()), Some(vec![0, 12, 8]));
        assert_eq!(state.remove(0, &4, &NaturalOrder), None);
        assert_eq!(state.size, 3);
    }

    #[test]
    fn test_remove_last_element_drops_bucket() {
        let mut state = state_of(&[0, 1, 2, 3, 7]);

        // The last bucket moves into the hole left by bucket 0.
        assert_eq!(state.remove(0, &0, &NaturalOrder), Some(0));
        assert_eq!(state.buckets.len(), 3);
        assert!(state.bucket(0).is_none());
        for (hash, value) in [(1, 1), (2, 2), (3, 3), (3, 7)] {
            assert!(state.contains(hash, &value, &NaturalOrder), "{}", value);
        }
        assert_eq!(state.index.get(&3), Some(&0));
    }

    #[test]
    fn test_clear() {
        let mut state = state_of(&[1, 5, 9]);
        state.clear();

        assert_eq!(state.size, 0);
        assert_eq!(state.collisions, 0);
        assert_eq!(state.values().count(), 0);
    }
}
