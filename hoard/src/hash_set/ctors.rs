//! Implements constructors for [`HashSet`].
use crate::compare::{Comparable, NaturalOrder};
use crate::copy::Copier;
use crate::hash_set::{HashSet, SetState, DEFAULT_BUCKET_CAPACITY};
use crate::hashing::{Hashable, SeededHasher};
use crate::sync::LockPolicy;
use hoard_core::HoardError;
use parking_lot::lock_api::RwLock;

impl<T: Hashable + Comparable, L: LockPolicy> HashSet<T, SeededHasher, NaturalOrder, L> {
    /// Create an empty set using the built-in hash function and order of `T`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty set with room for `capacity` distinct hash codes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_hasher_and_comparer(capacity, SeededHasher::default(), NaturalOrder)
    }
}

impl<T: Hashable + Comparable, L: LockPolicy> Default for HashSet<T, SeededHasher, NaturalOrder, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hashable, C, L: LockPolicy> HashSet<T, SeededHasher, C, L> {
    /// Create an empty set matching elements with `comparer`.
    ///
    /// Values equal under `comparer` must also be equal under [`Hashable`], otherwise use
    /// [`HashSet::with_hasher_and_comparer`].
    pub fn with_comparer(capacity: usize, comparer: C) -> Self {
        Self::with_hasher_and_comparer(capacity, SeededHasher::default(), comparer)
    }
}

impl<T: Comparable, H, L: LockPolicy> HashSet<T, H, NaturalOrder, L> {
    /// Create an empty set hashing elements with `hasher`.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        Self::with_hasher_and_comparer(capacity, hasher, NaturalOrder)
    }
}

impl<T, H, C, L: LockPolicy> HashSet<T, H, C, L> {
    /// Create an empty set with a custom hash function and order.
    ///
    /// `hasher` must be consistent with `comparer`: equal elements must hash equally.
    pub fn with_hasher_and_comparer(capacity: usize, hasher: H, comparer: C) -> Self {
        Self {
            state: RwLock::new(SetState::with_capacity(capacity, DEFAULT_BUCKET_CAPACITY)),
            hasher,
            comparer,
            copier: Copier::default(),
            concurrent: false,
        }
    }

    /// Reserve room for `bucket_capacity` elements in every newly created bucket.
    ///
    /// # Errors
    ///
    /// - [`HoardError::InvalidBucketCapacity`] if `bucket_capacity` is 0.
    pub fn with_bucket_capacity(mut self, bucket_capacity: usize) -> Result<Self, HoardError> {
        if bucket_capacity == 0 {
            return Err(HoardError::InvalidBucketCapacity);
        }
        self.state.get_mut().bucket_capacity = bucket_capacity;
        Ok(self)
    }

    /// Use `copier` whenever the set's elements are duplicated.
    pub fn with_copier(mut self, copier: Copier<T>) -> Self {
        self.copier = copier;
        self
    }

    /// Allow `min` and `max` to run in parallel on large sets.
    pub fn with_concurrency(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Get the hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the comparer.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Get the initial capacity of newly created buckets.
    pub fn bucket_capacity(&self) -> usize {
        self.state.read().bucket_capacity
    }

    /// Check whether the concurrency opt-in is set.
    pub fn is_concurrent(&self) -> bool {
        self.concurrent
    }
}

impl<T, H: Clone, C: Clone, L: LockPolicy> HashSet<T, H, C, L> {
    /// Create an empty set with the same hasher, comparer and options.
    ///
    /// Takes the bucket capacity from the caller, who already holds the lock of `self`.
    pub(crate) fn empty_like(&self, capacity: usize, bucket_capacity: usize) -> Self {
        Self {
            state: RwLock::new(SetState::with_capacity(capacity, bucket_capacity)),
            hasher: self.hasher.clone(),
            comparer: self.comparer.clone(),
            copier: self.copier.clone(),
            concurrent: self.concurrent,
        }
    }
}

/// Deep copy through the set's [`Copier`]. The copy starts at version 0.
impl<T: Clone, H: Clone, C: Clone, L: LockPolicy> Clone for HashSet<T, H, C, L> {
    fn clone(&self) -> Self {
        let state = self.state.read();
        let mut copy = self.empty_like(state.buckets.len(), state.bucket_capacity);
        let copy_state = copy.state.get_mut();
        for (hash, value) in state.values() {
            copy_state.insert_distinct(hash, self.copier.copy(value));
        }
        drop(state);
        copy
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::CompareFn;
    use crate::copy::Copier;
    use crate::hash_set::{HashSet, SyncHashSet, DEFAULT_BUCKET_CAPACITY};
    use crate::hashing::{HashFn, SeededHasher};
    use hoard_core::{HoardError, Hasher};

    #[test]
    fn test_bucket_capacity() {
        let set = HashSet::<u8>::new();
        assert_eq!(set.bucket_capacity(), DEFAULT_BUCKET_CAPACITY);
        assert_eq!(
            set.with_bucket_capacity(0).err(),
            Some(HoardError::InvalidBucketCapacity)
        );

        let set = SyncHashSet::<u8>::with_capacity(16).with_bucket_capacity(5).unwrap();
        assert_eq!(set.bucket_capacity(), 5);
        assert!(set.is_empty());
    }

    #[test]
    fn test_case_insensitive_strings() {
        let seeded = SeededHasher::from_seed(7);
        let set = HashSet::<String, _, _>::with_hasher_and_comparer(
            8,
            HashFn(move |value: &String| seeded.hash(value.to_lowercase().as_str())),
            CompareFn(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase())),
        );

        assert!(set.add("Hoard".to_string()));
        assert!(!set.add("HOARD".to_string()));
        assert!(set.contains(&"hoard".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_custom_hasher_with_natural_order() {
        let set = HashSet::<u64, _>::with_hasher(0, HashFn(|_: &u64| 0_u64));
        set.add_range(0..10);

        assert_eq!(set.len(), 10);
        assert_eq!(set.collisions(), 9);
        assert!(set.remove(&3));
        assert!(!set.contains(&3));
        assert!(set.contains(&9));
    }

    #[test]
    fn test_clone_is_deep() {
        let set = HashSet::<Vec<u8>, _, _>::with_hasher_and_comparer(
            4,
            HashFn(|value: &Vec<u8>| value.len() as u64),
            CompareFn(|a: &Vec<u8>, b: &Vec<u8>| a.cmp(b)),
        )
        .with_copier(Copier::new(|value: &Vec<u8>| value.clone()));
        set.add(vec![1]);
        set.add(vec![2]);
        set.add(vec![1, 2]);
        set.clear();
        set.add(vec![3]);

        let copy = set.clone();
        assert_eq!(copy.to_vec(), vec![vec![3]]);
        assert_eq!(copy.version(), 0);
        assert!(copy.add(vec![4]));
        assert_eq!(set.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
