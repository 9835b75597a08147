//! Implements set algebra for [`HashSet`].
//!
//! The other operand can be any [`Set`]. Both operands stay share-locked for the whole
//! computation; the other operand is only probed through its [`hoard_core::SetView`], so an
//! operation of a set with itself never locks it twice in a conflicting way.
//!
//! Results are new sets built with the hasher, comparer, copier and options of `self`. Every
//! element is copied through the copier of `self`.
use crate::hash_set::HashSet;
use crate::sync::LockPolicy;
use hoard_core::{Comparer, Hasher, Set};

impl<T, H, C, L> HashSet<T, H, C, L>
where
    T: Clone,
    H: Hasher<T> + Clone,
    C: Comparer<T> + Clone,
    L: LockPolicy,
{
    /// Elements of `self` absent from `other`.
    pub fn difference<S: Set<T>>(&self, other: &S) -> Self {
        let state = self.state.read_recursive();
        other.with_view(|other| {
            let mut result = self.empty_like(state.buckets.len(), state.bucket_capacity);
            let out = result.state.get_mut();
            for (hash, value) in state.values() {
                if !other.contains(value) {
                    out.insert_distinct(hash, self.copier.copy(value));
                }
            }
            result
        })
    }

    /// Elements present in both `self` and `other`.
    ///
    /// Scans the smaller operand and probes the larger one.
    pub fn intersection<S: Set<T>>(&self, other: &S) -> Self {
        let state = self.state.read_recursive();
        other.with_view(|other| {
            let capacity = state.size.min(other.len());
            let mut result = self.empty_like(capacity, state.bucket_capacity);
            if capacity == 0 {
                return result;
            }

            let out = result.state.get_mut();
            if state.size <= other.len() {
                for (hash, value) in state.values() {
                    if other.contains(value) {
                        out.insert_distinct(hash, self.copier.copy(value));
                    }
                }
            } else {
                other.for_each(&mut |value: &T| {
                    let hash = self.hasher.hash(value);
                    if state.contains(hash, value, &self.comparer)
                        && !out.contains(hash, value, &self.comparer)
                    {
                        out.insert_distinct(hash, self.copier.copy(value));
                    }
                });
            }
            result
        })
    }

    /// Elements present in `self`, `other` or both.
    pub fn union<S: Set<T>>(&self, other: &S) -> Self {
        let state = self.state.read_recursive();
        other.with_view(|other| {
            let mut result =
                self.empty_like(state.size + other.len(), state.bucket_capacity);
            let out = result.state.get_mut();
            for (hash, value) in state.values() {
                out.insert_distinct(hash, self.copier.copy(value));
            }
            other.for_each(&mut |value: &T| {
                let hash = self.hasher.hash(value);
                if !out.contains(hash, value, &self.comparer) {
                    out.insert_distinct(hash, self.copier.copy(value));
                }
            });
            result
        })
    }

    /// Check if every element of `self` is present in `other`.
    pub fn is_subset<S: Set<T>>(&self, other: &S) -> bool {
        let state = self.state.read_recursive();
        other.with_view(|other| state.values().all(|(_, value)| other.contains(value)))
    }
}
