//! Implements membership operations of [`HashSet`].
use crate::hash_set::HashSet;
use crate::sync::LockPolicy;
use hoard_core::{Comparer, Container, Hasher, Set, SetView};

impl<T, H, C, L: LockPolicy> HashSet<T, H, C, L> {
    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.state.read().size
    }

    /// Check if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.state.read().size == 0
    }

    /// Get the number of elements that were added to an already occupied bucket.
    ///
    /// Reset by [`HashSet::clear`], not decremented by removals.
    pub fn collisions(&self) -> usize {
        self.state.read().collisions
    }

    /// Get the current modification version.
    pub fn version(&self) -> u64 {
        self.state.read().version
    }

    /// Remove every element.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.bump_version();
        state.clear();
    }
}

impl<T, H: Hasher<T>, C: Comparer<T>, L: LockPolicy> HashSet<T, H, C, L> {
    /// Add `value` unless an equal element is already present.
    ///
    /// Returns `false` and leaves the set untouched on a duplicate.
    pub fn add(&self, value: T) -> bool {
        let hash = self.hasher.hash(&value);

        let mut state = self.state.write();
        if state.contains(hash, &value, &self.comparer) {
            return false;
        }
        state.bump_version();
        state.insert_distinct(hash, value);
        true
    }

    /// Add every value, skipping duplicates, as a single modification.
    ///
    /// Returns the number of added elements. The version is left untouched if nothing was added.
    pub fn add_range<I: IntoIterator<Item = T>>(&self, values: I) -> usize {
        let mut state = self.state.write();
        let mut added = 0;
        for value in values {
            let hash = self.hasher.hash(&value);
            if !state.contains(hash, &value, &self.comparer) {
                state.insert_distinct(hash, value);
                added += 1;
            }
        }
        if added > 0 {
            state.bump_version();
        }
        added
    }

    /// Remove the element equal to `value`, returning `false` if there is none.
    pub fn remove(&self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Remove and return the element equal to `value`.
    pub fn take(&self, value: &T) -> Option<T> {
        let hash = self.hasher.hash(value);

        let mut state = self.state.write();
        let removed = state.remove(hash, value, &self.comparer)?;
        state.bump_version();
        Some(removed)
    }

    /// Check if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        let hash = self.hasher.hash(value);
        self.state.read().contains(hash, value, &self.comparer)
    }
}

impl<T: Clone, H, C, L: LockPolicy> HashSet<T, H, C, L> {
    /// Copy the elements, in no particular order.
    pub fn to_vec(&self) -> Vec<T> {
        let state = self.state.read();
        state.values().map(|(_, value)| value.clone()).collect()
    }
}

impl<T: Clone, H, C, L: LockPolicy> Container for HashSet<T, H, C, L> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&self) {
        HashSet::clear(self)
    }

    fn version(&self) -> u64 {
        HashSet::version(self)
    }

    fn to_vec(&self) -> Vec<T> {
        HashSet::to_vec(self)
    }
}

impl<T: Clone, H: Hasher<T>, C: Comparer<T>, L: LockPolicy> Set<T> for HashSet<T, H, C, L> {
    fn add(&self, value: T) -> bool {
        HashSet::add(self, value)
    }

    fn remove(&self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn with_view<R>(&self, f: impl FnOnce(&dyn SetView<T>) -> R) -> R {
        let state = self.state.read_recursive();
        f(&self.view(&state))
    }
}
