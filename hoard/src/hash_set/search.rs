//! Implements reductions over [`HashSet`].
use crate::compare::ByRef;
use crate::hash_set::HashSet;
use crate::parallel;
use crate::sync::LockPolicy;
use hoard_core::{Comparer, HoardError};

impl<T: Clone + Sync, H, C: Comparer<T> + Sync, L: LockPolicy> HashSet<T, H, C, L> {
    /// Get a copy of the smallest element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the set is empty.
    pub fn min(&self) -> Result<T, HoardError> {
        self.try_min().ok_or(HoardError::Empty)
    }

    /// Get a copy of the smallest element, `None` if the set is empty.
    pub fn try_min(&self) -> Option<T> {
        let state = self.state.read();
        let values: Vec<&T> = state.values().map(|(_, value)| value).collect();
        parallel::min(&values[..], &ByRef(&self.comparer), self.concurrent)
            .map(|idx| T::clone(values[idx]))
    }

    /// Get a copy of the largest element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the set is empty.
    pub fn max(&self) -> Result<T, HoardError> {
        self.try_max().ok_or(HoardError::Empty)
    }

    /// Get a copy of the largest element, `None` if the set is empty.
    pub fn try_max(&self) -> Option<T> {
        let state = self.state.read();
        let values: Vec<&T> = state.values().map(|(_, value)| value).collect();
        parallel::max(&values[..], &ByRef(&self.comparer), self.concurrent)
            .map(|idx| T::clone(values[idx]))
    }
}
