//! Implements constructors for [`RingBuffer`].
use crate::compare::{Comparable, NaturalOrder};
use crate::copy::Copier;
use crate::ring::{RingBuffer, RingState};
use crate::sync::LockPolicy;
use hoard_core::HoardError;
use parking_lot::lock_api::RwLock;

impl<T: Comparable, L: LockPolicy> RingBuffer<T, NaturalOrder, L> {
    /// Create an empty buffer holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`HoardError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, HoardError> {
        Self::with_comparer(capacity, NaturalOrder)
    }
}

impl<T, C, L: LockPolicy> RingBuffer<T, C, L> {
    /// Create an empty buffer ordering (and matching) its elements with `comparer`.
    ///
    /// # Errors
    ///
    /// - [`HoardError::InvalidCapacity`] if `capacity` is 0.
    pub fn with_comparer(capacity: usize, comparer: C) -> Result<Self, HoardError> {
        if capacity == 0 {
            return Err(HoardError::InvalidCapacity { capacity });
        }

        Ok(Self {
            state: RwLock::new(RingState::with_capacity(capacity)),
            comparer,
            copier: Copier::default(),
            concurrent: false,
        })
    }

    /// Use `copier` whenever the buffer's elements are duplicated.
    pub fn with_copier(mut self, copier: Copier<T>) -> Self {
        self.copier = copier;
        self
    }

    /// Allow reductions (`min`, `max`, `index_of`, ...) to run in parallel on large buffers.
    pub fn with_concurrency(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Get the comparer.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Check whether the concurrency opt-in is set.
    pub fn is_concurrent(&self) -> bool {
        self.concurrent
    }
}

impl<T: Clone, C: Clone, L: LockPolicy> RingBuffer<T, C, L> {
    /// Create an empty buffer with the same capacity and options.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            state: RwLock::new(RingState::with_capacity(self.capacity())),
            comparer: self.comparer.clone(),
            copier: self.copier.clone(),
            concurrent: self.concurrent,
        }
    }
}

/// Deep copy through the buffer's [`Copier`]. The copy starts at version 0 with `head == 0`.
impl<T: Clone, C: Clone, L: LockPolicy> Clone for RingBuffer<T, C, L> {
    fn clone(&self) -> Self {
        let copy = self.empty_like();
        {
            let state = self.state.read();
            let values = (0..state.size)
                .map(|logical| self.copier.copy(state.get(logical)))
                .collect();
            copy.state.write().refill(values);
        }
        copy
    }
}
