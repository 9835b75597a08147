//! Implements linear scans and reductions over [`RingBuffer`].
use crate::parallel;
use crate::ring::RingBuffer;
use crate::sync::LockPolicy;
use hoard_core::{Comparer, HoardError};

impl<T: Sync, C: Comparer<T> + Sync, L: LockPolicy> RingBuffer<T, C, L> {
    /// Check if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Get the logical index (from the front) of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let state = self.state.read();
        parallel::index_of(&*state, &self.comparer, value, self.concurrent)
    }

    /// Get the logical index (from the front) of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let state = self.state.read();
        parallel::last_index_of(&*state, &self.comparer, value, self.concurrent)
    }
}

impl<T: Clone + Sync, C: Comparer<T> + Sync, L: LockPolicy> RingBuffer<T, C, L> {
    /// Get a copy of the smallest element (the one closest to the front among equals).
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the buffer is empty.
    pub fn min(&self) -> Result<T, HoardError> {
        self.try_min().ok_or(HoardError::Empty)
    }

    /// Get a copy of the smallest element, `None` if the buffer is empty.
    pub fn try_min(&self) -> Option<T> {
        let state = self.state.read();
        parallel::min(&*state, &self.comparer, self.concurrent).map(|idx| state.get(idx).clone())
    }

    /// Get a copy of the largest element (the one closest to the front among equals).
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the buffer is empty.
    pub fn max(&self) -> Result<T, HoardError> {
        self.try_max().ok_or(HoardError::Empty)
    }

    /// Get a copy of the largest element, `None` if the buffer is empty.
    pub fn try_max(&self) -> Option<T> {
        let state = self.state.read();
        parallel::max(&*state, &self.comparer, self.concurrent).map(|idx| state.get(idx).clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::parallel::PARALLEL_THRESHOLD;
    use crate::ring::{RingBuffer, SyncRingBuffer};
    use hoard_core::HoardError;
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_lookups_follow_logical_order() {
        let buffer = RingBuffer::<i32>::new(5).unwrap();
        // The front sits at physical slot 1, the back wraps around to slot 0.
        buffer.add_range([1, 2, 3, 4, 5, 6, 7]);
        buffer.enqueue(3);

        assert_eq!(buffer.to_vec(), vec![4, 5, 6, 7, 3]);
        assert_eq!(buffer.index_of(&3), Some(4));
        assert_eq!(buffer.index_of(&4), Some(0));
        assert_eq!(buffer.last_index_of(&7), Some(3));
        assert!(buffer.contains(&6));
        assert!(!buffer.contains(&1));
    }

    #[test]
    fn test_min_max() {
        let buffer = RingBuffer::<f64>::new(5).unwrap();
        assert_eq!(buffer.min(), Err(HoardError::Empty));
        assert_eq!(buffer.try_max(), None);

        buffer.add_range([2.5, -1.0, 7.25, 0.0, 3.0]);
        assert_eq!(buffer.min(), Ok(-1.0));
        assert_eq!(buffer.max(), Ok(7.25));

        // Displacing the minimum moves it to the next smallest element.
        buffer.enqueue(1.0);
        buffer.enqueue(0.5);
        assert_eq!(buffer.to_vec(), vec![7.25, 0.0, 3.0, 1.0, 0.5]);
        assert_eq!(buffer.min(), Ok(0.0));
    }

    #[test]
    fn test_concurrent_reductions_match_serial() {
        let mut rng = ChaCha20Rng::seed_from_u64(64);
        let capacity = PARALLEL_THRESHOLD + 1000;
        let serial = RingBuffer::<u32>::new(capacity).unwrap();
        let concurrent = SyncRingBuffer::<u32>::new(capacity).unwrap().with_concurrency(true);

        // Overfill so that the logical sequence wraps around the physical end.
        for _ in 0..capacity + capacity / 3 {
            let value = rng.random_range(0..50_000);
            serial.enqueue(value);
            concurrent.enqueue(value);
        }

        assert_eq!(serial.min(), concurrent.min());
        assert_eq!(serial.max(), concurrent.max());
        for probe in [0, 17, 49_999, 123_456] {
            assert_eq!(serial.index_of(&probe), concurrent.index_of(&probe));
            assert_eq!(serial.last_index_of(&probe), concurrent.last_index_of(&probe));
        }
    }
}
