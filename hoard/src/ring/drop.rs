//! Implements [`Drop`] for [`RingState`].
use crate::ring::RingState;

/// Deinitializes only the occupied slots and skips the free ones.
impl<T> Drop for RingState<T> {
    fn drop(&mut self) {
        debug_assert!(self.size <= self.capacity(), "size exceeds capacity");

        let capacity = self.capacity();
        for logical in 0..self.size {
            let idx = (self.head + logical) % capacity;
            unsafe { self.slots[idx].assume_init_drop() };
        }
    }
}
