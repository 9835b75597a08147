//! Implements the FIFO operations of [`RingBuffer`].
use crate::ring::RingBuffer;
use crate::sync::LockPolicy;
use hoard_core::HoardError;

impl<T, C, L: LockPolicy> RingBuffer<T, C, L> {
    /// Get the maximal number of elements.
    pub fn capacity(&self) -> usize {
        self.state.read().capacity()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.state.read().size
    }

    /// Check if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.state.read().size == 0
    }

    /// Check if the next [`RingBuffer::enqueue`] will displace an element.
    pub fn is_full(&self) -> bool {
        self.state.read().full
    }

    /// Get the physical index of the front element.
    pub fn head(&self) -> usize {
        self.state.read().head
    }

    /// Get the physical index of the next free slot.
    pub fn tail(&self) -> usize {
        self.state.read().tail
    }

    /// Get the current modification version.
    pub fn version(&self) -> u64 {
        self.state.read().version
    }

    /// Append `value` at the back, displacing (and returning) the front element if the buffer is
    /// full.
    pub fn enqueue(&self, value: T) -> Option<T> {
        let mut state = self.state.write();
        state.bump_version();
        state.push_back(value)
    }

    /// Append `value` at the back unless the buffer is full.
    ///
    /// Returns `false` and leaves the buffer untouched when it is full.
    pub fn offer(&self, value: T) -> bool {
        let mut state = self.state.write();
        if state.full {
            return false;
        }
        state.bump_version();
        state.push_back(value);
        true
    }

    /// Remove and return the front element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the buffer is empty.
    pub fn dequeue(&self) -> Result<T, HoardError> {
        self.try_dequeue().ok_or(HoardError::Empty)
    }

    /// Remove and return the front element, `None` if the buffer is empty.
    pub fn try_dequeue(&self) -> Option<T> {
        let mut state = self.state.write();
        let value = state.pop_front()?;
        state.bump_version();
        Some(value)
    }

    /// Append every value in order, as a single modification.
    ///
    /// When `values` holds at least [`RingBuffer::capacity`] elements, the previous content is
    /// discarded and the buffer ends up full with the last `capacity` values, starting at
    /// physical slot 0.
    pub fn add_range<I: IntoIterator<Item = T>>(&self, values: I) {
        let mut values: Vec<T> = values.into_iter().collect();

        let mut state = self.state.write();
        state.bump_version();

        let capacity = state.capacity();
        if values.len() >= capacity {
            drop(state.drain());
            let excess = values.len() - capacity;
            values.drain(..excess);
            state.refill(values);
        } else {
            for value in values {
                state.push_back(value);
            }
        }
    }

    /// Remove every element.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.bump_version();
        drop(state.drain());
    }
}

impl<T: Clone, C, L: LockPolicy> RingBuffer<T, C, L> {
    /// Get a copy of the front element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the buffer is empty.
    pub fn peek(&self) -> Result<T, HoardError> {
        self.try_peek().ok_or(HoardError::Empty)
    }

    /// Get a copy of the front element, `None` if the buffer is empty.
    pub fn try_peek(&self) -> Option<T> {
        let state = self.state.read();
        (state.size > 0).then(|| state.get(0).clone())
    }

    /// Copy the elements front to back.
    pub fn to_vec(&self) -> Vec<T> {
        let state = self.state.read();
        (0..state.size)
            .map(|logical| state.get(logical).clone())
            .collect()
    }
}
