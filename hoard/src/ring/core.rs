//! Declares core types for [`RingBuffer`].
use crate::compare::NaturalOrder;
use crate::copy::Copier;
use crate::parallel::Indexed;
use crate::sync::{LocalLock, LockPolicy, SharedLock};
use parking_lot::lock_api::RwLock;
use std::fmt::{Debug, Formatter};
use std::mem::MaybeUninit;

/// Fixed-capacity FIFO buffer with displacement of the oldest element on overflow.
///
/// # Guarantees
///
/// - O(1) enqueue, dequeue and peek.
/// - Never holds more than [`RingBuffer::capacity`] elements.
/// - Every structural mutation bumps the modification version, invalidating outstanding
///   iterators.
///
/// # Examples
///
/// ```rust
/// use hoard::ring::RingBuffer;
///
/// let buffer = RingBuffer::<u32>::new(4).unwrap();
/// for value in 1..=5 {
///     buffer.enqueue(value);
/// }
///
/// assert_eq!(buffer.to_vec(), vec![2, 3, 4, 5]);
/// assert_eq!(buffer.peek(), Ok(2));
/// ```
pub struct RingBuffer<T, C = NaturalOrder, L: LockPolicy = LocalLock> {
    pub(crate) state: RwLock<L, RingState<T>>,
    pub(crate) comparer: C,
    pub(crate) copier: Copier<T>,
    pub(crate) concurrent: bool,
}

/// A [`RingBuffer`] that can be shared between threads.
pub type SyncRingBuffer<T, C = NaturalOrder> = RingBuffer<T, C, SharedLock>;

impl<T, C: Debug, L: LockPolicy> Debug for RingBuffer<T, C, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("RingBuffer")
            .field("capacity", &state.capacity())
            .field("size", &state.size)
            .field("head", &state.head)
            .field("tail", &state.tail)
            .field("full", &state.full)
            .field("version", &state.version)
            .field("comparer", &self.comparer)
            .field("copier", &self.copier)
            .field("concurrent", &self.concurrent)
            .finish()
    }
}

/// Storage of a [`RingBuffer`], guarded by the buffer's lock.
///
/// Exactly the `size` slots starting at `head` (wrapping around) are initialized.
pub struct RingState<T> {
    pub(crate) slots: Box<[MaybeUninit<T>]>,
    /// Physical index of the logical front.
    pub(crate) head: usize,
    /// Physical index of the next free slot.
    pub(crate) tail: usize,
    pub(crate) size: usize,
    /// Tells a full buffer from an empty one when `head == tail`.
    pub(crate) full: bool,
    pub(crate) version: u64,
}

impl<T> RingState<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, r#""capacity" must be greater than 0"#);

        Self {
            slots: (0..capacity).map(|_| MaybeUninit::uninit()).collect(),
            head: 0,
            tail: 0,
            size: 0,
            full: false,
            version: 0,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    /// Get the element at logical position `logical`.
    ///
    /// # Panics
    ///
    /// - If `logical >= self.size`.
    #[inline]
    pub(crate) fn get(&self, logical: usize) -> &T {
        assert!(logical < self.size, "logical index {} out of bounds", logical);
        let idx = self.physical(logical);
        unsafe { self.slots[idx].assume_init_ref() }
    }

    /// Mutable counterpart of [`RingState::get`].
    #[inline]
    pub(crate) fn get_mut(&mut self, logical: usize) -> &mut T {
        assert!(logical < self.size, "logical index {} out of bounds", logical);
        let idx = self.physical(logical);
        unsafe { self.slots[idx].assume_init_mut() }
    }

    #[inline]
    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Append at `tail`, displacing the front element when full.
    pub(crate) fn push_back(&mut self, value: T) -> Option<T> {
        let displaced = if self.full { self.pop_front() } else { None };

        self.slots[self.tail].write(value);
        self.tail = (self.tail + 1) % self.capacity();
        self.size += 1;
        self.full = self.size == self.capacity();

        displaced
    }

    /// Remove the element at `head`.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        // The slot is marked uninitialized by advancing `head` right after the read.
        let value = unsafe { self.slots[self.head].assume_init_read() };
        self.head = (self.head + 1) % self.capacity();
        self.size -= 1;
        self.full = false;

        Some(value)
    }

    /// Move the logical contents out, front to back, leaving the state empty.
    pub(crate) fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.size);
        while let Some(value) = self.pop_front() {
            values.push(value);
        }
        self.head = 0;
        self.tail = 0;
        values
    }

    /// Fill an empty state with `values` starting at physical slot 0.
    ///
    /// Leaves `head == 0` and `tail == size % capacity`.
    pub(crate) fn refill(&mut self, values: Vec<T>) {
        debug_assert_eq!(self.size, 0, "state must be empty");
        debug_assert!(values.len() <= self.capacity(), "too many values");

        self.head = 0;
        self.tail = 0;
        for value in values {
            self.slots[self.tail].write(value);
            self.tail += 1;
            self.size += 1;
        }
        self.tail %= self.capacity();
        self.full = self.size == self.capacity();
    }
}

impl<T: Sync> Indexed for RingState<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.size
    }

    #[inline]
    fn at(&self, idx: usize) -> &T {
        self.get(idx)
    }
}
