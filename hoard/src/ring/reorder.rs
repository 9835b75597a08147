//! Implements arbitrary removal and sorting of [`RingBuffer`].
//!
//! Both operations rebuild the buffer from its logical sequence, so afterwards the front element
//! always sits in physical slot 0.
use crate::ring::RingBuffer;
use crate::sync::LockPolicy;
use hoard_core::Comparer;
use std::cmp::Ordering;

impl<T, C: Comparer<T>, L: LockPolicy> RingBuffer<T, C, L> {
    /// Remove the first element (front to back) equal to `value`.
    ///
    /// Returns `false` and leaves the buffer untouched if there is no such element. Otherwise
    /// the remaining elements keep their order and are laid out with `head == 0` and
    /// `tail == len`.
    pub fn remove(&self, value: &T) -> bool {
        let mut state = self.state.write();
        let Some(found) =
            (0..state.size).find(|&logical| self.comparer.equals(state.get(logical), value))
        else {
            return false;
        };

        state.bump_version();
        let mut values = state.drain();
        drop(values.remove(found));
        state.refill(values);
        true
    }

    /// Sort in place, smallest element first.
    pub fn sort(&self) {
        self.sort_with(Ordering::Less);
    }

    /// Sort in place, largest element first.
    pub fn sort_descending(&self) {
        self.sort_with(Ordering::Greater);
    }

    /// Sorts so that elements which are `first` relative to others come first.
    fn sort_with(&self, first: Ordering) {
        let mut state = self.state.write();
        state.bump_version();

        // The state stays empty while the comparer runs, so a panic can't double-drop slots.
        let mut values = state.drain();
        sort_values(&mut values, &self.comparer, first);
        state.refill(values);
    }
}

impl<T: Clone, C: Comparer<T> + Clone, L: LockPolicy> RingBuffer<T, C, L> {
    /// Get a deep copy sorted smallest element first. The buffer itself is untouched.
    pub fn sorted(&self) -> Self {
        self.sorted_with(Ordering::Less)
    }

    /// Get a deep copy sorted largest element first. The buffer itself is untouched.
    pub fn sorted_descending(&self) -> Self {
        self.sorted_with(Ordering::Greater)
    }

    fn sorted_with(&self, first: Ordering) -> Self {
        let copy = self.empty_like();
        let mut values: Vec<T> = {
            let state = self.state.read();
            (0..state.size)
                .map(|logical| self.copier.copy(state.get(logical)))
                .collect()
        };
        sort_values(&mut values, &self.comparer, first);
        copy.state.write().refill(values);
        copy
    }
}

fn sort_values<T, C: Comparer<T>>(values: &mut [T], comparer: &C, first: Ordering) {
    if first == Ordering::Less {
        values.sort_by(|a, b| comparer.compare(a, b));
    } else {
        values.sort_by(|a, b| comparer.compare(b, a));
    }
}

#[cfg(test)]
mod tests {
    use crate::ring::RingBuffer;
    use hoard_core::HoardError;
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    /// Builds a buffer of `capacity` whose front sits at physical slot `rotation`.
    fn rotated(capacity: usize, rotation: usize, values: &[u32]) -> RingBuffer<u32> {
        let buffer = RingBuffer::new(capacity).unwrap();
        for _ in 0..rotation {
            buffer.enqueue(u32::MAX);
        }
        for _ in 0..rotation {
            buffer.dequeue().unwrap();
        }
        for &value in values {
            buffer.enqueue(value);
        }
        assert_eq!(buffer.head(), rotation % capacity);
        buffer
    }

    #[test]
    fn test_remove_from_middle() {
        let buffer = RingBuffer::<u32>::new(4).unwrap();
        buffer.add_range([1, 2, 3, 4]);

        let version = buffer.version();
        let mut iter = buffer.iter();
        assert_eq!(iter.next().unwrap().unwrap().value(), Ok(1));

        assert!(buffer.remove(&2));
        assert_eq!(buffer.to_vec(), vec![1, 3, 4]);
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_full());
        assert_eq!(buffer.version(), version + 1);
        assert_eq!(
            iter.next().unwrap().err(),
            Some(HoardError::ConcurrentModification {
                expected: version,
                found: version + 1,
            })
        );
    }

    #[test]
    fn test_remove_absent_keeps_state() {
        let buffer = rotated(4, 3, &[1, 2, 3]);
        let (head, tail, version) = (buffer.head(), buffer.tail(), buffer.version());

        assert!(!buffer.remove(&9));
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
        assert_eq!((buffer.head(), buffer.tail(), buffer.version()), (head, tail, version));
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let buffer = rotated(5, 2, &[7, 1, 7, 1]);

        assert!(buffer.remove(&1));
        assert_eq!(buffer.to_vec(), vec![7, 7, 1]);
    }

    #[test]
    fn test_remove_matches_rebuild_across_rotations() {
        for capacity in 1..=7 {
            for fill in 0..=capacity {
                for rotation in 0..capacity {
                    let values: Vec<u32> = (10..10 + fill as u32).collect();

                    for target in values.iter().copied().chain([0]) {
                        let buffer = rotated(capacity, rotation, &values);
                        let mut expected = values.clone();
                        let found = match expected.iter().position(|&value| value == target) {
                            Some(idx) => {
                                expected.remove(idx);
                                true
                            }
                            None => false,
                        };

                        assert_eq!(buffer.remove(&target), found);
                        assert_eq!(buffer.to_vec(), expected);
                        assert_eq!(buffer.len(), expected.len());
                        assert!(buffer.len() < capacity || !found);
                        if found {
                            assert_eq!(buffer.head(), 0);
                            assert_eq!(buffer.tail(), expected.len());
                            assert!(!buffer.is_full());
                        }

                        // The rebuilt layout keeps working as a queue.
                        buffer.enqueue(99);
                        let mut tail = expected.clone();
                        tail.push(99);
                        if tail.len() > capacity {
                            tail.remove(0);
                        }
                        assert_eq!(buffer.to_vec(), tail);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_full_buffer() {
        let mut rng = ChaCha20Rng::seed_from_u64(16);
        let buffer = RingBuffer::<u32>::new(16).unwrap();
        for _ in 0..37 {
            buffer.enqueue(rng.random_range(0..1000));
        }
        let mut expected = buffer.to_vec();
        expected.sort();

        buffer.sort();
        assert_eq!(buffer.to_vec(), expected);
        assert_eq!(buffer.peek(), Ok(expected[0]));
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.head(), buffer.tail());
        assert!(buffer.is_full());
    }

    #[test]
    fn test_sort_descending_partial_buffer() {
        let buffer = rotated(6, 4, &[3, 9, 1, 4]);
        let version = buffer.version();

        buffer.sort_descending();
        assert_eq!(buffer.to_vec(), vec![9, 4, 3, 1]);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 4);
        assert_eq!(buffer.version(), version + 1);
    }

    #[test]
    fn test_sorted_copies_leave_original() {
        let buffer = rotated(4, 1, &[5, 2, 8, 1]);

        assert_eq!(buffer.sorted().to_vec(), vec![1, 2, 5, 8]);
        assert_eq!(buffer.sorted_descending().to_vec(), vec![8, 5, 2, 1]);
        assert_eq!(buffer.to_vec(), vec![5, 2, 8, 1]);
        assert_eq!(buffer.sorted().capacity(), 4);
    }
}
