//! Implements [`Container`] and [`Traversable`] for [`RingBuffer`].
use crate::iteration::{Filter, Iter};
use crate::ring::RingBuffer;
use crate::sync::LockPolicy;
use hoard_core::{check_version, Container, Direction, HoardError, Traversable};

impl<T: Clone, C, L: LockPolicy> Container for RingBuffer<T, C, L> {
    type Item = T;

    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn clear(&self) {
        RingBuffer::clear(self)
    }

    fn version(&self) -> u64 {
        RingBuffer::version(self)
    }

    fn to_vec(&self) -> Vec<T> {
        RingBuffer::to_vec(self)
    }
}

/// Cursors are logical indices, counted from the front.
impl<T: Clone, C, L: LockPolicy> Traversable for RingBuffer<T, C, L> {
    type Cursor = usize;

    fn seek(
        &self,
        snapshot: u64,
        from: Option<usize>,
        direction: Direction,
        accept: &mut dyn FnMut(&T) -> bool,
    ) -> Result<Option<usize>, HoardError> {
        let state = self.state.read();
        check_version(snapshot, state.version)?;

        let found = match direction {
            Direction::Forward => {
                let start = from.map_or(0, |cursor| cursor + 1);
                (start..state.size).find(|&logical| accept(state.get(logical)))
            }
            Direction::Reverse => {
                let end = from.unwrap_or(state.size);
                (0..end).rev().find(|&logical| accept(state.get(logical)))
            }
        };
        Ok(found)
    }

    fn view_at<R>(
        &self,
        snapshot: u64,
        cursor: usize,
        f: impl FnOnce(&T) -> R,
    ) -> Result<R, HoardError> {
        let state = self.state.read();
        check_version(snapshot, state.version)?;
        Ok(f(state.get(cursor)))
    }

    fn update_at<R>(
        &self,
        snapshot: u64,
        cursor: usize,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, HoardError> {
        let mut state = self.state.write();
        check_version(snapshot, state.version)?;
        Ok(f(state.get_mut(cursor)))
    }
}

impl<T: Clone, C, L: LockPolicy> RingBuffer<T, C, L> {
    /// Iterate front to back.
    pub fn iter(&self) -> Iter<'_, Self> {
        self.iter_with(Direction::Forward, None)
    }

    /// Iterate back to front.
    pub fn iter_rev(&self) -> Iter<'_, Self> {
        self.iter_with(Direction::Reverse, None)
    }

    /// Iterate front to back over the elements accepted by `predicate`.
    ///
    /// `predicate` runs while the shared lock is held, so it must not call back into the buffer.
    pub fn iter_filtered<'a>(&'a self, predicate: impl Fn(&T) -> bool + 'a) -> Iter<'a, Self> {
        self.iter_with(Direction::Forward, Some(Box::new(predicate)))
    }

    /// Iterate in `direction` over the elements accepted by `filter`, if any.
    pub fn iter_with<'a>(
        &'a self,
        direction: Direction,
        filter: Option<Filter<'a, T>>,
    ) -> Iter<'a, Self> {
        Iter::new(self, direction, filter)
    }
}
