//! Implements [`Container`] and [`Traversable`] for [`Stack`].
use crate::iteration::{Filter, Iter};
use crate::stack::Stack;
use crate::sync::LockPolicy;
use hoard_core::{check_version, Container, Direction, HoardError, Traversable};

impl<T: Clone, C, L: LockPolicy> Container for Stack<T, C, L> {
    type Item = T;

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&self) {
        Stack::clear(self)
    }

    fn version(&self) -> u64 {
        Stack::version(self)
    }

    fn to_vec(&self) -> Vec<T> {
        Stack::to_vec(self)
    }
}

/// Cursors are depths, counted from the top.
impl<T: Clone, C, L: LockPolicy> Traversable for Stack<T, C, L> {
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

        let size = state.items.len();
        let found = match direction {
            Direction::Forward => (from.map_or(0, |depth| depth + 1)..size)
                .find(|&depth| accept(state.get(depth))),
            Direction::Reverse => (0..from.unwrap_or(size))
                .rev()
                .find(|&depth| accept(state.get(depth))),
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

impl<T: Clone, C, L: LockPolicy> Stack<T, C, L> {
    /// Iterate top to bottom.
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self, Direction::Forward, None)
    }

    /// Iterate bottom to top.
    pub fn iter_rev(&self) -> Iter<'_, Self> {
        Iter::new(self, Direction::Reverse, None)
    }

    /// Iterate top to bottom over the elements accepted by `predicate`.
    ///
    /// `predicate` runs while the shared lock is held, so it must not call back into the stack.
    pub fn iter_filtered<'a>(&'a self, predicate: impl Fn(&T) -> bool + 'a) -> Iter<'a, Self> {
        let filter: Filter<'a, T> = Box::new(predicate);
        Iter::new(self, Direction::Forward, Some(filter))
    }
}

#[cfg(test)]
mod tests {
    use crate::stack::Stack;
    use hoard_core::HoardError;

    #[test]
    fn test_iteration_order() {
        let stack = Stack::<u32>::new();
        for value in 1..=4 {
            stack.push(value);
        }

        assert_eq!(stack.iter().values(), Ok(vec![4, 3, 2, 1]));
        assert_eq!(stack.iter_rev().values(), Ok(vec![1, 2, 3, 4]));
        assert_eq!(stack.iter_filtered(|v| *v > 2).values(), Ok(vec![4, 3]));
    }

    #[test]
    fn test_push_invalidates() {
        let stack = Stack::<u32>::new();
        stack.push(1);
        stack.push(2);
        let mut iter = stack.iter();
        let top = iter.next().unwrap().unwrap();

        assert_eq!(top.with_mut(|v| std::mem::replace(v, 20)), Ok(2));
        stack.push(3);

        assert_eq!(
            iter.next().unwrap().err(),
            Some(HoardError::ConcurrentModification { expected: 2, found: 3 })
        );
        assert!(top.value().is_err());
        assert_eq!(stack.to_vec(), vec![3, 20, 1]);
    }
}
