//! Implements the LIFO operations and reductions of [`Stack`].
use crate::parallel;
use crate::stack::Stack;
use crate::sync::LockPolicy;
use hoard_core::{Comparer, HoardError};

impl<T, C, L: LockPolicy> Stack<T, C, L> {
    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    /// Check if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    /// Get the current modification version.
    pub fn version(&self) -> u64 {
        self.state.read().version
    }

    /// Put `value` on top.
    pub fn push(&self, value: T) {
        let mut state = self.state.write();
        state.bump_version();
        state.items.push(value);
    }

    /// Remove and return the top element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the stack is empty.
    pub fn pop(&self) -> Result<T, HoardError> {
        self.try_pop().ok_or(HoardError::Empty)
    }

    /// Remove and return the top element, `None` if the stack is empty.
    pub fn try_pop(&self) -> Option<T> {
        let mut state = self.state.write();
        let value = state.items.pop()?;
        state.bump_version();
        Some(value)
    }

    /// Remove every element.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.bump_version();
        state.items.clear();
    }
}

impl<T: Clone, C, L: LockPolicy> Stack<T, C, L> {
    /// Get a copy of the top element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<T, HoardError> {
        self.try_peek().ok_or(HoardError::Empty)
    }

    /// Get a copy of the top element, `None` if the stack is empty.
    pub fn try_peek(&self) -> Option<T> {
        self.state.read().items.last().cloned()
    }

    /// Copy the elements top to bottom.
    pub fn to_vec(&self) -> Vec<T> {
        self.state.read().items.iter().rev().cloned().collect()
    }
}

impl<T: Sync, C: Comparer<T> + Sync, L: LockPolicy> Stack<T, C, L> {
    /// Check if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Get the depth (0 is the top) of the topmost element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let state = self.state.read();
        parallel::index_of(&*state, &self.comparer, value, self.concurrent)
    }

    /// Get the depth of the bottommost element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let state = self.state.read();
        parallel::last_index_of(&*state, &self.comparer, value, self.concurrent)
    }
}

impl<T: Clone + Sync, C: Comparer<T> + Sync, L: LockPolicy> Stack<T, C, L> {
    /// Get a copy of the smallest element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the stack is empty.
    pub fn min(&self) -> Result<T, HoardError> {
        self.try_min().ok_or(HoardError::Empty)
    }

    /// Get a copy of the smallest element, `None` if the stack is empty.
    pub fn try_min(&self) -> Option<T> {
        let state = self.state.read();
        parallel::min(&*state, &self.comparer, self.concurrent).map(|idx| state.get(idx).clone())
    }

    /// Get a copy of the largest element.
    ///
    /// # Errors
    ///
    /// - [`HoardError::Empty`] if the stack is empty.
    pub fn max(&self) -> Result<T, HoardError> {
        self.try_max().ok_or(HoardError::Empty)
    }

    /// Get a copy of the largest element, `None` if the stack is empty.
    pub fn try_max(&self) -> Option<T> {
        let state = self.state.read();
        parallel::max(&*state, &self.comparer, self.concurrent).map(|idx| state.get(idx).clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::CompareFn;
    use crate::copy::Copier;
    use crate::parallel::PARALLEL_THRESHOLD;
    use crate::stack::{Stack, SyncStack};
    use hoard_core::HoardError;

    #[test]
    fn test_lifo_order() {
        let stack = Stack::<u8>::new();
        for value in [1, 2, 3] {
            stack.push(value);
        }

        assert_eq!(stack.peek(), Ok(3));
        assert_eq!(stack.to_vec(), vec![3, 2, 1]);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.version(), 5);
    }

    #[test]
    fn test_empty_access() {
        let stack = Stack::<u8>::with_capacity(4);

        assert_eq!(stack.pop(), Err(HoardError::Empty));
        assert_eq!(stack.peek(), Err(HoardError::Empty));
        assert_eq!(stack.min(), Err(HoardError::Empty));
        assert_eq!(stack.try_pop(), None);
        assert_eq!(stack.version(), 0);
    }

    #[test]
    fn test_search_counts_from_top() {
        let stack = Stack::<i32>::new();
        for value in [5, 1, 5, 9, 1] {
            stack.push(value);
        }

        assert_eq!(stack.index_of(&1), Some(0));
        assert_eq!(stack.last_index_of(&1), Some(3));
        assert_eq!(stack.index_of(&5), Some(2));
        assert!(!stack.contains(&7));
        assert_eq!(stack.min(), Ok(1));
        assert_eq!(stack.max(), Ok(9));
    }

    #[test]
    fn test_clear_and_clone() {
        let stack = Stack::<String, _>::with_comparer(
            2,
            CompareFn(|a: &String, b: &String| a.len().cmp(&b.len())),
        )
        .with_copier(Copier::new(|value: &String| value.to_uppercase()));
        stack.push("ab".to_string());
        stack.push("c".to_string());

        let copy = stack.clone();
        assert_eq!(copy.to_vec(), vec!["C".to_string(), "AB".to_string()]);
        assert_eq!(copy.version(), 0);
        assert_eq!(copy.min(), Ok("C".to_string()));
        assert!(copy.contains(&"zz".to_string()));

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_concurrent_reductions() {
        let serial = Stack::<u64>::new();
        let concurrent = SyncStack::<u64>::new().with_concurrency(true);
        for value in 0..(PARALLEL_THRESHOLD as u64 + 10) {
            serial.push(value % 1000);
            concurrent.push(value % 1000);
        }

        assert_eq!(serial.min(), concurrent.min());
        assert_eq!(serial.max(), concurrent.max());
        assert_eq!(serial.index_of(&999), concurrent.index_of(&999));
        assert_eq!(serial.last_index_of(&0), concurrent.last_index_of(&0));
        assert_eq!(concurrent.last_index_of(&0), Some(PARALLEL_THRESHOLD + 9));
    }
}
