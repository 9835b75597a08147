//! Declares core types and constructors for [`Stack`].
use crate::compare::{Comparable, NaturalOrder};
use crate::copy::Copier;
use crate::parallel::Indexed;
use crate::sync::{LocalLock, LockPolicy, SharedLock};
use parking_lot::lock_api::RwLock;
use std::fmt::{Debug, Formatter};

/// Growable LIFO stack.
///
/// # Examples
///
/// ```rust
/// use hoard::stack::Stack;
///
/// let stack = Stack::<char>::new();
/// stack.push('a');
/// stack.push('b');
///
/// assert_eq!(stack.to_vec(), vec!['b', 'a']);
/// assert_eq!(stack.pop(), Ok('b'));
/// ```
pub struct Stack<T, C = NaturalOrder, L: LockPolicy = LocalLock> {
    pub(crate) state: RwLock<L, StackState<T>>,
    pub(crate) comparer: C,
    pub(crate) copier: Copier<T>,
    pub(crate) concurrent: bool,
}

/// A [`Stack`] that can be shared between threads.
pub type SyncStack<T, C = NaturalOrder> = Stack<T, C, SharedLock>;

impl<T, C: Debug, L: LockPolicy> Debug for Stack<T, C, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Stack")
            .field("size", &state.items.len())
            .field("version", &state.version)
            .field("comparer", &self.comparer)
            .field("copier", &self.copier)
            .field("concurrent", &self.concurrent)
            .finish()
    }
}

/// Storage of a [`Stack`], the top is the last item.
pub struct StackState<T> {
    pub(crate) items: Vec<T>,
    pub(crate) version: u64,
}

impl<T> StackState<T> {
    /// Get the element at logical position `logical`, counted from the top.
    ///
    /// # Panics
    ///
    /// - If `logical >= self.items.len()`.
    #[inline]
    pub(crate) fn get(&self, logical: usize) -> &T {
        &self.items[self.items.len() - 1 - logical]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, logical: usize) -> &mut T {
        let idx = self.items.len() - 1 - logical;
        &mut self.items[idx]
    }

    #[inline]
    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl<T: Sync> Indexed for StackState<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn at(&self, idx: usize) -> &T {
        self.get(idx)
    }
}

impl<T: Comparable, L: LockPolicy> Stack<T, NaturalOrder, L> {
    /// Create an empty stack ordered by the built-in order of `T`.
    pub fn new() -> Self {
        Self::with_comparer(0, NaturalOrder)
    }

    /// Create an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparer(capacity, NaturalOrder)
    }
}

impl<T: Comparable, L: LockPolicy> Default for Stack<T, NaturalOrder, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, L: LockPolicy> Stack<T, C, L> {
    /// Create an empty stack ordering (and matching) its elements with `comparer`.
    pub fn with_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            state: RwLock::new(StackState {
                items: Vec::with_capacity(capacity),
                version: 0,
            }),
            comparer,
            copier: Copier::default(),
            concurrent: false,
        }
    }

    /// Use `copier` whenever the stack's elements are duplicated.
    pub fn with_copier(mut self, copier: Copier<T>) -> Self {
        self.copier = copier;
        self
    }

    /// Allow reductions to run in parallel on large stacks.
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

/// Deep copy through the stack's [`Copier`]. The copy starts at version 0.
impl<T: Clone, C: Clone, L: LockPolicy> Clone for Stack<T, C, L> {
    fn clone(&self) -> Self {
        let items = {
            let state = self.state.read();
            state.items.iter().map(|item| self.copier.copy(item)).collect()
        };
        Self {
            state: RwLock::new(StackState { items, version: 0 }),
            comparer: self.comparer.clone(),
            copier: self.copier.clone(),
            concurrent: self.concurrent,
        }
    }
}
