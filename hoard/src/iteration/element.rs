use hoard_core::{HoardError, Traversable};
use std::fmt::{Debug, Formatter};

/// A view of a single element produced by an [`crate::iteration::Iter`].
///
/// Holds the version snapshot of the iterator that produced it; both accessors fail once the
/// container has been structurally modified.
pub struct Element<'a, C: Traversable> {
    container: &'a C,
    snapshot: u64,
    cursor: C::Cursor,
}

impl<'a, C: Traversable> Element<'a, C> {
    pub(crate) fn new(container: &'a C, snapshot: u64, cursor: C::Cursor) -> Self {
        Self {
            container,
            snapshot,
            cursor,
        }
    }

    /// Get the position of the element inside the container.
    pub fn cursor(&self) -> C::Cursor {
        self.cursor
    }

    /// Get a copy of the element.
    pub fn value(&self) -> Result<C::Item, HoardError>
    where
        C::Item: Clone,
    {
        self.container
            .view_at(self.snapshot, self.cursor, Clone::clone)
    }

    /// Run `f` on a shared reference to the element.
    pub fn with<R>(&self, f: impl FnOnce(&C::Item) -> R) -> Result<R, HoardError> {
        self.container.view_at(self.snapshot, self.cursor, f)
    }

    /// Run `f` on a mutable reference to the element's slot.
    ///
    /// The container's exclusive lock is held while `f` runs, so `f` must not call back into the
    /// container.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C::Item) -> R) -> Result<R, HoardError> {
        self.container.update_at(self.snapshot, self.cursor, f)
    }
}

impl<C: Traversable> Debug for Element<'_, C>
where
    C::Cursor: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("snapshot", &self.snapshot)
            .field("cursor", &self.cursor)
            .finish()
    }
}
