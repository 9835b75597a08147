use crate::iteration::Element;
use hoard_core::{Direction, HoardError, Traversable};
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

/// Predicate deciding which elements an iterator yields.
///
/// Runs while the container's shared lock is held. Reading the same container from inside the
/// filter can deadlock a [`crate::sync::SharedLock`] container once a writer is queued, and
/// mutating it panics under [`crate::sync::LocalLock`].
pub type Filter<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Fail-fast iterator over any [`Traversable`] container.
///
/// Yields `Ok(Element)` for every accepted element. The first version mismatch is yielded as an
/// `Err` and ends the iteration.
pub struct Iter<'a, C: Traversable> {
    container: &'a C,
    snapshot: u64,
    direction: Direction,
    filter: Option<Filter<'a, C::Item>>,
    cursor: Option<C::Cursor>,
    finished: bool,
}

impl<'a, C: Traversable> Iter<'a, C> {
    pub(crate) fn new(
        container: &'a C,
        direction: Direction,
        filter: Option<Filter<'a, C::Item>>,
    ) -> Self {
        Self {
            container,
            snapshot: container.version(),
            direction,
            filter,
            cursor: None,
            finished: false,
        }
    }

    /// Get the version of the container this iterator was created at.
    pub fn snapshot(&self) -> u64 {
        self.snapshot
    }

    /// Get the traversal direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Start again from the first logical element.
    ///
    /// The version snapshot is kept, so a container modified since the iterator was created still
    /// makes the next advance fail.
    pub fn restart(&mut self) {
        self.cursor = None;
        self.finished = false;
    }

    /// Copy every remaining element, failing on the first version mismatch.
    pub fn values(self) -> Result<Vec<C::Item>, HoardError>
    where
        C::Item: Clone,
    {
        self.map(|element| element.and_then(|element| element.value()))
            .collect()
    }
}

impl<'a, C: Traversable> Iterator for Iter<'a, C> {
    type Item = Result<Element<'a, C>, HoardError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let filter = &self.filter;
        let mut accept = |item: &C::Item| filter.as_ref().is_none_or(|filter| filter(item));

        match self
            .container
            .seek(self.snapshot, self.cursor, self.direction, &mut accept)
        {
            Ok(Some(cursor)) => {
                self.cursor = Some(cursor);
                Some(Ok(Element::new(self.container, self.snapshot, cursor)))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<C: Traversable> FusedIterator for Iter<'_, C> {}

impl<C: Traversable> Debug for Iter<'_, C>
where
    C::Cursor: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("snapshot", &self.snapshot)
            .field("direction", &self.direction)
            .field("filtered", &self.filter.is_some())
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish()
    }
}
