//! Core trait and type declarations for the whole project.
use crate::error::HoardError;
use std::cmp::Ordering;

/// Total order over the elements of a container.
///
/// Containers never rely on [`Ord`] directly - every ordering and equality decision goes through
/// the comparer the container was constructed with. Two elements are considered equal when
/// [`Comparer::compare`] returns [`Ordering::Equal`].
pub trait Comparer<T: ?Sized> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Check whether `a` and `b` are equal under this comparer.
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Hasher for a specific data-type.
///
/// Differs from [`std::hash::Hasher`] in the way that it is specific for a certain type and maps
/// a value to a machine-word sized code in a single call instead of streaming bytes into a state.
///
/// Must be consistent with the comparer the value is stored with: values equal under the comparer
/// must produce equal codes.
pub trait Hasher<T: ?Sized> {
    /// Hash the given `value`.
    fn hash(&self, value: &T) -> u64;
}

/// Traversal direction of an iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// From the first logical element towards the last one.
    #[default]
    Forward,
    /// From the last logical element towards the first one.
    Reverse,
}

/// Capabilities shared by every container.
///
/// All methods take `&self` - containers synchronize internally according to their lock policy,
/// so mutation through a shared reference is the norm rather than the exception.
pub trait Container {
    /// Type of the stored elements.
    type Item;

    /// Get the number of elements.
    fn len(&self) -> usize;

    /// Check if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements.
    fn clear(&self);

    /// Get the current modification version.
    ///
    /// Starts at 0 and strictly increases with every structural mutation. Read-only operations
    /// never change it.
    fn version(&self) -> u64;

    /// Copy all elements into a vector, in the container's logical order.
    fn to_vec(&self) -> Vec<Self::Item>;
}

/// The protocol every container implements to support fail-fast iterators.
///
/// Each call receives the version `snapshot` taken when the iterator was created and must fail
/// with [`HoardError::ConcurrentModification`] when it no longer matches the live version.
pub trait Traversable: Container {
    /// Position of an element inside the container.
    ///
    /// Only meaningful for the version it was obtained at.
    type Cursor: Copy;

    /// Find the first element strictly after `from` in `direction` (or the first element in
    /// `direction` when `from` is `None`) that is accepted by `accept`.
    fn seek(
        &self,
        snapshot: u64,
        from: Option<Self::Cursor>,
        direction: Direction,
        accept: &mut dyn FnMut(&Self::Item) -> bool,
    ) -> Result<Option<Self::Cursor>, HoardError>;

    /// Run `f` on the element under `cursor` while holding a shared lock.
    fn view_at<R>(
        &self,
        snapshot: u64,
        cursor: Self::Cursor,
        f: impl FnOnce(&Self::Item) -> R,
    ) -> Result<R, HoardError>;

    /// Run `f` on the element under `cursor` while holding an exclusive lock.
    ///
    /// Slot mutation is not structural: the version is left untouched.
    fn update_at<R>(
        &self,
        snapshot: u64,
        cursor: Self::Cursor,
        f: impl FnOnce(&mut Self::Item) -> R,
    ) -> Result<R, HoardError>;
}

/// Read-only view of a set whose shared lock is already held by the caller.
///
/// Used by set algebra to probe into an operand without re-acquiring its lock.
pub trait SetView<T> {
    /// Get the number of elements.
    fn len(&self) -> usize;

    /// Check if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check membership without locking.
    fn contains(&self, value: &T) -> bool;

    /// Visit every element.
    fn for_each(&self, f: &mut dyn FnMut(&T));
}

/// An unordered collection of unique elements.
pub trait Set<T>: Container<Item = T> {
    /// Add `value`, returning `false` if an equal element is already present.
    fn add(&self, value: T) -> bool;

    /// Remove `value`, returning `false` if it was absent.
    fn remove(&self, value: &T) -> bool;

    /// Check membership.
    fn contains(&self, value: &T) -> bool;

    /// Hold the shared lock for the duration of `f` and hand it an unlocked view of the set.
    fn with_view<R>(&self, f: impl FnOnce(&dyn SetView<T>) -> R) -> R;
}
