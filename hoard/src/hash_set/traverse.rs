//! Implements [`Traversable`] for [`HashSet`].
use crate::hash_set::HashSet;
use crate::iteration::{Filter, Iter};
use crate::sync::LockPolicy;
use hoard_core::{check_version, Direction, HoardError, Traversable};

/// Cursors are `(bucket, position)` pairs. Forward order is bucket by bucket, which is stable
/// as long as the version does not change.
impl<T: Clone, H, C, L: LockPolicy> Traversable for HashSet<T, H, C, L> {
    type Cursor = (usize, usize);

    fn seek(
        &self,
        snapshot: u64,
        from: Option<(usize, usize)>,
        direction: Direction,
        accept: &mut dyn FnMut(&T) -> bool,
    ) -> Result<Option<(usize, usize)>, HoardError> {
        let state = self.state.read();
        check_version(snapshot, state.version)?;
        let buckets = &state.buckets;

        let found = match direction {
            Direction::Forward => {
                let (first_bucket, first_pos) = from.map_or((0, 0), |(b, p)| (b, p + 1));
                buckets
                    .iter()
                    .enumerate()
                    .skip(first_bucket)
                    .flat_map(|(b, bucket)| {
                        let start = if b == first_bucket { first_pos } else { 0 };
                        (start..bucket.items.len()).map(move |p| (b, p))
                    })
                    .find(|&(b, p)| accept(&buckets[b].items[p]))
            }
            Direction::Reverse => {
                let (last_bucket, end_pos) = from.unwrap_or((buckets.len(), 0));
                buckets
                    .iter()
                    .enumerate()
                    .take(last_bucket + 1)
                    .rev()
                    .flat_map(|(b, bucket)| {
                        let end = if b == last_bucket { end_pos } else { bucket.items.len() };
                        (0..end).rev().map(move |p| (b, p))
                    })
                    .find(|&(b, p)| accept(&buckets[b].items[p]))
            }
        };
        Ok(found)
    }

    fn view_at<R>(
        &self,
        snapshot: u64,
        (bucket, pos): (usize, usize),
        f: impl FnOnce(&T) -> R,
    ) -> Result<R, HoardError> {
        let state = self.state.read();
        check_version(snapshot, state.version)?;
        Ok(f(&state.buckets[bucket].items[pos]))
    }

    /// `f` must keep the element's hash code and equality intact, the set is not rehashed.
    fn update_at<R>(
        &self,
        snapshot: u64,
        (bucket, pos): (usize, usize),
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, HoardError> {
        let mut state = self.state.write();
        check_version(snapshot, state.version)?;
        Ok(f(&mut state.buckets[bucket].items[pos]))
    }
}

impl<T: Clone, H, C, L: LockPolicy> HashSet<T, H, C, L> {
    /// Iterate over the elements, in no particular order.
    pub fn iter(&self) -> Iter<'_, Self> {
        self.iter_with(Direction::Forward, None)
    }

    /// Iterate over the elements accepted by `predicate`.
    ///
    /// `predicate` runs while the shared lock is held, so it must not call back into the set.
    pub fn iter_filtered<'a>(&'a self, predicate: impl Fn(&T) -> bool + 'a) -> Iter<'a, Self> {
        self.iter_with(Direction::Forward, Some(Box::new(predicate)))
    }

    /// Iterate in `direction`. Reverse order is the forward order backwards.
    pub fn iter_with<'a>(
        &'a self,
        direction: Direction,
        filter: Option<Filter<'a, T>>,
    ) -> Iter<'a, Self> {
        Iter::new(self, direction, filter)
    }
}
