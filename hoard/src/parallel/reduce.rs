use hoard_core::Comparer;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::ops::Range;

/// Minimal input length for which the gated reductions go parallel.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// A fixed sequence with random access, scanned by the reductions.
pub trait Indexed: Sync {
    type Item;

    /// Get the number of elements.
    fn len(&self) -> usize;

    /// Check if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at `idx`.
    ///
    /// # Panics
    ///
    /// - If `idx >= self.len()`.
    fn at(&self, idx: usize) -> &Self::Item;
}

impl<T: Sync> Indexed for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, idx: usize) -> &T {
        &self[idx]
    }
}

#[inline]
fn is_parallel(len: usize, concurrent: bool) -> bool {
    concurrent && len >= PARALLEL_THRESHOLD
}

#[inline]
fn default_partitions(len: usize) -> usize {
    rayon::current_num_threads().clamp(1, len.max(1))
}

/// Splits `0..len` into at most `num_partitions` contiguous ranges of roughly equal size.
fn partitions(len: usize, num_partitions: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let size = len.div_ceil(num_partitions.max(1));
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

/// Scans each partition on the rayon pool. Results are returned in partition order.
fn scan_partitioned<S, R, F>(seq: &S, num_partitions: usize, scan: F) -> Vec<R>
where
    S: Indexed + ?Sized,
    R: Send,
    F: Fn(Range<usize>) -> R + Sync + Send,
{
    partitions(seq.len(), num_partitions)
        .into_par_iter()
        .map(scan)
        .collect()
}

/// Index of the first element in `range` that is `wanted` relative to every earlier candidate.
///
/// Strict comparison keeps the earliest index among equal extremes.
fn extreme_in<S, C>(seq: &S, comparer: &C, range: Range<usize>, wanted: Ordering) -> Option<usize>
where
    S: Indexed + ?Sized,
    C: Comparer<S::Item>,
{
    let mut best: Option<usize> = None;
    for idx in range {
        match best {
            Some(best_idx) if comparer.compare(seq.at(idx), seq.at(best_idx)) != wanted => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Merges per-partition extremes, in partition order.
fn merge_extremes<S, C>(seq: &S, comparer: &C, partials: Vec<Option<usize>>, wanted: Ordering) -> Option<usize>
where
    S: Indexed + ?Sized,
    C: Comparer<S::Item>,
{
    partials
        .into_iter()
        .flatten()
        .fold(None, |best, idx| match best {
            Some(best_idx) if comparer.compare(seq.at(idx), seq.at(best_idx)) != wanted => best,
            _ => Some(idx),
        })
}

fn extreme_partitioned<S, C>(seq: &S, comparer: &C, num_partitions: usize, wanted: Ordering) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    let partials = scan_partitioned(seq, num_partitions, |range| {
        extreme_in(seq, comparer, range, wanted)
    });
    merge_extremes(seq, comparer, partials, wanted)
}

/// Index of the first minimal element, or `None` for an empty sequence.
pub fn min<S, C>(seq: &S, comparer: &C, concurrent: bool) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    if is_parallel(seq.len(), concurrent) {
        min_partitioned(seq, comparer, default_partitions(seq.len()))
    } else {
        extreme_in(seq, comparer, 0..seq.len(), Ordering::Less)
    }
}

/// Index of the first maximal element, or `None` for an empty sequence.
pub fn max<S, C>(seq: &S, comparer: &C, concurrent: bool) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    if is_parallel(seq.len(), concurrent) {
        max_partitioned(seq, comparer, default_partitions(seq.len()))
    } else {
        extreme_in(seq, comparer, 0..seq.len(), Ordering::Greater)
    }
}

/// Index of the first element equal to `value`.
pub fn index_of<S, C>(seq: &S, comparer: &C, value: &S::Item, concurrent: bool) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    if is_parallel(seq.len(), concurrent) {
        index_of_partitioned(seq, comparer, value, default_partitions(seq.len()))
    } else {
        (0..seq.len()).find(|&idx| comparer.equals(seq.at(idx), value))
    }
}

/// Index of the last element equal to `value`.
pub fn last_index_of<S, C>(seq: &S, comparer: &C, value: &S::Item, concurrent: bool) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    if is_parallel(seq.len(), concurrent) {
        last_index_of_partitioned(seq, comparer, value, default_partitions(seq.len()))
    } else {
        (0..seq.len()).rev().find(|&idx| comparer.equals(seq.at(idx), value))
    }
}

/// Parallel [`min`] over `num_partitions` partitions, regardless of the input size.
pub fn min_partitioned<S, C>(seq: &S, comparer: &C, num_partitions: usize) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    extreme_partitioned(seq, comparer, num_partitions, Ordering::Less)
}

/// Parallel [`max`] over `num_partitions` partitions, regardless of the input size.
pub fn max_partitioned<S, C>(seq: &S, comparer: &C, num_partitions: usize) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    extreme_partitioned(seq, comparer, num_partitions, Ordering::Greater)
}

/// Parallel [`index_of`] over `num_partitions` partitions, regardless of the input size.
///
/// Every partition is scanned to the end, there is no early cancellation.
pub fn index_of_partitioned<S, C>(
    seq: &S,
    comparer: &C,
    value: &S::Item,
    num_partitions: usize,
) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    scan_partitioned(seq, num_partitions, |mut range| {
        range.find(|&idx| comparer.equals(seq.at(idx), value))
    })
    .into_iter()
    .flatten()
    .next()
}

/// Parallel [`last_index_of`] over `num_partitions` partitions, regardless of the input size.
pub fn last_index_of_partitioned<S, C>(
    seq: &S,
    comparer: &C,
    value: &S::Item,
    num_partitions: usize,
) -> Option<usize>
where
    S: Indexed + ?Sized,
    S::Item: Sync,
    C: Comparer<S::Item> + Sync,
{
    scan_partitioned(seq, num_partitions, |mut range| {
        range.rfind(|&idx| comparer.equals(seq.at(idx), value))
    })
    .into_iter()
    .flatten()
    .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{CompareFn, NaturalOrder};
    use hoard_testing::generate_reduction_tests;
    use rand::prelude::*;

    #[test]
    fn test_partitions_cover_range() {
        assert!(partitions(0, 4).is_empty());
        assert_eq!(partitions(10, 3), vec![0..4, 4..8, 8..10]);
        assert_eq!(partitions(2, 8), vec![0..1, 1..2]);
        assert_eq!(partitions(5, 0), vec![0..5]);
    }

    #[test]
    fn test_serial_reductions() {
        let data = [3, 1, 4, 1, 5, 9, 2, 6, 5];

        assert_eq!(min(&data[..], &NaturalOrder, false), Some(1));
        assert_eq!(max(&data[..], &NaturalOrder, false), Some(5));
        assert_eq!(index_of(&data[..], &NaturalOrder, &5, false), Some(4));
        assert_eq!(last_index_of(&data[..], &NaturalOrder, &5, false), Some(8));
        assert_eq!(index_of(&data[..], &NaturalOrder, &7, false), None);
        assert_eq!(min(&[] as &[i32], &NaturalOrder, true), None);
    }

    #[test]
    fn test_ties_resolve_towards_earliest_index() {
        // Only the first field takes part in the comparison.
        let data: Vec<(u8, usize)> = (0..1000).map(|idx| ((idx % 10) as u8, idx)).collect();
        let comparer = CompareFn(|a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0));

        for num_partitions in [1, 2, 3, 7, 64] {
            assert_eq!(min_partitioned(&data[..], &comparer, num_partitions), Some(0));
            assert_eq!(max_partitioned(&data[..], &comparer, num_partitions), Some(9));
            assert_eq!(
                index_of_partitioned(&data[..], &comparer, &(5, 0), num_partitions),
                Some(5)
            );
            assert_eq!(
                last_index_of_partitioned(&data[..], &comparer, &(5, 0), num_partitions),
                Some(995)
            );
        }
    }

    #[test]
    fn test_gated_parallel_path_above_threshold() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(21);
        let data: Vec<u64> = (0..PARALLEL_THRESHOLD * 2).map(|_| rng.random()).collect();
        let probe = data[PARALLEL_THRESHOLD + 17];

        assert_eq!(
            min(&data[..], &NaturalOrder, true),
            min(&data[..], &NaturalOrder, false)
        );
        assert_eq!(
            max(&data[..], &NaturalOrder, true),
            max(&data[..], &NaturalOrder, false)
        );
        assert_eq!(
            index_of(&data[..], &NaturalOrder, &probe, true),
            index_of(&data[..], &NaturalOrder, &probe, false)
        );
        assert_eq!(
            last_index_of(&data[..], &NaturalOrder, &probe, true),
            last_index_of(&data[..], &NaturalOrder, &probe, false)
        );
    }

    generate_reduction_tests!(u8, |rng| rng.random::<u8>());
    generate_reduction_tests!(i64, |rng| rng.random_range(-50_i64..50));
    generate_reduction_tests!(f64, |rng| rng.random::<f64>());
}
