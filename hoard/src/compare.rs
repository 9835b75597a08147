//! Built-in comparers.
//!
//! [`NaturalOrder`] is the default comparer of every container and is available for all types
//! implementing [`Comparable`]. Other element types are compared through a closure wrapped in
//! [`CompareFn`].
use hoard_core::Comparer;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;
use std::time::{Duration, SystemTime};

/// A type with a built-in total order.
///
/// Differs from [`Ord`] in that it is also implemented for floating point numbers (through
/// [`f64::total_cmp`]) and for raw pointers (by address).
pub trait Comparable {
    fn compare(&self, other: &Self) -> Ordering;
}

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

macro_rules! impl_comparable_ord {
    ($($t:ty),*) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_comparable_ord!(
    u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, bool, char, str, String,
    Duration, SystemTime
);

impl Comparable for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: ?Sized> Comparable for *const T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cast::<()>().cmp(&other.cast::<()>())
    }
}

impl<T: ?Sized> Comparable for *mut T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cast_const().compare(&other.cast_const())
    }
}

impl<T: ?Sized> Comparable for NonNull<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_ptr().compare(&other.as_ptr())
    }
}

/// Orders elements by their [`Comparable`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Comparable + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.compare(b)
    }
}

/// Adapts a closure into a [`Comparer`].
#[derive(Clone, Copy)]
pub struct CompareFn<F>(pub F);

impl<F> Debug for CompareFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CompareFn")
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparer<T> for CompareFn<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Lifts a comparer over `T` to references to `T`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ByRef<C>(pub C);

impl<'a, T: ?Sized, C: Comparer<T>> Comparer<&'a T> for ByRef<C> {
    #[inline]
    fn compare(&self, a: &&'a T, b: &&'a T) -> Ordering {
        self.0.compare(*a, *b)
    }
}
