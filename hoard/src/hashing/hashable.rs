//! Implements [`Hashable`] for the built-in element types.
//!
//! Integers of up to 32 bits (and `bool`, `char`, `f32`) are widened to `u32` and hashed with
//! [`multiply_shift`], 64-bit values with [`pair_multiply_shift`], 128-bit values (and
//! timestamps, as nanoseconds) with [`pair_multiply_shift_u128`] and strings with XXH3. Raw
//! pointers hash their address, so two pointers are equal only when they point at the same place.
use crate::hashing::multiply_shift::{
    multiply_shift, pair_multiply_shift, pair_multiply_shift_u128,
};
use crate::hashing::HashState;
use std::ptr::NonNull;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// A type that has a built-in hash function.
///
/// Implementations must agree with [`crate::compare::Comparable`]: values that compare equal must
/// produce equal codes for the same `state`.
pub trait Hashable {
    /// Hash the value with the parameters from `state`.
    fn hash_with(&self, state: &HashState) -> u64;
}

impl<T: Hashable + ?Sized> Hashable for &T {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        (**self).hash_with(state)
    }
}

/// Generates [`Hashable`] implementations for types that fit into 32 bits.
macro_rules! impl_hashable_small {
    ($($t:ty),*) => {
        $(
            impl Hashable for $t {
                #[inline]
                fn hash_with(&self, state: &HashState) -> u64 {
                    multiply_shift(*self as u32, state.small())
                }
            }
        )*
    };
}

impl_hashable_small!(u8, i8, u16, i16, u32, i32, bool, char);

/// Generates [`Hashable`] implementations for 64-bit (and pointer-sized) integers.
macro_rules! impl_hashable_int64 {
    ($($t:ty),*) => {
        $(
            impl Hashable for $t {
                #[inline]
                fn hash_with(&self, state: &HashState) -> u64 {
                    pair_multiply_shift(*self as u64, state.wide())
                }
            }
        )*
    };
}

impl_hashable_int64!(u64, i64, usize, isize);

impl Hashable for u128 {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        pair_multiply_shift_u128(*self, state.huge())
    }
}

impl Hashable for i128 {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        pair_multiply_shift_u128(*self as u128, state.huge())
    }
}

// Floats hash their bit pattern, which is exactly the equality `f32::total_cmp` induces.
impl Hashable for f32 {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        multiply_shift(self.to_bits(), state.small())
    }
}

impl Hashable for f64 {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        pair_multiply_shift(self.to_bits(), state.wide())
    }
}

impl Hashable for str {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        xxh3_64_with_seed(self.as_bytes(), state.bytes())
    }
}

impl Hashable for String {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        self.as_str().hash_with(state)
    }
}

impl<T: ?Sized> Hashable for *const T {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        pair_multiply_shift(self.cast::<()>() as usize as u64, state.wide())
    }
}

impl<T: ?Sized> Hashable for *mut T {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        self.cast_const().hash_with(state)
    }
}

impl<T: ?Sized> Hashable for NonNull<T> {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        self.as_ptr().cast_const().hash_with(state)
    }
}

impl Hashable for Duration {
    #[inline]
    fn hash_with(&self, state: &HashState) -> u64 {
        self.as_nanos().hash_with(state)
    }
}

impl Hashable for SystemTime {
    fn hash_with(&self, state: &HashState) -> u64 {
        let nanos: i128 = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_nanos() as i128,
            Err(before) => -(before.duration().as_nanos() as i128),
        };
        nanos.hash_with(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoard_testing::generate::{Generate, StringParams};
    use hoard_testing::stat::aggregate_p_values;
    use hoard_testing::stat::chi2_uniformity;
    use ndarray::Array1;
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    const NUM_CELLS: usize = 32;

    /// Hashes random unique keys under many seeds and checks that the codes spread uniformly.
    fn assert_uniform<K, G>(gen_key: G, num_keys: usize)
    where
        K: Hashable,
        G: Fn(&mut ChaCha20Rng) -> K,
    {
        let mut rng = ChaCha20Rng::seed_from_u64(0xC0FFEE);
        let mut p_values = Vec::new();

        for _ in 0..100 {
            let state = HashState::from_seed(rng.random());
            let mut observed = Array1::<f64>::zeros(NUM_CELLS);
            for _ in 0..num_keys {
                let key = gen_key(&mut rng);
                observed[(key.hash_with(&state) % NUM_CELLS as u64) as usize] += 1.0;
            }
            p_values.push(chi2_uniformity(&observed).p_value);
        }

        let aggregation = aggregate_p_values(&Array1::from(p_values), 0.001);
        assert!(aggregation.outcome, "{:?}", aggregation);
    }

    #[test]
    fn test_u32_codes_are_uniform() {
        assert_uniform(|rng| rng.random::<u32>(), 4096);
    }

    #[test]
    fn test_u64_codes_are_uniform() {
        assert_uniform(|rng| rng.random::<u64>(), 4096);
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_u128_codes_are_uniform() {
        assert_uniform(|rng| rng.random::<u128>(), 4096);
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_string_codes_are_uniform() {
        assert_uniform(
            |rng| String::generate(rng, &StringParams::new(1, 32)),
            4096,
        );
    }

    #[test]
    fn test_equal_values_hash_equally() {
        let state = HashState::from_seed(99);

        assert_eq!(
            String::from("hoard").hash_with(&state),
            "hoard".hash_with(&state)
        );
        assert_eq!(7_u8.hash_with(&state), 7_u32.hash_with(&state));
        assert_eq!(1.5_f64.hash_with(&state), 1.5_f64.hash_with(&state));
        assert_ne!(0.0_f64.hash_with(&state), (-0.0_f64).hash_with(&state));
    }

    #[test]
    fn test_pointer_identity() {
        let state = HashState::from_seed(1);
        let values = [1_u32, 1_u32];
        let first: *const u32 = &values[0];
        let second: *const u32 = &values[1];

        assert_eq!(first.hash_with(&state), first.hash_with(&state));
        assert_ne!(first.hash_with(&state), second.hash_with(&state));
    }

    #[test]
    fn test_timestamps_before_and_after_epoch() {
        let state = HashState::from_seed(5);
        let second = Duration::from_secs(1);

        let before = UNIX_EPOCH - second;
        let after = UNIX_EPOCH + second;
        assert_ne!(before.hash_with(&state), after.hash_with(&state));
        assert_eq!(after.hash_with(&state), (UNIX_EPOCH + second).hash_with(&state));
    }
}
