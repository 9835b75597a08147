//! Implementation of the multiply-shift hashing scheme (multiply-add-shift to be precise)
//! from [Dietzfelbinger (1996)], [Dietzfelbinger et al. (1997)] and [Thorup (2015)].
//!
//! Multiply-shift hashing avoids expensive arithmetic operations like modulo and division and
//! instead exploits integer overflow. The functions here return the full 64-bit word folded with
//! [`fold_64`] instead of extracting the top bits, since the set keys its buckets by the whole
//! code and leaves bucket selection to the underlying table.
//!
//! [Dietzfelbinger (1996)]: https://doi.org/10.1007/3-540-60922-9_46
//! [Dietzfelbinger et al. (1997)]: https://doi.org/10.1006/jagm.1997.0873
//! [Thorup (2015)]: https://doi.org/10.48550/arXiv.1504.06804
use crate::hashing::common::{fold_64, split_128};

/// Hashes a 32-bit unsigned integer using the multiply-shift hashing scheme.
///
/// # Parameters
///
/// - `value`: The input value.
/// - `seed`: Random seed. The first element must be odd.
#[inline]
pub const fn multiply_shift(value: u32, seed: &[u64; 2]) -> u64 {
    debug_assert!(seed[0] & 1 == 1, r#""seed[0]" must be odd"#);

    let hash = seed[0].wrapping_mul(value as u64).wrapping_add(seed[1]);
    fold_64(hash)
}

/// Hashes a 64-bit unsigned integer using the pair-multiply-shift hashing scheme.
///
/// # Parameters
///
/// - `value`: The input value.
/// - `seed`: Random seed.
#[inline]
pub const fn pair_multiply_shift(value: u64, seed: &[u64; 3]) -> u64 {
    let hash = seed[0]
        .wrapping_add(value)
        .wrapping_mul(seed[1].wrapping_add(value >> 32))
        .wrapping_add(seed[2]);

    fold_64(hash)
}

/// Hashes a 128-bit unsigned integer using the pair-multiply-shift hashing scheme.
///
/// Interprets the input as four 32-bit lanes and combines two pair-products.
#[inline]
pub const fn pair_multiply_shift_u128(value: u128, seed: &[u64; 5]) -> u64 {
    let (low, high) = split_128(value);

    let hash = seed[0]
        .wrapping_add(low)
        .wrapping_mul(seed[1].wrapping_add(low >> 32))
        .wrapping_add(
            seed[2]
                .wrapping_add(high)
                .wrapping_mul(seed[3].wrapping_add(high >> 32))
                .wrapping_add(seed[4]),
        );

    fold_64(hash)
}
