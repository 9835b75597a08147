//! Provides [`SeededHasher`] - the default hasher of [`crate::hash_set::HashSet`].
use crate::hashing::Hashable;
use hoard_core::Hasher;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt::{Debug, Formatter};

/// Seed used by [`SeededHasher::default`].
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Parameters of the built-in hash functions, derived from a single seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState {
    small: [u64; 2],
    wide: [u64; 3],
    huge: [u64; 5],
    bytes: u64,
}

impl HashState {
    /// Derive the parameters of every hash function family from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let mut small: [u64; 2] = rng.random();
        // Multiply-shift needs an odd multiplier.
        small[0] |= 1;

        Self {
            small,
            wide: rng.random(),
            huge: rng.random(),
            bytes: rng.random(),
        }
    }

    #[inline]
    pub fn small(&self) -> &[u64; 2] {
        &self.small
    }

    #[inline]
    pub fn wide(&self) -> &[u64; 3] {
        &self.wide
    }

    #[inline]
    pub fn huge(&self) -> &[u64; 5] {
        &self.huge
    }

    #[inline]
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

/// Hasher for every type implementing [`Hashable`].
///
/// Hashing is deterministic for a given seed, two sets built with the same seed agree on every
/// hash code.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SeededHasher {
    state: HashState,
}

impl SeededHasher {
    /// Create a new hasher with a given `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: HashState::from_seed(seed),
        }
    }

    /// Create a new hasher from the given `state`.
    pub fn from_state(state: HashState) -> Self {
        Self { state }
    }

    /// Get the state of the hasher.
    pub fn state(&self) -> &HashState {
        &self.state
    }
}

impl Debug for SeededHasher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededHasher")
            .field("state", &self.state)
            .finish()
    }
}

impl<T: Hashable + ?Sized> Hasher<T> for SeededHasher {
    #[inline]
    fn hash(&self, value: &T) -> u64 {
        value.hash_with(&self.state)
    }
}

/// Adapts a closure into a [`Hasher`].
///
/// Required for element types without a [`Hashable`] implementation.
#[derive(Clone, Copy)]
pub struct HashFn<F>(pub F);

impl<F> Debug for HashFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashFn")
    }
}

impl<T: ?Sized, F: Fn(&T) -> u64> Hasher<T> for HashFn<F> {
    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (self.0)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_deterministic() {
        assert_eq!(HashState::from_seed(17), HashState::from_seed(17));
        assert_ne!(HashState::from_seed(17), HashState::from_seed(18));
        assert_eq!(HashState::default(), HashState::from_seed(DEFAULT_SEED));
    }

    #[test]
    fn test_small_multiplier_is_odd() {
        for seed in 0..64 {
            assert_eq!(HashState::from_seed(seed).small()[0] & 1, 1);
        }
    }

    #[test]
    fn test_seeded_hasher_matches_hashable() {
        let hasher = SeededHasher::from_seed(3);
        assert_eq!(
            Hasher::<u64>::hash(&hasher, &12345),
            12345_u64.hash_with(hasher.state())
        );
        assert_eq!(
            Hasher::<str>::hash(&hasher, "abc"),
            "abc".hash_with(hasher.state())
        );
    }

    #[test]
    fn test_hash_fn() {
        let hasher = HashFn(|value: &(u8, u8)| value.0 as u64 * 256 + value.1 as u64);
        assert_eq!(hasher.hash(&(1, 2)), 258);
    }
}
