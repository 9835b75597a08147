//! Data generation utilities useful for testing and benchmarking.
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates `size` random values of the type, duplicates allowed.
    fn generate_vec(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self> {
        (0..size).map(|_| Self::generate(rng, params)).collect()
    }

    /// Generates **unique** random values of the type, in generation order.
    fn generate_unique(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Clone,
    {
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
///
/// Narrow ranges are useful to provoke duplicates and ties.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified (inclusive) bounds.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_int {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_int!(u8, i8, u16, i16, u32, i32, u64, i64, usize);

impl Default for NumParams<f64> {
    fn default() -> Self {
        Self { min: -1e6, max: 1e6 }
    }
}

impl<R: Rng> Generate<R> for f64 {
    type GenerateParams = NumParams<f64>;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        rng.random_range(params.min..=params.max)
    }
}

/// Parameters for [`Generate`] implementations that generate strings.
pub struct StringParams {
    min_length: usize,
    max_length: usize,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 64,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        let iter = rng.sample_iter(&Alphanumeric);
        iter.take(length).map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_generate_unique() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let values = u8::generate_unique(&mut rng, &NumParams::new(0, 15), 16);

        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_string_params() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for value in String::generate_vec(&mut rng, &StringParams::new(2, 4), 100) {
            assert!((2..=4).contains(&value.len()));
        }
    }
}
