//! Implements a utility-function for testing equivalence between two implementations of the same
//! reduction (typically the serial and the partitioned one).
use rand::Rng;
use std::fmt::Debug;

/// A reduction over a sequence and a probe value.
pub type Reduction<T, O> = dyn Fn(&[T], &T) -> O;

/// Verifies that two reductions produce identical outputs for the same inputs.
///
/// # Parameters
///
/// - `rng`: A random number generator used to create test data.
/// - `reduction1`: The reference implementation.
/// - `reduction2`: The implementation under test.
/// - `gen_value`: Element generator function.
/// - `sizes`: Sequence lengths to test, each one is tested `num_trials` times.
/// - `num_trials`: Number of different sequences per length.
///
/// Half of the probes are taken from the sequence itself so that the lookups hit.
///
/// # Panics
///
/// - If for any (sequence, probe) pair the outputs differ.
pub fn equivalence<R, T, O>(
    rng: &mut R,
    reduction1: &Reduction<T, O>,
    reduction2: &Reduction<T, O>,
    gen_value: &dyn Fn(&mut R) -> T,
    sizes: &[usize],
    num_trials: usize,
) where
    R: Rng,
    T: Clone + Debug,
    O: PartialEq + Debug,
{
    for &size in sizes {
        for _ in 0..num_trials {
            let data: Vec<T> = (0..size).map(|_| gen_value(rng)).collect();
            let probe = if size > 0 && rng.random_bool(0.5) {
                data[rng.random_range(0..size)].clone()
            } else {
                gen_value(rng)
            };

            let output1 = reduction1(&data, &probe);
            let output2 = reduction2(&data, &probe);

            assert_eq!(
                output1, output2,
                "Reductions produce different results for size {}, probe {:?}",
                size, probe,
            );
        }
    }
}

/// Generates a test checking that the partitioned reductions of `crate::parallel` agree with the
/// serial ones for the given element type.
///
/// # Parameters
///
/// - `value_type`: The element type (e.g., `u32`).
/// - `generate_value`: A function that generates a random element.
///
/// # Example
///
/// ```ignore
/// generate_reduction_tests!(u32, |rng| rng.random::<u32>());
/// ```
#[macro_export]
macro_rules! generate_reduction_tests {
    ($value_type:ty, $generate_value:expr$(,)?) => {
        compose_idents::compose_idents!(
            test_fn = concat(test_reduction_equivalence_, normalize($value_type)),
            {
                #[test]
                fn test_fn() {
                    use crate::compare::NaturalOrder;
                    use crate::parallel::{
                        index_of, index_of_partitioned, last_index_of,
                        last_index_of_partitioned, max, max_partitioned, min, min_partitioned,
                    };
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    type Output = (Option<usize>, Option<usize>, Option<usize>, Option<usize>);

                    for num_partitions in [1_usize, 2, 3, 5, 8, 13] {
                        let serial = |data: &[$value_type], probe: &$value_type| -> Output {
                            (
                                min(data, &NaturalOrder, false),
                                max(data, &NaturalOrder, false),
                                index_of(data, &NaturalOrder, probe, false),
                                last_index_of(data, &NaturalOrder, probe, false),
                            )
                        };
                        let partitioned = move |data: &[$value_type], probe: &$value_type| -> Output {
                            (
                                min_partitioned(data, &NaturalOrder, num_partitions),
                                max_partitioned(data, &NaturalOrder, num_partitions),
                                index_of_partitioned(data, &NaturalOrder, probe, num_partitions),
                                last_index_of_partitioned(data, &NaturalOrder, probe, num_partitions),
                            )
                        };

                        $crate::equivalence::equivalence::<ChaCha20Rng, $value_type, Output>(
                            &mut ChaCha20Rng::seed_from_u64(num_partitions as u64),
                            &serial,
                            &partitioned,
                            &$generate_value,
                            &[0, 1, 2, 17, 100, 1000],
                            20,
                        );
                    }
                }
            }
        );
    };
}
pub use generate_reduction_tests;
