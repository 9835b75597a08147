//! Implements empirical tests for checking the quality of hash functions.
use ndarray::prelude::*;
use ndarray::{ScalarOperand, Zip};
use num_traits::{Float, NumAssignOps};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic of `observed` counts against `expected` ones.
///
/// `dof` defaults to the number of cells minus one.
pub fn chi2<V>(observed: &[V], expected: &[V], dof: Option<usize>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    debug_assert!(observed.len() > 1, "At least two cells are required");

    let chi2: V = Zip::from(observed)
        .and(expected)
        .fold(0.0.into(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff * diff / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = (1.0 - dist.cdf(chi2.to_f64().unwrap())).into();

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test: are the `observed` counts equal across all cells?
pub fn chi2_uniformity<'a, V, A>(observed: A) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64> + ScalarOperand,
    A: AsArray<'a, V>,
{
    let observed: ArrayView1<V> = observed.into();
    let expected_value = observed.sum() / (observed.len() as f64).into();
    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);
    let observed = observed.to_vec();

    chi2(&observed, expected.as_slice().unwrap(), None)
}

/// An aggregation of p-values from multiple runs of a statistical test.
#[derive(Debug)]
pub struct PValueAggregation {
    pub outcome: bool,
    pub alpha: f64,
    pub expected_passes: f64,
    pub num_passes: usize,
    pub uniformity: Chi2Statistic<f64>,
}

/// Number of equal-width cells the p-values are binned into for the uniformity check.
const P_VALUE_CELLS: usize = 10;

/// Aggregates test results from multiple runs of a statistical test.
///
/// # Notes
///
/// Follows [Bassham et al. (2010)], section 4.2: the number of passing runs must not fall more
/// than three standard deviations below the expected pass rate, and the p-values binned into
/// ten equal cells must pass a chi-square uniformity test at level `alpha`.
///
/// [Bassham et al. (2010)]: https://doi.org/10.6028/NIST.SP.800-22r1a
pub fn aggregate_p_values<'a, A>(p_values: A, alpha: f64) -> PValueAggregation
where
    A: AsArray<'a, f64>,
{
    let p_values: ArrayView1<f64> = p_values.into();
    let num_trials = p_values.len() as f64;
    let pass_rate = 1.0 - alpha;
    let margin = 3.0 * ((pass_rate * (1.0 - pass_rate)) / num_trials).sqrt();
    let expected_passes = num_trials * (pass_rate - margin);
    let num_passes = p_values.iter().filter(|&&p| p >= alpha).count();

    let mut cells = Array1::<f64>::zeros(P_VALUE_CELLS);
    for &p in p_values.iter() {
        let cell = ((p * P_VALUE_CELLS as f64) as usize).min(P_VALUE_CELLS - 1);
        cells[cell] += 1.0;
    }
    let uniformity = chi2_uniformity(&cells);

    PValueAggregation {
        outcome: num_passes as f64 >= expected_passes && uniformity.p_value >= alpha,
        alpha,
        expected_passes,
        num_passes,
        uniformity,
    }
}
