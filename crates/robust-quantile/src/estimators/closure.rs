//! Adapter turning a closure into a quantile estimator

use crate::traits::QuantileEstimator;
use crate::Result;
use std::fmt;

/// Quantile estimator backed by a closure
///
/// The closure receives the sorted sample and the probability.
///
/// ```rust
/// use robust_quantile::{FnQuantile, QuantileEstimator};
///
/// // Always report the extremes, whatever `p` is
/// let extremes = FnQuantile::new(|sorted: &[f64], p: f64| {
///     Ok(if p < 0.5 { sorted[0] } else { sorted[sorted.len() - 1] })
/// });
/// assert_eq!(extremes.quantile(&[2.0, 9.0, 4.0], 0.975).unwrap(), 9.0);
/// ```
pub struct FnQuantile<F> {
    func: F,
}

impl<F> FnQuantile<F>
where
    F: Fn(&[f64], f64) -> Result<f64> + Send + Sync,
{
    /// Wrap a quantile function
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> QuantileEstimator for FnQuantile<F>
where
    F: Fn(&[f64], f64) -> Result<f64> + Send + Sync,
{
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        (self.func)(sorted_data, p)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> fmt::Debug for FnQuantile<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnQuantile").finish_non_exhaustive()
    }
}
