//! Core trait for quantile estimation

use crate::Result;
use robust_core::Error;

/// Main trait for quantile estimation
///
/// Implementations work on `f64` samples; numeric partitioners convert their
/// values before asking for bounds.
pub trait QuantileEstimator: Send + Sync {
    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    ///
    /// Sorts a copy of `data`; the caller's slice is left untouched.
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Short name used in log output
    fn name(&self) -> &'static str;
}

/// Validate the sample and probability shared by every estimator
pub(crate) fn check_inputs(sorted_data: &[f64], p: f64) -> Result<()> {
    if sorted_data.is_empty() {
        return Err(Error::empty_input("quantile estimation"));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    Ok(())
}
