//! Linear interpolation between order statistics (Hyndman-Fan type 7)

use crate::traits::{check_inputs, QuantileEstimator};
use crate::Result;
use tracing::trace;

/// Linearly interpolated sample quantile
///
/// The quantile sits at fractional position `h = (n - 1) * p` in the sorted
/// sample and is interpolated between the two neighbouring order statistics.
/// `p = 0` and `p = 1` return the minimum and maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_inputs(sorted_data, p)?;

        let n = sorted_data.len();
        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let fraction = h - lo as f64;

        let value = sorted_data[lo] + fraction * (sorted_data[hi] - sorted_data[lo]);
        trace!(n, p, position = h, value, "linear quantile");
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_odd_and_even() {
        let est = LinearInterpolation;
        assert_eq!(est.quantile(&[3.0, 1.0, 2.0], 0.5).unwrap(), 2.0);
        assert_eq!(est.quantile(&[4.0, 1.0, 3.0, 2.0], 0.5).unwrap(), 2.5);
    }

    #[test]
    fn test_tail_quantiles() {
        let data: Vec<f64> = (0..=100).map(f64::from).collect();
        let est = LinearInterpolation;
        assert_relative_eq!(est.quantile_sorted(&data, 0.025).unwrap(), 2.5);
        assert_relative_eq!(est.quantile_sorted(&data, 0.975).unwrap(), 97.5);
        assert_eq!(est.quantile_sorted(&data, 0.0).unwrap(), 0.0);
        assert_eq!(est.quantile_sorted(&data, 1.0).unwrap(), 100.0);
    }

    #[test]
    fn test_single_value() {
        let est = LinearInterpolation;
        assert_eq!(est.quantile(&[7.0], 0.025).unwrap(), 7.0);
        assert_eq!(est.quantile(&[7.0], 0.975).unwrap(), 7.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let est = LinearInterpolation;
        assert!(est.quantile(&[], 0.5).is_err());
        assert!(est.quantile(&[1.0], 1.5).is_err());
        assert!(est.quantile(&[1.0], f64::NAN).is_err());
    }
}
