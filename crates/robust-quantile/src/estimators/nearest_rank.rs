//! Nearest-rank sample quantile

use crate::traits::{check_inputs, QuantileEstimator};
use crate::Result;
use tracing::trace;

/// Nearest-rank quantile
///
/// Returns the `ceil(n * p)`-th smallest value (1-based, clamped to the
/// sample), so the result is always an observed value. Useful when bounds
/// must coincide with data points, e.g. for integer-valued samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestRank;

impl QuantileEstimator for NearestRank {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_inputs(sorted_data, p)?;

        let n = sorted_data.len();
        let rank = ((n as f64 * p).ceil() as usize).clamp(1, n);
        let value = sorted_data[rank - 1];
        trace!(n, p, rank, value, "nearest-rank quantile");
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "nearest-rank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_rank_values() {
        let data = [15.0, 20.0, 35.0, 40.0, 50.0];
        let est = NearestRank;
        assert_eq!(est.quantile_sorted(&data, 0.05).unwrap(), 15.0);
        assert_eq!(est.quantile_sorted(&data, 0.30).unwrap(), 20.0);
        assert_eq!(est.quantile_sorted(&data, 0.40).unwrap(), 20.0);
        assert_eq!(est.quantile_sorted(&data, 0.50).unwrap(), 35.0);
        assert_eq!(est.quantile_sorted(&data, 1.0).unwrap(), 50.0);
    }

    #[test]
    fn test_zero_probability_is_minimum() {
        assert_eq!(NearestRank.quantile(&[3.0, 9.0, 1.0], 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_sample() {
        assert!(NearestRank.quantile(&[], 0.5).is_err());
    }
}
