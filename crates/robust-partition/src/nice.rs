//! Rounding of step sizes to human-readable magnitudes

use robust_core::{Error, Result};

/// Mantissas of the "1-2-5 per decade" series
pub const NICE_MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];

/// Round a step size up to the nearest value in the series
/// `..., 0.1, 0.2, 0.5, 1, 2, 5, 10, 20, 50, ...`
///
/// For each mantissa `m` the candidate is `10^ceil(log10(step * m)) / m`;
/// the smallest candidate wins.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if `step` is not a positive finite number.
/// A zero step comes from a zero-width range, e.g. explicit bounds `[5, 5]`.
///
/// # Examples
///
/// ```rust
/// use robust_partition::ceil_to_nice_number;
///
/// assert_eq!(ceil_to_nice_number(5.26).unwrap(), 10.0);
/// assert_eq!(ceil_to_nice_number(0.3).unwrap(), 0.5);
/// assert!(ceil_to_nice_number(0.0).is_err());
/// ```
pub fn ceil_to_nice_number(step: f64) -> Result<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::configuration(format!(
            "step size {step} must be positive and finite; the partition range has zero width"
        )));
    }

    Ok(NICE_MANTISSAS
        .iter()
        .map(|&m| 10f64.powf((step * m).log10().ceil()) / m)
        .fold(f64::INFINITY, f64::min))
}
