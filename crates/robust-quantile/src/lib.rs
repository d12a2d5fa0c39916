//! Quantile estimation for partition bound inference
//!
//! Range partitioners infer their covered range from the 2.5th and 97.5th
//! percentiles of the data. The interpolation rule used at that step matters
//! at the margins, so it is pluggable: anything implementing
//! [`QuantileEstimator`] can be injected, and two standard rules ship here.
//!
//! - [`LinearInterpolation`]: Hyndman-Fan type 7, the usual default of array
//!   libraries
//! - [`NearestRank`]: the smallest order statistic covering `p`
//! - [`FnQuantile`]: wraps a closure, handy for deterministic test doubles
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::{LinearInterpolation, QuantileEstimator};
//!
//! let data = vec![4.0, 1.0, 3.0, 2.0, 5.0];
//! let median = LinearInterpolation.quantile(&data, 0.5).unwrap();
//! assert_eq!(median, 3.0);
//! ```

pub mod estimators;
pub mod factories;
pub mod traits;

// Re-export main types
pub use estimators::{FnQuantile, LinearInterpolation, NearestRank};
pub use factories::QuantileMethod;
pub use traits::QuantileEstimator;

pub use robust_core::{Error, Result};

/// Type alias for the estimator used when none is configured
pub type DefaultQuantileEstimator = LinearInterpolation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Error, FnQuantile, LinearInterpolation, NearestRank, QuantileEstimator, QuantileMethod,
        Result,
    };
}
