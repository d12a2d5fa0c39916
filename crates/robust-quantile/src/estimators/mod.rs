//! Concrete quantile estimator implementations

mod closure;
mod linear;
mod nearest_rank;

pub use closure::FnQuantile;
pub use linear::LinearInterpolation;
pub use nearest_rank::NearestRank;
