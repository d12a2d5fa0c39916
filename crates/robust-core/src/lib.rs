//! Core types shared across the robust partitioning crates
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//!
//! - [`Error`] and [`Result`]: one error type for configuration mistakes,
//!   queries on unfitted partitioners and quantile failures
//! - [`Numeric`]: the boundary trait that lets the numeric partitioning
//!   engine accept integers and floats while computing in `f64`
//!
//! # Example
//!
//! ```rust
//! use robust_core::{Error, Numeric};
//!
//! let centers: Vec<i64> = [0.0, 2.0, 4.0].iter().map(|&c| i64::from_f64(c)).collect();
//! assert_eq!(centers, vec![0, 2, 4]);
//!
//! let err = Error::configuration("max_partitions=1 must be at least 2");
//! assert!(err.is_configuration());
//! ```

pub mod error;
pub mod numeric;

pub use error::{Error, Result};
pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::numeric::Numeric;
}
