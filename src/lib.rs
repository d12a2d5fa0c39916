//! Partitioning of observed values for visualization and simulation
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`robust_core`]: error type and the numeric value boundary
//! - [`robust_quantile`]: quantile estimators used to infer partition bounds
//! - [`robust_partition`]: the partitioners themselves
//!
//! ```rust
//! use robust_partitioning::prelude::*;
//!
//! let mut partitioner = ContinuousRangePartitioner::new(10)?;
//! partitioner.fit(&[1.0, 2.5, 2.7, 3.1, 8.0])?;
//! assert_eq!(partitioner.len()?, partitioner.frequencies()?.len());
//! # Ok::<(), robust_partitioning::Error>(())
//! ```

pub use robust_core;
pub use robust_partition;
pub use robust_quantile;

pub use robust_core::{Error, Result};

pub mod prelude {
    pub use robust_core::{Error, Numeric, Result};
    pub use robust_partition::{
        ceil_to_nice_number, CategoryConfig, CategoryPartitioner, ContinuousRangePartitioner,
        ContinuousStep, IntegerRangePartitioner, IntegerStep, PartitionBin, Partitioner,
        RangeConfig, RangePartitioner, StepPolicy,
    };
    pub use robust_quantile::{QuantileEstimator, QuantileMethod};
}
