//! Bounded partitioning of observed values
//!
//! This crate summarizes a potentially large or continuous set of values into
//! at most `max_partitions` discrete partitions, each with a representative
//! value and an observation count. It serves visualization and simulation
//! code that needs a handful of buckets rather than raw samples.
//!
//! # Key Features
//!
//! - **One contract**: every strategy implements [`Partitioner`]
//! - **Readable steps**: numeric partitions are 1, 2 or 5 times a power of ten wide
//! - **Aligned centers**: partition centers are multiples of the step
//! - **Robust bounds**: missing bounds come from the 2.5th and 97.5th percentiles,
//!   so outliers do not stretch the range
//! - **Pluggable policies**: continuous and integer step rules share one engine
//!
//! # Examples
//!
//! ## Continuous Values
//!
//! ```rust
//! use robust_partition::{ContinuousRangePartitioner, Partitioner};
//!
//! let data: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin() * 40.0 + 50.0).collect();
//! let mut partitioner = ContinuousRangePartitioner::new(20).unwrap();
//! partitioner.fit(&data).unwrap();
//!
//! let centers = partitioner.partitions().unwrap();
//! for (center, count) in centers.iter().zip(partitioner.frequencies().unwrap()) {
//!     println!("{center:>6.1}: {count}");
//! }
//! ```
//!
//! ## Integer Values
//!
//! ```rust
//! use robust_partition::{IntegerRangePartitioner, Partitioner};
//!
//! let data: Vec<i64> = (0..10).collect();
//! let mut partitioner = IntegerRangePartitioner::with_bounds(20, Some(0), Some(9)).unwrap();
//! partitioner.fit(&data).unwrap();
//!
//! assert_eq!(partitioner.partition_width().unwrap(), 1);
//! assert_eq!(partitioner.len().unwrap(), 10);
//! ```
//!
//! ## Categorical Values
//!
//! ```rust
//! use robust_partition::{CategoryPartitioner, Partitioner};
//!
//! let mut partitioner = CategoryPartitioner::new(2).unwrap();
//! partitioner.fit(&["red", "blue", "red", "green"]).unwrap();
//!
//! assert!(partitioner.is_categorical());
//! assert_eq!(partitioner.partitions().unwrap(), vec!["red", "blue"]);
//! ```

pub mod category;
pub mod config;
pub mod nice;
pub mod policy;
pub mod range;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use category::CategoryPartitioner;
pub use config::{CategoryConfig, RangeConfig, DEFAULT_MAX_PARTITIONS};
pub use nice::ceil_to_nice_number;
pub use policy::{ContinuousStep, IntegerStep, StepPolicy};
pub use range::{
    ContinuousRangePartitioner, IntegerRangePartitioner, RangePartitioner, LOWER_TAIL_QUANTILE,
    UPPER_TAIL_QUANTILE,
};
pub use traits::Partitioner;
pub use types::PartitionBin;

pub use robust_core::{Error, Result};

// Convenience functions
/// Partition real values with inferred bounds
pub fn continuous_partitions(
    data: &[f64],
    max_partitions: usize,
) -> Result<ContinuousRangePartitioner> {
    let mut partitioner = ContinuousRangePartitioner::new(max_partitions)?;
    partitioner.fit(data)?;
    Ok(partitioner)
}

/// Partition integer values with inferred bounds
pub fn integer_partitions(data: &[i64], max_partitions: usize) -> Result<IntegerRangePartitioner> {
    let mut partitioner = IntegerRangePartitioner::new(max_partitions)?;
    partitioner.fit(data)?;
    Ok(partitioner)
}

/// Keep the `max_partitions` most frequent categories
pub fn category_partitions<T>(data: &[T], max_partitions: usize) -> Result<CategoryPartitioner<T>>
where
    T: Eq + std::hash::Hash + Clone,
{
    let mut partitioner = CategoryPartitioner::new(max_partitions)?;
    partitioner.fit(data)?;
    Ok(partitioner)
}
