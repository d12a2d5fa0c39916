//! The capability contract shared by all partitioners

use robust_core::Result;

/// Partition a set of values, for use in visualizations and simulations
///
/// A partitioner is constructed with immutable configuration and becomes
/// fitted after a successful [`fit`](Partitioner::fit). Fitting again
/// replaces the previous state. Every query on an unfitted partitioner
/// returns [`Error::NotFitted`](robust_core::Error::NotFitted).
///
/// `partitions()` and `frequencies()` are parallel: entry `i` of both
/// describes the same partition.
pub trait Partitioner {
    /// Type of the partitioned values and of the partition representatives
    type Value;

    /// The maximum number of partitions this partitioner generates
    fn max_partitions(&self) -> usize;

    /// Calculate the partitioning for the given values
    ///
    /// Returns `self` so queries can be chained onto the fit.
    fn fit(&mut self, values: &[Self::Value]) -> Result<&mut Self>
    where
        Self: Sized;

    /// `true` once a fit has succeeded
    fn is_fitted(&self) -> bool;

    /// For each partition, a central value representing it
    fn partitions(&self) -> Result<Vec<Self::Value>>;

    /// For each partition, the number of observed values that fall within it
    fn frequencies(&self) -> Result<&[usize]>;

    /// `true` if this partitioner fits categorical values
    fn is_categorical(&self) -> bool;

    /// Number of partitions actually produced, at most `max_partitions()`
    fn len(&self) -> Result<usize> {
        Ok(self.frequencies()?.len())
    }

    /// `true` if the fit produced no partitions
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
