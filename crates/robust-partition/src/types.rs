//! Core types for partition representation

use robust_core::Numeric;
use std::fmt;

/// A single partition of a numeric range
///
/// Bundles what the range partitioner reports through three parallel
/// sequences: the center, the half-open interval and the count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionBin<T: Numeric = f64> {
    /// Representative value of the partition
    pub center: T,
    /// Left edge of the interval (inclusive)
    pub left: T,
    /// Right edge of the interval (exclusive)
    pub right: T,
    /// Number of observed values in this partition
    pub count: usize,
}

impl<T: Numeric> PartitionBin<T> {
    /// Create a new partition bin
    pub fn new(center: T, left: T, right: T, count: usize) -> Self {
        Self {
            center,
            left,
            right,
            count,
        }
    }

    /// Get the width of the interval
    pub fn width(&self) -> T {
        self.right - self.left
    }

    /// Check if a value falls within this partition
    pub fn contains(&self, value: T) -> bool {
        value >= self.left && value < self.right
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl<T: Numeric + fmt::Display> fmt::Display for PartitionBin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}): count={}",
            self.center, self.left, self.right, self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_bin() {
        let bin = PartitionBin::<f64>::new(0.5, 0.0, 1.0, 5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.0));
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
        assert_eq!(bin.frequency(10), 0.5);
        assert_eq!(bin.frequency(0), 0.0);
    }

    #[test]
    fn test_integer_bin_display() {
        let bin = PartitionBin::<i64>::new(10, 8, 13, 3);
        assert_eq!(bin.width(), 5);
        assert!(bin.contains(12));
        assert!(!bin.contains(13));
        assert_eq!(bin.to_string(), "10 [8, 13): count=3");
    }
}
