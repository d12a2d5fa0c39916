//! Partitioning of categorical values by identity

use crate::config::{check_max_partitions, CategoryConfig, DEFAULT_MAX_PARTITIONS};
use crate::traits::Partitioner;
use robust_core::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
struct CategoryState<T> {
    partitions: Vec<T>,
    frequencies: Vec<usize>,
}

/// Partition categorical values
///
/// Each distinct value is its own partition; only the `max_partitions` most
/// frequent values are kept, ordered by decreasing frequency. Values that
/// tie on frequency keep the order in which they were first seen. Values
/// outside the top `max_partitions` are dropped entirely, not folded into an
/// "other" partition.
///
/// # Example
///
/// ```rust
/// use robust_partition::{CategoryPartitioner, Partitioner};
///
/// let mut partitioner = CategoryPartitioner::new(3).unwrap();
/// partitioner.fit(&["a", "a", "b", "c", "c", "c", "d"]).unwrap();
///
/// assert_eq!(partitioner.partitions().unwrap(), vec!["c", "a", "b"]);
/// assert_eq!(partitioner.frequencies().unwrap(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct CategoryPartitioner<T> {
    max_partitions: usize,
    state: Option<CategoryState<T>>,
}

impl<T> CategoryPartitioner<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a new category partitioner
    ///
    /// Fails with a configuration error if `max_partitions < 2`.
    pub fn new(max_partitions: usize) -> Result<Self> {
        check_max_partitions(max_partitions)?;
        Ok(Self {
            max_partitions,
            state: None,
        })
    }

    /// Create a category partitioner from a configuration
    pub fn from_config(config: &CategoryConfig) -> Result<Self> {
        Self::new(config.max_partitions)
    }

    fn state(&self) -> Result<&CategoryState<T>> {
        self.state
            .as_ref()
            .ok_or_else(|| Error::not_fitted("CategoryPartitioner"))
    }

    /// Iterate over `(value, frequency)` pairs, most frequent first
    pub fn iter(&self) -> Result<impl Iterator<Item = (&T, usize)>> {
        let state = self.state()?;
        Ok(state.partitions.iter().zip(state.frequencies.iter().copied()))
    }
}

impl<T> Default for CategoryPartitioner<T> {
    fn default() -> Self {
        Self {
            max_partitions: DEFAULT_MAX_PARTITIONS,
            state: None,
        }
    }
}

impl<T> Partitioner for CategoryPartitioner<T>
where
    T: Eq + Hash + Clone,
{
    type Value = T;

    fn max_partitions(&self) -> usize {
        self.max_partitions
    }

    #[instrument(level = "debug", skip_all, fields(n = values.len()))]
    fn fit(&mut self, values: &[T]) -> Result<&mut Self> {
        // value -> (count, index of first occurrence)
        let mut counts: HashMap<&T, (usize, usize)> = HashMap::new();
        for (idx, value) in values.iter().enumerate() {
            counts.entry(value).or_insert((0, idx)).0 += 1;
        }
        let n_distinct = counts.len();

        let mut ranked: Vec<(&T, usize, usize)> = counts
            .into_iter()
            .map(|(value, (count, first_seen))| (value, count, first_seen))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(self.max_partitions);

        let (partitions, frequencies) = ranked
            .into_iter()
            .map(|(value, count, _)| (value.clone(), count))
            .unzip();

        let state = CategoryState {
            partitions,
            frequencies,
        };
        debug!(
            n_distinct,
            kept = state.partitions.len(),
            "fitted category partitioner"
        );

        self.state = Some(state);
        Ok(self)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn partitions(&self) -> Result<Vec<T>> {
        Ok(self.state()?.partitions.clone())
    }

    fn frequencies(&self) -> Result<&[usize]> {
        Ok(&self.state()?.frequencies)
    }

    fn is_categorical(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_by_frequency() {
        let mut p = CategoryPartitioner::new(3).unwrap();
        p.fit(&["a", "a", "b", "c", "c", "c", "d"]).unwrap();

        assert_eq!(p.partitions().unwrap(), vec!["c", "a", "b"]);
        assert_eq!(p.frequencies().unwrap(), &[3, 2, 1]);
        assert_eq!(p.len().unwrap(), 3);
        assert!(p.is_categorical());
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let mut p = CategoryPartitioner::new(10).unwrap();
        p.fit(&[7, 3, 3, 9, 7, 9, 1]).unwrap();

        assert_eq!(p.partitions().unwrap(), vec![7, 3, 9, 1]);
        assert_eq!(p.frequencies().unwrap(), &[2, 2, 2, 1]);
    }

    #[test]
    fn test_fewer_distinct_values_than_cap() {
        let mut p = CategoryPartitioner::new(5).unwrap();
        p.fit(&[true, false, true]).unwrap();
        assert_eq!(p.len().unwrap(), 2);
        assert_eq!(p.iter().unwrap().collect::<Vec<_>>(), vec![(&true, 2), (&false, 1)]);
    }

    #[test]
    fn test_empty_input() {
        let mut p = CategoryPartitioner::<String>::new(5).unwrap();
        p.fit(&[]).unwrap();
        assert!(p.is_fitted());
        assert!(p.is_empty().unwrap());
        assert!(p.partitions().unwrap().is_empty());
    }

    #[test]
    fn test_refit_replaces_state() {
        let mut p = CategoryPartitioner::new(2).unwrap();
        p.fit(&["x", "x", "y"]).unwrap();
        p.fit(&["z"]).unwrap();
        assert_eq!(p.partitions().unwrap(), vec!["z"]);
        assert_eq!(p.frequencies().unwrap(), &[1]);
    }

    #[test]
    fn test_invalid_max_partitions() {
        assert!(CategoryPartitioner::<&str>::new(1).unwrap_err().is_configuration());
    }

    #[test]
    fn test_queries_before_fit_fail() {
        let p = CategoryPartitioner::<&str>::new(2).unwrap();
        assert!(p.partitions().unwrap_err().is_not_fitted());
        assert!(p.frequencies().unwrap_err().is_not_fitted());
        assert!(p.len().unwrap_err().is_not_fitted());
    }
}
