//! Partitioning of numeric values into evenly spaced intervals
//!
//! All partitions of a [`RangePartitioner`] share one width, the step. The
//! step comes from a [`StepPolicy`] and is rounded to the 1-2-5 series, and
//! every partition center is a multiple of it. The intervals are placed so
//! that the lower bound falls in the first one and the upper bound in the
//! last one. With a step of 0.2 a partitioning could read
//! `[3.2, 3.4), [3.4, 3.6), [3.6, 3.8), [3.8, 4.0)`.
//!
//! Bounds not supplied by the caller are inferred from the 2.5th and 97.5th
//! percentiles of the data. Every value between the resolved bounds is
//! counted, a value equal to the upper bound included: the last interval is
//! closed at the upper bound. Values outside the partitions are not counted.

use crate::config::{check_bounds, check_max_partitions, RangeConfig, DEFAULT_MAX_PARTITIONS};
use crate::policy::{ContinuousStep, IntegerStep, StepPolicy};
use crate::traits::Partitioner;
use crate::types::PartitionBin;
use robust_core::{Error, Numeric, Result};
use robust_quantile::{QuantileEstimator, QuantileMethod};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Percentile used to infer a missing lower bound
pub const LOWER_TAIL_QUANTILE: f64 = 0.025;

/// Percentile used to infer a missing upper bound
pub const UPPER_TAIL_QUANTILE: f64 = 0.975;

/// Range partitioner over real values with 1-2-5 steps and centered intervals
pub type ContinuousRangePartitioner = RangePartitioner<f64, ContinuousStep>;

/// Range partitioner over integers with integer steps of at least 1
pub type IntegerRangePartitioner = RangePartitioner<i64, IntegerStep>;

/// Relative tolerance under which a step quotient is taken as a whole number
const STEP_QUOTIENT_EPSILON: f64 = 1e-9;

/// Round `x` to the nearest integer if it is within float noise of it
///
/// Decimal bounds are not exact multiples of a decimal step in binary:
/// `(14.25 - 14.3 + 0.05) / 0.1` evaluates to `-7.1e-15`, not `0`.
fn snap_to_integer(x: f64) -> f64 {
    let nearest = x.round();
    if (x - nearest).abs() <= STEP_QUOTIENT_EPSILON * x.abs().max(1.0) {
        nearest
    } else {
        x
    }
}

/// Fitted state of a range partitioner
#[derive(Debug, Clone, PartialEq)]
struct RangeState {
    step: f64,
    first_partition: f64,
    last_partition: f64,
    frequencies: Vec<usize>,
}

impl RangeState {
    fn n_partitions(&self) -> usize {
        self.frequencies.len()
    }

    fn center(&self, idx: usize) -> f64 {
        self.first_partition + idx as f64 * self.step
    }
}

/// Partition numeric values in successive intervals of the same length
///
/// The step-size rule and the position of the center inside each interval
/// are supplied by the policy `S`; the alignment and counting algorithm is
/// shared. See [`ContinuousRangePartitioner`] and [`IntegerRangePartitioner`]
/// for the two standard combinations.
///
/// # Example
///
/// ```rust
/// use robust_partition::{ContinuousRangePartitioner, Partitioner};
///
/// let values: Vec<f64> = (0..=100).map(f64::from).collect();
/// let mut partitioner =
///     ContinuousRangePartitioner::with_bounds(20, Some(0.0), Some(100.0)).unwrap();
/// partitioner.fit(&values).unwrap();
///
/// assert_eq!(partitioner.partition_width().unwrap(), 10.0);
/// assert_eq!(partitioner.len().unwrap(), 11);
/// assert_eq!(partitioner.partitions().unwrap()[0], 0.0);
/// ```
#[derive(Clone)]
pub struct RangePartitioner<T: Numeric, S: StepPolicy> {
    max_partitions: usize,
    lower_bound: Option<T>,
    upper_bound: Option<T>,
    policy: S,
    quantile: Arc<dyn QuantileEstimator>,
    state: Option<RangeState>,
}

impl<T: Numeric, S: StepPolicy + Default> RangePartitioner<T, S> {
    /// Create a partitioner that infers its bounds from the data
    ///
    /// Fails with a configuration error if `max_partitions < 2`.
    pub fn new(max_partitions: usize) -> Result<Self> {
        Self::with_bounds(max_partitions, None, None)
    }

    /// Create a partitioner with optional explicit bounds
    ///
    /// Fails with a configuration error if `max_partitions < 2` or if both
    /// bounds are given and `lower_bound >= upper_bound`.
    pub fn with_bounds(
        max_partitions: usize,
        lower_bound: Option<T>,
        upper_bound: Option<T>,
    ) -> Result<Self> {
        Self::with_policy(S::default(), max_partitions, lower_bound, upper_bound)
    }

    /// Create a partitioner from a configuration
    pub fn from_config(config: &RangeConfig<T>) -> Result<Self> {
        let mut partitioner =
            Self::with_bounds(config.max_partitions, config.lower_bound, config.upper_bound)?;
        partitioner.quantile = config.quantile_method.estimator();
        Ok(partitioner)
    }
}

impl<T: Numeric, S: StepPolicy + Default> Default for RangePartitioner<T, S> {
    fn default() -> Self {
        Self {
            max_partitions: DEFAULT_MAX_PARTITIONS,
            lower_bound: None,
            upper_bound: None,
            policy: S::default(),
            quantile: QuantileMethod::default().estimator(),
            state: None,
        }
    }
}

impl<T: Numeric, S: StepPolicy> RangePartitioner<T, S> {
    /// Create a partitioner with an explicit step policy
    pub fn with_policy(
        policy: S,
        max_partitions: usize,
        lower_bound: Option<T>,
        upper_bound: Option<T>,
    ) -> Result<Self> {
        check_max_partitions(max_partitions)?;
        check_bounds(lower_bound, upper_bound)?;

        Ok(Self {
            max_partitions,
            lower_bound,
            upper_bound,
            policy,
            quantile: QuantileMethod::default().estimator(),
            state: None,
        })
    }

    /// Replace the estimator used to infer missing bounds
    pub fn with_quantile_estimator<Q>(mut self, estimator: Q) -> Self
    where
        Q: QuantileEstimator + 'static,
    {
        self.quantile = Arc::new(estimator);
        self
    }

    /// The configured lower bound, `None` if it is inferred on each fit
    pub fn lower_bound(&self) -> Option<T> {
        self.lower_bound
    }

    /// The configured upper bound, `None` if it is inferred on each fit
    pub fn upper_bound(&self) -> Option<T> {
        self.upper_bound
    }

    /// The step policy of this partitioner
    pub fn policy(&self) -> &S {
        &self.policy
    }

    /// Fit with per-call bounds
    ///
    /// A bound passed here takes precedence over the configured one for this
    /// fit only; bounds missing from both are inferred from the data.
    ///
    /// If the upper bound is inferred and ends up below the lower bound, it is
    /// raised to the lower bound. If a supplied upper bound is below the lower
    /// bound, the lower bound is lowered to it instead.
    ///
    /// # Errors
    ///
    /// A configuration error if both bounds are supplied and resolve to a
    /// zero-width range. A zero-width range with at least one inferred bound
    /// (identical values, a single observation, no observations) yields a
    /// single partition instead.
    #[instrument(level = "debug", skip_all, fields(n = values.len()))]
    pub fn fit_with_bounds(
        &mut self,
        values: &[T],
        lower_bound: Option<T>,
        upper_bound: Option<T>,
    ) -> Result<&mut Self> {
        let lower_bound = lower_bound.or(self.lower_bound).map(|b| b.to_f64());
        let upper_bound = upper_bound.or(self.upper_bound).map(|b| b.to_f64());
        let pinned = lower_bound.is_some() && upper_bound.is_some();

        let (lower, upper) = self.resolve_bounds(values, lower_bound, upper_bound)?;
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::non_finite("resolved partition bounds"));
        }

        let step = if upper > lower || pinned {
            self.policy.step_size(lower, upper, self.max_partitions)?
        } else {
            trace!(lower, "zero-width range inferred from data, using a unit-width step");
            self.policy.step_size(lower, lower + 1.0, self.max_partitions)?
        };

        // both ends are multiples of the step; lower_bound falls in the
        // first interval and upper_bound in the last
        let first_partition = snap_to_integer((lower + step / 2.0) / step).floor() * step;
        let last_partition =
            (snap_to_integer((upper - step / 2.0) / step).ceil() * step).max(first_partition);
        let n_partitions = ((last_partition - first_partition) / step).round() as usize + 1;

        let left_offset = self.policy.center_offset(step);
        let last_idx = (n_partitions - 1) as f64;
        let mut frequencies = vec![0usize; n_partitions];
        let mut dropped = 0usize;
        for value in values {
            let value = value.to_f64();
            let idx = snap_to_integer((value - first_partition + left_offset) / step).floor();
            // the resolved bounds are always covered; the last interval is
            // closed at the upper bound
            let idx = if (lower..=upper).contains(&value) {
                idx.clamp(0.0, last_idx)
            } else {
                idx
            };
            if idx >= 0.0 && idx <= last_idx {
                frequencies[idx as usize] += 1;
            } else {
                dropped += 1;
            }
        }

        debug!(
            policy = self.policy.name(),
            integer = T::IS_INTEGER,
            lower,
            upper,
            step,
            first_partition,
            last_partition,
            n_partitions,
            dropped,
            "fitted range partitioner"
        );

        self.state = Some(RangeState {
            step,
            first_partition,
            last_partition,
            frequencies,
        });
        Ok(self)
    }

    fn resolve_bounds(
        &self,
        values: &[T],
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
    ) -> Result<(f64, f64)> {
        let sorted = if (lower_bound.is_none() || upper_bound.is_none()) && !values.is_empty() {
            let mut sorted: Vec<f64> = values.iter().map(|v| v.to_f64()).collect();
            sorted.sort_by(f64::total_cmp);
            Some(sorted)
        } else {
            None
        };

        let infer = |p: f64| -> Result<Option<f64>> {
            match &sorted {
                Some(sorted) => {
                    let bound = self.quantile.quantile_sorted(sorted, p)?;
                    trace!(estimator = self.quantile.name(), p, bound, "inferred bound");
                    Ok(Some(bound))
                }
                None => Ok(None),
            }
        };

        // without data a missing bound falls back to the other bound, then 0
        let mut lower = match lower_bound {
            Some(lower) => lower,
            None => infer(LOWER_TAIL_QUANTILE)?.or(upper_bound).unwrap_or(0.0),
        };

        let upper = match upper_bound {
            Some(upper) => {
                if upper < lower {
                    lower = upper;
                }
                upper
            }
            None => {
                let upper = infer(UPPER_TAIL_QUANTILE)?.unwrap_or(lower);
                if upper < lower {
                    lower
                } else {
                    upper
                }
            }
        };

        Ok((lower, upper))
    }

    fn state(&self) -> Result<&RangeState> {
        self.state
            .as_ref()
            .ok_or_else(|| Error::not_fitted("RangePartitioner"))
    }

    /// The width of each partition
    pub fn partition_width(&self) -> Result<T> {
        Ok(T::from_f64(self.state()?.step))
    }

    /// Center of the lowest partition
    pub fn first_partition(&self) -> Result<T> {
        Ok(T::from_f64(self.state()?.first_partition))
    }

    /// Center of the highest partition
    pub fn last_partition(&self) -> Result<T> {
        Ok(T::from_f64(self.state()?.last_partition))
    }

    /// The endpoints of the intervals that delineate each partition
    ///
    /// For every partition, a pair `(x, y)` where `x` is the inclusive lower
    /// bound and `y` the exclusive upper bound of its range. The last range
    /// also holds the resolved upper bound of the fit when that bound sits on
    /// its edge.
    pub fn partition_bounds(&self) -> Result<Vec<(T, T)>> {
        let state = self.state()?;
        let left = self.policy.center_offset(state.step);
        let right = state.step - left;

        Ok((0..state.n_partitions())
            .map(|idx| {
                let center = state.center(idx);
                (T::from_f64(center - left), T::from_f64(center + right))
            })
            .collect())
    }

    /// Partitions as bins joining center, interval and count
    pub fn bins(&self) -> Result<Vec<PartitionBin<T>>> {
        let state = self.state()?;
        let centers = self.partitions()?;
        let bounds = self.partition_bounds()?;

        Ok(centers
            .into_iter()
            .zip(bounds)
            .zip(state.frequencies.iter())
            .map(|((center, (left, right)), &count)| PartitionBin::new(center, left, right, count))
            .collect())
    }
}

impl<T: Numeric, S: StepPolicy> Partitioner for RangePartitioner<T, S> {
    type Value = T;

    fn max_partitions(&self) -> usize {
        self.max_partitions
    }

    fn fit(&mut self, values: &[T]) -> Result<&mut Self> {
        self.fit_with_bounds(values, None, None)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    fn partitions(&self) -> Result<Vec<T>> {
        let state = self.state()?;
        Ok((0..state.n_partitions())
            .map(|idx| T::from_f64(state.center(idx)))
            .collect())
    }

    fn frequencies(&self) -> Result<&[usize]> {
        Ok(&self.state()?.frequencies)
    }

    fn is_categorical(&self) -> bool {
        false
    }
}

impl<T: Numeric, S: StepPolicy + fmt::Debug> fmt::Debug for RangePartitioner<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangePartitioner")
            .field("max_partitions", &self.max_partitions)
            .field("lower_bound", &self.lower_bound)
            .field("upper_bound", &self.upper_bound)
            .field("policy", &self.policy)
            .field("quantile", &self.quantile.name())
            .field("state", &self.state)
            .finish()
    }
}
