//! Step-size policies for range partitioning
//!
//! The range engine owns bound resolution, alignment and counting; a policy
//! only decides how wide a partition is and where its center sits inside it.

use crate::nice::ceil_to_nice_number;
use robust_core::Result;

/// Policy deciding the interval width and center offset of range partitions
pub trait StepPolicy: Send + Sync {
    /// Compute the interval width for the resolved bounds
    ///
    /// `max_partitions` is at least 2; callers guarantee that.
    fn step_size(&self, lower_bound: f64, upper_bound: f64, max_partitions: usize) -> Result<f64>;

    /// Distance from a partition center to the inclusive lower edge of its interval
    ///
    /// The exclusive upper edge sits at `step - center_offset(step)` above the center.
    fn center_offset(&self, step: f64) -> f64;

    /// Short name used in log output
    fn name(&self) -> &'static str;
}

fn raw_step(lower_bound: f64, upper_bound: f64, max_partitions: usize) -> f64 {
    (upper_bound - lower_bound) / (max_partitions - 1) as f64
}

/// Step policy for real-valued data
///
/// The step is the raw range divided by `max_partitions - 1`, rounded up to
/// the 1-2-5 series. Centers sit in the middle of their interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContinuousStep;

impl StepPolicy for ContinuousStep {
    fn step_size(&self, lower_bound: f64, upper_bound: f64, max_partitions: usize) -> Result<f64> {
        ceil_to_nice_number(raw_step(lower_bound, upper_bound, max_partitions))
    }

    fn center_offset(&self, step: f64) -> f64 {
        step / 2.0
    }

    fn name(&self) -> &'static str {
        "continuous"
    }
}

/// Step policy for integer-valued data
///
/// Same rounding as [`ContinuousStep`], then truncated to an integer and
/// floored at 1 so integers are never split by a sub-unit step. For odd
/// steps the left half of the interval is the smaller one: a step of 5
/// around center 10 covers `[8, 13)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerStep;

impl StepPolicy for IntegerStep {
    fn step_size(&self, lower_bound: f64, upper_bound: f64, max_partitions: usize) -> Result<f64> {
        let nice = ceil_to_nice_number(raw_step(lower_bound, upper_bound, max_partitions))?;
        Ok(nice.trunc().max(1.0))
    }

    fn center_offset(&self, step: f64) -> f64 {
        (step / 2.0).floor()
    }

    fn name(&self) -> &'static str {
        "integer"
    }
}
