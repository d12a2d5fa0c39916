//! Configuration types for partitioners

use robust_core::{Error, Numeric, Result};
use robust_quantile::QuantileMethod;
use serde::{Deserialize, Serialize};

/// Number of partitions used when none is configured
pub const DEFAULT_MAX_PARTITIONS: usize = 20;

/// Configuration of a numeric range partitioner
///
/// Missing fields take their defaults when deserialized:
///
/// ```rust
/// use robust_partition::RangeConfig;
///
/// let config: RangeConfig<f64> = serde_json::from_str(r#"{"upper_bound": 50.0}"#).unwrap();
/// assert_eq!(config.max_partitions, 20);
/// assert_eq!(config.lower_bound, None);
/// assert_eq!(config.upper_bound, Some(50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig<T> {
    /// Maximum number of partitions, at least 2
    pub max_partitions: usize,
    /// Inclusive lower end of the covered range; inferred from the data when unset
    pub lower_bound: Option<T>,
    /// Upper end of the covered range; inferred from the data when unset
    pub upper_bound: Option<T>,
    /// Estimator used to infer missing bounds
    pub quantile_method: QuantileMethod,
}

impl<T> Default for RangeConfig<T> {
    fn default() -> Self {
        Self {
            max_partitions: DEFAULT_MAX_PARTITIONS,
            lower_bound: None,
            upper_bound: None,
            quantile_method: QuantileMethod::default(),
        }
    }
}

impl<T: Numeric> RangeConfig<T> {
    /// Configuration with the given partition cap and inferred bounds
    pub fn new(max_partitions: usize) -> Self {
        Self {
            max_partitions,
            ..Self::default()
        }
    }

    /// Pin the covered range
    pub fn bounds(mut self, lower_bound: Option<T>, upper_bound: Option<T>) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Select the estimator used for bound inference
    pub fn quantile_method(mut self, method: QuantileMethod) -> Self {
        self.quantile_method = method;
        self
    }

    /// Check the construction-time invariants
    pub fn validate(&self) -> Result<()> {
        check_max_partitions(self.max_partitions)?;
        check_bounds(self.lower_bound, self.upper_bound)
    }
}

/// Configuration of a categorical partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Maximum number of partitions, at least 2
    pub max_partitions: usize,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            max_partitions: DEFAULT_MAX_PARTITIONS,
        }
    }
}

impl CategoryConfig {
    /// Configuration with the given partition cap
    pub fn new(max_partitions: usize) -> Self {
        Self { max_partitions }
    }

    /// Check the construction-time invariants
    pub fn validate(&self) -> Result<()> {
        check_max_partitions(self.max_partitions)
    }
}

pub(crate) fn check_max_partitions(max_partitions: usize) -> Result<()> {
    if max_partitions < 2 {
        return Err(Error::configuration(format!(
            "arg max_partitions={max_partitions} must be at least 2"
        )));
    }
    Ok(())
}

pub(crate) fn check_bounds<T: Numeric>(
    lower_bound: Option<T>,
    upper_bound: Option<T>,
) -> Result<()> {
    for bound in [lower_bound, upper_bound].into_iter().flatten() {
        if !bound.is_finite() {
            return Err(Error::configuration(format!("bound {bound:?} must be finite")));
        }
    }

    if let (Some(lower), Some(upper)) = (lower_bound, upper_bound) {
        if lower >= upper {
            return Err(Error::configuration(format!(
                "arg lower_bound >= arg upper_bound: [{lower:?}, {upper:?})"
            )));
        }
    }
    Ok(())
}
