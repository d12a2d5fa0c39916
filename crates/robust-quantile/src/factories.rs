//! Configuration-driven estimator selection

use crate::{LinearInterpolation, NearestRank, QuantileEstimator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Quantile estimation methods selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Linear interpolation between order statistics
    #[default]
    Linear,

    /// Nearest-rank order statistic
    NearestRank,
}

impl QuantileMethod {
    /// Create a shareable estimator for this method
    pub fn estimator(self) -> Arc<dyn QuantileEstimator> {
        match self {
            Self::Linear => Arc::new(LinearInterpolation),
            Self::NearestRank => Arc::new(NearestRank),
        }
    }
}
