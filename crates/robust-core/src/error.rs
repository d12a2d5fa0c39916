//! Error types for robust partitioning
//!
//! Provides a unified error type for all robust-partitioning crates.

use thiserror::Error;

/// Core error type for partitioning and quantile operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid partitioner configuration, or a fit whose range cannot be stepped
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A partitioner was queried before a successful fit
    #[error("{partitioner} is not fitted: call fit() before querying partitions")]
    NotFitted { partitioner: &'static str },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an error for a query on an unfitted partitioner
    pub fn not_fitted(partitioner: &'static str) -> Self {
        Self::NotFitted { partitioner }
    }

    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// `true` if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// `true` if this error reports a query on an unfitted partitioner
    pub fn is_not_fitted(&self) -> bool {
        matches!(self, Self::NotFitted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("arg max_partitions=1 must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: arg max_partitions=1 must be at least 2"
        );

        let err = Error::NotFitted { partitioner: "CategoryPartitioner" };
        assert_eq!(
            err.to_string(),
            "CategoryPartitioner is not fitted: call fit() before querying partitions"
        );

        let err = Error::InvalidParameter("p must be finite".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: p must be finite");

        let err = Error::InsufficientData { expected: 1, actual: 0 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 1 samples, got 0");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("quantile estimation");
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::non_finite("resolved bounds");
        assert_eq!(
            err.to_string(),
            "Invalid input: resolved bounds contains NaN or infinite values"
        );

        assert!(Error::configuration("bad").is_configuration());
        assert!(!Error::configuration("bad").is_not_fitted());
        assert!(Error::not_fitted("RangePartitioner").is_not_fitted());
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom quantile failed");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom quantile failed"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_chaining() {
        fn inner_function() -> Result<()> {
            Err(Error::empty_input("quantile"))
        }

        fn outer_function() -> Result<()> {
            inner_function().map_err(|e| Error::configuration(format!("cannot infer bounds: {e}")))
        }

        let err = outer_function().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("cannot infer bounds"));
        assert!(err.to_string().contains("Insufficient data"));
    }
}
