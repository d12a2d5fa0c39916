//! Numeric boundary trait for the partitioning engine
//!
//! Range partitioning computes in `f64` throughout. This trait converts the
//! caller's values into that space and converts partition centers back, so
//! the alignment algorithm exists once for integers and floats alike.

use num_traits::Num;
use std::fmt::Debug;

/// Numeric types that can be partitioned into ranges
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// `true` for integer types, whose partition centers are rounded on the way out
    const IS_INTEGER: bool;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert from f64
    ///
    /// Integer types round to the nearest integer first, so a center computed
    /// as `2.9999999999999996` comes back as `3`.
    fn from_f64(val: f64) -> Self;

    /// Convert to f64
    fn to_f64(&self) -> f64;
}

// =============================================================================
// Numeric implementations for concrete types
// =============================================================================

impl Numeric for f64 {
    const IS_INTEGER: bool = false;

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn from_f64(val: f64) -> Self {
        val
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    const IS_INTEGER: bool = false;

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn from_f64(val: f64) -> Self {
        val as f32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

macro_rules! impl_integer_numeric {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                const IS_INTEGER: bool = true;

                fn is_finite(&self) -> bool {
                    true // Integers are always finite
                }

                fn from_f64(val: f64) -> Self {
                    val.round() as $ty
                }

                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

// Signed only: the lower edge of the first interval can sit below zero even
// when every value is non-negative.
impl_integer_numeric!(i32, i64);
