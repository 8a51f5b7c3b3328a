// sparkify-core/src/domain/quality/scalar.rs

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Numeric value returned by a quality query, kept as the engine produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Numeric comparison against an integer threshold.
    /// `None` for NaN, which satisfies no expectation.
    pub fn compare(&self, threshold: i64) -> Option<Ordering> {
        match self {
            Self::Int(v) => Some(v.cmp(&threshold)),
            Self::Float(v) => v.partial_cmp(&(threshold as f64)),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_values_are_not_truncated() {
        assert_eq!(Scalar::Float(2.9).compare(2), Some(Ordering::Greater));
        assert_eq!(Scalar::Float(0.4).compare(0), Some(Ordering::Greater));
        assert_eq!(Scalar::Float(-0.1).compare(0), Some(Ordering::Less));
        assert_eq!(Scalar::Float(3.0).compare(3), Some(Ordering::Equal));
    }

    #[test]
    fn test_integers_compare_exactly() {
        assert_eq!(Scalar::Int(i64::MAX).compare(i64::MAX - 1), Some(Ordering::Greater));
        assert_eq!(Scalar::Int(5).compare(5), Some(Ordering::Equal));
    }

    #[test]
    fn test_nan_is_incomparable() {
        assert_eq!(Scalar::Float(f64::NAN).compare(0), None);
    }

    #[test]
    fn test_display_keeps_fraction() {
        assert_eq!(Scalar::Float(2.9).to_string(), "2.9");
        assert_eq!(Scalar::Int(0).to_string(), "0");
    }
}
