// sparkify-core/src/domain/quality/expectation.rs

use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use super::scalar::Scalar;

/// Pass/fail rule applied to the scalar returned by a quality query.
///
/// The declarative shape is resolved once, at load time:
/// `null` (or absent) is `Default`, a bare integer is `Equals`, and a
/// single-key map (`gt`, `eq`, `gte`, `lt`, `lte`) picks the comparison.
/// Anything else is kept as `Unsupported` and never passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Expectation {
    /// actual > 0
    #[default]
    Default,
    Equals(i64),
    GreaterThan(i64),
    GreaterOrEqual(i64),
    LessThan(i64),
    LessOrEqual(i64),
    /// Unrecognized rule, carrying the key(s) that were given.
    Unsupported(String),
}

impl Expectation {
    pub fn evaluate(&self, actual: impl Into<Scalar>) -> bool {
        let actual = actual.into();
        let (threshold, accepts): (i64, fn(Ordering) -> bool) = match self {
            Self::Default => (0, Ordering::is_gt),
            Self::Equals(n) => (*n, Ordering::is_eq),
            Self::GreaterThan(n) => (*n, Ordering::is_gt),
            Self::GreaterOrEqual(n) => (*n, Ordering::is_ge),
            Self::LessThan(n) => (*n, Ordering::is_lt),
            Self::LessOrEqual(n) => (*n, Ordering::is_le),
            Self::Unsupported(_) => return false,
        };
        actual.compare(threshold).is_some_and(accepts)
    }

    fn from_rule(key: &str, value: i64) -> Self {
        match key {
            "eq" => Self::Equals(value),
            "gt" => Self::GreaterThan(value),
            "gte" => Self::GreaterOrEqual(value),
            "lt" => Self::LessThan(value),
            "lte" => Self::LessOrEqual(value),
            other => Self::Unsupported(other.to_string()),
        }
    }
}

/// Free-function form, used when building a `CheckResult`.
pub fn evaluate(actual: impl Into<Scalar>, expectation: &Expectation) -> bool {
    expectation.evaluate(actual)
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "> 0"),
            Self::Equals(n) => write!(f, "= {}", n),
            Self::GreaterThan(n) => write!(f, "> {}", n),
            Self::GreaterOrEqual(n) => write!(f, ">= {}", n),
            Self::LessThan(n) => write!(f, "< {}", n),
            Self::LessOrEqual(n) => write!(f, "<= {}", n),
            Self::Unsupported(key) => write!(f, "unsupported rule '{}'", key),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpectation {
    Exact(i64),
    Rule(BTreeMap<String, i64>),
}

impl<'de> Deserialize<'de> for Expectation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawExpectation>::deserialize(deserializer)?;
        Ok(match raw {
            None => Expectation::Default,
            Some(RawExpectation::Exact(n)) => Expectation::Equals(n),
            Some(RawExpectation::Rule(rules)) => {
                let mut entries = rules.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((key, value)), None) => Expectation::from_rule(&key, value),
                    (None, _) => Expectation::Unsupported(String::new()),
                    (Some((first, _)), Some((second, _))) => {
                        // Ambiguous: several comparisons in one map.
                        let mut keys = vec![first, second];
                        keys.extend(entries.map(|(k, _)| k));
                        Expectation::Unsupported(keys.join(","))
                    }
                }
            }
        })
    }
}
