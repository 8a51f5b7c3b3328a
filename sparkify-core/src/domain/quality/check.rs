// sparkify-core/src/domain/quality/check.rs

use serde::{Deserialize, Serialize};
use sqlparser::ast::Statement;
use sqlparser::dialect::RedshiftSqlDialect;
use sqlparser::parser::Parser;
use validator::Validate;

use super::expectation::{Expectation, evaluate};
use super::scalar::Scalar;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QualityCheck {
    /// SQL returning a single scalar row.
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(default, rename = "expected")]
    pub expectation: Expectation,
}

impl QualityCheck {
    pub fn new(query: impl Into<String>, expectation: Expectation) -> Self {
        Self {
            query: query.into(),
            expectation,
        }
    }

    /// Rejects blank queries and statements that cannot yield a scalar.
    ///
    /// Queries the local Redshift grammar cannot parse are passed through
    /// to the warehouse unchanged.
    pub fn check_query(&self, index: usize) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::Configuration(format!("check #{}: {}", index, e)))?;
        if self.query.trim().is_empty() {
            return Err(DomainError::Configuration(format!(
                "check #{} has an empty query",
                index
            )));
        }

        match Parser::parse_sql(&RedshiftSqlDialect {}, &self.query) {
            Ok(statements) => match statements.as_slice() {
                [Statement::Query(_)] => Ok(()),
                [_] => Err(DomainError::Configuration(format!(
                    "check #{} must be a SELECT query: {}",
                    index, self.query
                ))),
                _ => Err(DomainError::Configuration(format!(
                    "check #{} must contain exactly one statement",
                    index
                ))),
            },
            Err(e) => {
                tracing::debug!(index, error = %e, "Check query not parseable locally, deferring to warehouse");
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The query returned zero rows (or NULL).
    NoResult,
    /// The value did not satisfy the expectation.
    Expectation,
    /// The executor itself raised an error.
    Executor,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub index: usize,
    pub query: String,
    pub actual: Option<Scalar>,
    pub passed: bool,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl CheckResult {
    pub fn evaluated(index: usize, check: &QualityCheck, actual: Scalar) -> Self {
        let passed = evaluate(actual, &check.expectation);
        Self {
            index,
            query: check.query.clone(),
            actual: Some(actual),
            passed,
            detail: format!("Actual={}, Expected={}", actual, check.expectation),
            failure: (!passed).then_some(FailureKind::Expectation),
        }
    }

    pub fn no_result(index: usize, check: &QualityCheck) -> Self {
        Self {
            index,
            query: check.query.clone(),
            actual: None,
            passed: false,
            detail: "no result returned".to_string(),
            failure: Some(FailureKind::NoResult),
        }
    }

    pub fn executor_failed(index: usize, check: &QualityCheck, error: &str) -> Self {
        Self {
            index,
            query: check.query.clone(),
            actual: None,
            passed: false,
            detail: format!("query failed: {}", error),
            failure: Some(FailureKind::Executor),
        }
    }
}

/// Outcome of one suite run. Results keep the order of the checks.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub results: Vec<CheckResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Collapses a failed report into the single error the task runner
    /// surfaces for this attempt.
    pub fn into_result(self) -> Result<SuiteReport, DomainError> {
        if self.passed() {
            return Ok(self);
        }
        let summary = self
            .failures()
            .map(|r| format!("  check #{} [{}]: {}", r.index, r.query, r.detail))
            .collect::<Vec<_>>()
            .join("\n");
        Err(DomainError::QualityGateFailed {
            failed: self.failures().count(),
            total: self.results.len(),
            suite: self.suite,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_query_rejects_blank_and_writes() {
        let blank = QualityCheck::new("   ", Expectation::Default);
        assert!(matches!(
            blank.check_query(0),
            Err(DomainError::Configuration(_))
        ));

        let empty = QualityCheck::new("", Expectation::Default);
        assert!(empty.check_query(0).is_err());

        let write = QualityCheck::new("DELETE FROM users", Expectation::Default);
        assert!(matches!(
            write.check_query(2),
            Err(DomainError::Configuration(msg)) if msg.contains("check #2")
        ));

        let two = QualityCheck::new("SELECT 1; SELECT 2", Expectation::Default);
        assert!(two.check_query(0).is_err());
    }

    #[test]
    fn test_check_query_accepts_scalar_select() {
        let check = QualityCheck::new("SELECT COUNT(*) FROM users", Expectation::Default);
        assert!(check.check_query(0).is_ok());
    }

    #[test]
    fn test_evaluated_detail_renders_actual_and_expected() {
        let check = QualityCheck::new("SELECT COUNT(*) FROM users", Expectation::Default);
        let result = CheckResult::evaluated(0, &check, Scalar::Int(0));
        assert!(!result.passed);
        assert_eq!(result.detail, "Actual=0, Expected=> 0");
        assert_eq!(result.failure, Some(FailureKind::Expectation));

        let ok = CheckResult::evaluated(1, &check, Scalar::Int(12));
        assert!(ok.passed);
        assert_eq!(ok.failure, None);
    }

    #[test]
    fn test_evaluated_keeps_fractional_actual() {
        let check = QualityCheck::new("SELECT AVG(duration) FROM songs", Expectation::LessOrEqual(2));
        let result = CheckResult::evaluated(0, &check, Scalar::Float(2.9));
        assert!(!result.passed);
        assert_eq!(result.actual, Some(Scalar::Float(2.9)));
        assert_eq!(result.detail, "Actual=2.9, Expected=<= 2");
    }

    #[test]
    fn test_into_result_collapses_failures() {
        let check = QualityCheck::new("SELECT COUNT(*) FROM songs", Expectation::Default);
        let report = SuiteReport {
            suite: "core".into(),
            results: vec![
                CheckResult::no_result(0, &check),
                CheckResult::evaluated(1, &check, Scalar::Int(3)),
            ],
        };
        assert!(!report.passed());

        match report.into_result() {
            Err(DomainError::QualityGateFailed {
                suite,
                failed,
                total,
                summary,
            }) => {
                assert_eq!(suite, "core");
                assert_eq!(failed, 1);
                assert_eq!(total, 2);
                assert!(summary.contains("check #0"));
                assert!(summary.contains("no result returned"));
            }
            other => panic!("expected quality gate failure, got {:?}", other),
        }
    }
}
