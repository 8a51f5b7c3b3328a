// sparkify-core/src/application/quality.rs

// USE CASE: data-quality gate. Every check runs, failures are aggregated,
// and the verdict is only known once the whole suite has been evaluated.

use tracing::{info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::quality::{CheckResult, QualityCheck, SuiteReport};
use crate::error::SparkifyError;
use crate::ports::executor::SqlExecutor;

#[instrument(skip(checks, executor), fields(check_count = checks.len()))]
pub async fn run_suite(
    suite: &str,
    checks: &[QualityCheck],
    executor: &dyn SqlExecutor,
) -> Result<SuiteReport, SparkifyError> {
    // Configuration problems are fatal and surface before any query is sent.
    if checks.is_empty() {
        return Err(DomainError::Configuration(format!(
            "quality suite '{}' has no checks",
            suite
        ))
        .into());
    }
    for (index, check) in checks.iter().enumerate() {
        check.check_query(index)?;
    }

    let mut results = Vec::with_capacity(checks.len());
    for (index, check) in checks.iter().enumerate() {
        let result = match executor.query_scalar(&check.query).await {
            Ok(Some(actual)) => CheckResult::evaluated(index, check, actual),
            Ok(None) => CheckResult::no_result(index, check),
            Err(e) => CheckResult::executor_failed(index, check, &e.to_string()),
        };

        if result.passed {
            info!("PASS check #{}: {} ({})", index, check.query, result.detail);
        } else {
            warn!("FAIL check #{}: {} ({})", index, check.query, result.detail);
        }
        results.push(result);
    }

    let report = SuiteReport {
        suite: suite.to_string(),
        results,
    };
    info!(
        passed = report.passed(),
        failed = report.failures().count(),
        "Quality suite '{}' evaluated",
        suite
    );
    Ok(report)
}
