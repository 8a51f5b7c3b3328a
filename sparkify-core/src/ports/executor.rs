// sparkify-core/src/ports/executor.rs

// What the core needs from a warehouse client, without knowing which one.
// Redshift in production, DuckDB locally, a mock in tests.

use crate::domain::quality::Scalar;
use crate::error::SparkifyError;
use async_trait::async_trait;

#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Runs a statement that produces no result set.
    async fn execute(&self, sql: &str) -> Result<(), SparkifyError>;

    /// First column of the first row, or `None` when the query returned no
    /// row (or a SQL NULL). Fractional values come back as `Scalar::Float`.
    async fn query_scalar(&self, sql: &str) -> Result<Option<Scalar>, SparkifyError>;

    fn engine_name(&self) -> &str;
}
