// sparkify-core/src/infrastructure/adapters/duckdb.rs

// Local stand-in for the warehouse: lets quality suites and insert templates
// run against a DuckDB file without a cluster.

use async_trait::async_trait;
use duckdb::types::ValueRef;
use duckdb::{Config, Connection};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::domain::quality::Scalar;
use crate::error::SparkifyError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::executor::SqlExecutor;

pub struct DuckDBExecutor {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBExecutor {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, SparkifyError> {
        self.conn
            .lock()
            .map_err(|_| InfrastructureError::Database(DatabaseError::Poisoned).into())
    }
}

/// Maps a DuckDB cell to a `Scalar` without losing the fractional part.
fn to_scalar(value: ValueRef<'_>) -> Result<Option<Scalar>, DatabaseError> {
    let scalar = match value {
        ValueRef::Null => return Ok(None),
        ValueRef::TinyInt(v) => Scalar::Int(v.into()),
        ValueRef::SmallInt(v) => Scalar::Int(v.into()),
        ValueRef::Int(v) => Scalar::Int(v.into()),
        ValueRef::BigInt(v) => Scalar::Int(v),
        ValueRef::UTinyInt(v) => Scalar::Int(v.into()),
        ValueRef::USmallInt(v) => Scalar::Int(v.into()),
        ValueRef::UInt(v) => Scalar::Int(v.into()),
        ValueRef::UBigInt(v) => i64::try_from(v)
            .map(Scalar::Int)
            .unwrap_or(Scalar::Float(v as f64)),
        ValueRef::HugeInt(v) => i64::try_from(v)
            .map(Scalar::Int)
            .unwrap_or(Scalar::Float(v as f64)),
        ValueRef::Float(v) => Scalar::Float(v.into()),
        ValueRef::Double(v) => Scalar::Float(v),
        ValueRef::Decimal(d) => d
            .to_string()
            .parse::<f64>()
            .map(Scalar::Float)
            .map_err(|_| DatabaseError::NonNumericScalar(d.to_string()))?,
        other => return Err(DatabaseError::NonNumericScalar(format!("{:?}", other))),
    };
    Ok(Some(scalar))
}

#[async_trait]
impl SqlExecutor for DuckDBExecutor {
    async fn execute(&self, sql: &str) -> Result<(), SparkifyError> {
        let conn = self.lock()?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    async fn query_scalar(&self, sql: &str) -> Result<Option<Scalar>, SparkifyError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([])?;

        let value = match rows.next()? {
            Some(row) => to_scalar(row.get_ref(0)?).map_err(InfrastructureError::Database)?,
            None => None,
        };
        debug!(?value, "Scalar fetched");
        Ok(value)
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::quality::run_suite;
    use crate::domain::quality::{Expectation, QualityCheck};
    use anyhow::Result;

    #[tokio::test]
    async fn test_duckdb_scalar_flow() -> Result<()> {
        let executor = DuckDBExecutor::new(":memory:")?;

        executor
            .execute("CREATE TABLE users (user_id INTEGER, first_name VARCHAR)")
            .await?;
        executor
            .execute("INSERT INTO users VALUES (1, 'Ada'), (2, 'Grace'), (NULL, 'Ghost')")
            .await?;

        let total = executor.query_scalar("SELECT COUNT(*) FROM users").await?;
        assert_eq!(total, Some(Scalar::Int(3)));

        let nulls = executor
            .query_scalar("SELECT COUNT(*) FROM users WHERE user_id IS NULL")
            .await?;
        assert_eq!(nulls, Some(Scalar::Int(1)));
        Ok(())
    }

    #[tokio::test]
    async fn test_duckdb_empty_and_null_results() -> Result<()> {
        let executor = DuckDBExecutor::new(":memory:")?;
        executor.execute("CREATE TABLE songs (song_id VARCHAR)").await?;

        let no_row = executor
            .query_scalar("SELECT 1 FROM songs WHERE song_id = 'x'")
            .await?;
        assert_eq!(no_row, None);

        let null = executor.query_scalar("SELECT CAST(NULL AS BIGINT)").await?;
        assert_eq!(null, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_duckdb_error() -> Result<()> {
        let executor = DuckDBExecutor::new(":memory:")?;
        let result = executor.query_scalar("SELECT * FROM non_existent_table").await;
        assert!(result.is_err());
        assert_eq!(executor.engine_name(), "duckdb");
        Ok(())
    }

    #[tokio::test]
    async fn test_duckdb_fractional_results_keep_their_fraction() -> Result<()> {
        let executor = DuckDBExecutor::new(":memory:")?;

        let decimal = executor.query_scalar("SELECT 0.4").await?;
        assert_eq!(decimal, Some(Scalar::Float(0.4)));

        let double = executor.query_scalar("SELECT 2.7::DOUBLE").await?;
        assert_eq!(double, Some(Scalar::Float(2.7)));

        executor.execute("CREATE TABLE songs (duration INTEGER)").await?;
        executor.execute("INSERT INTO songs VALUES (1), (2)").await?;
        let avg = executor.query_scalar("SELECT AVG(duration) FROM songs").await?;
        assert_eq!(avg, Some(Scalar::Float(1.5)));
        Ok(())
    }

    #[tokio::test]
    async fn test_duckdb_fractional_value_above_ceiling_fails_suite() -> Result<()> {
        let executor = DuckDBExecutor::new(":memory:")?;
        let checks = vec![QualityCheck::new(
            "SELECT 2.9::DOUBLE",
            Expectation::LessOrEqual(2),
        )];

        let report = run_suite("fractional", &checks, &executor).await?;
        assert!(!report.passed());
        assert_eq!(report.results[0].detail, "Actual=2.9, Expected=<= 2");
        Ok(())
    }

    #[tokio::test]
    async fn test_duckdb_text_scalar_is_rejected() -> Result<()> {
        let executor = DuckDBExecutor::new(":memory:")?;
        let result = executor.query_scalar("SELECT 'ten'").await;
        assert!(matches!(
            result,
            Err(SparkifyError::Infrastructure(InfrastructureError::Database(
                DatabaseError::NonNumericScalar(_)
            )))
        ));
        Ok(())
    }
}
