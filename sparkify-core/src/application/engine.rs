// sparkify-core/src/application/engine.rs

//! Single-statement execution shared by the staging and load tasks, and
//! available to task bodies that issue ad-hoc SQL.

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::error::SparkifyError;
use crate::ports::executor::SqlExecutor;

/// Runs one statement through the executor with timing logs.
/// Exactly one outcome per call: no retry, no timeout at this layer.
#[instrument(skip(executor, sql), fields(engine = executor.engine_name(), sql.len = sql.len()))]
pub async fn execute_statement(executor: &dyn SqlExecutor, sql: &str) -> Result<(), SparkifyError> {
    let start = Instant::now();
    debug!("Executing statement: {}", sql);

    let result = executor.execute(sql).await;
    let duration = start.elapsed();

    match &result {
        Ok(_) => debug!("Statement finished in {:.2?}", duration),
        Err(e) => error!("Statement failed after {:.2?}: {}", duration, e),
    }
    result
}
