// sparkify-core/src/application/load.rs

// USE CASE: populate a fact or dimension table from the staging tables.

//! Load task entry point, called by a scheduler's task body with its own
//! executor. The CLI only prints `TableLoad::statements`.

use tracing::{info, instrument};

use super::engine::execute_statement;
use crate::domain::load::{LoadMode, TableLoad};
use crate::error::SparkifyError;
use crate::ports::executor::SqlExecutor;

#[instrument(skip_all, fields(table = load.template.target_table()))]
pub async fn load_table(load: &TableLoad, executor: &dyn SqlExecutor) -> Result<(), SparkifyError> {
    let table = load.template.target_table();
    let mode = load.effective_mode();

    if mode == LoadMode::TruncateInsert {
        info!("Clearing {} before load", table);
    }
    for sql in load.statements() {
        execute_statement(executor, &sql).await?;
    }
    info!(?mode, "Load of {} completed", table);
    Ok(())
}
