// sparkify-core/src/application/staging.rs

// USE CASE: load one staging table from object storage.

//! Staging task entry point. A scheduler's task body calls `stage_table`
//! with its own executor; the `sparkify render` command only prints what
//! `plan_staging` would send.

use tracing::{info, instrument};

use super::context::RunContext;
use super::engine::execute_statement;
use super::ports::TemplateEngine;
use crate::domain::error::DomainError;
use crate::domain::load::{LoadSpec, build_copy_statement, build_truncate_statement};
use crate::domain::pipeline::{PipelineConfig, StagingTask};
use crate::error::SparkifyError;
use crate::ports::executor::SqlExecutor;

/// Turns a declarative staging task into a concrete `LoadSpec`:
/// format tag resolved, pipeline defaults applied, source location rendered.
pub fn resolve_load_spec(
    task: &StagingTask,
    config: &PipelineConfig,
    renderer: &dyn TemplateEngine,
    ctx: &RunContext,
) -> Result<LoadSpec, SparkifyError> {
    let format = task.file_format()?;
    let source_location = renderer.render(&task.source, &ctx.template_context())?;

    Ok(LoadSpec {
        table: task.table.clone(),
        source_location,
        credential_ref: task
            .credential_ref
            .clone()
            .unwrap_or_else(|| config.credential_ref.clone()),
        format,
        region: task.region.clone().unwrap_or_else(|| config.region.clone()),
    })
}

/// Statements for one staging run, in execution order.
pub fn plan_staging(spec: &LoadSpec, truncate: bool) -> Result<Vec<String>, DomainError> {
    let copy = build_copy_statement(spec)?;
    let mut statements = Vec::with_capacity(2);
    if truncate {
        statements.push(build_truncate_statement(&spec.table));
    }
    statements.push(copy);
    Ok(statements)
}

/// Clears (optionally) and reloads `spec.table`. Every statement is built
/// before the first one is sent, so an invalid spec never reaches the executor.
#[instrument(skip_all, fields(table = %spec.table, format = spec.format.tag()))]
pub async fn stage_table(
    spec: &LoadSpec,
    truncate: bool,
    executor: &dyn SqlExecutor,
) -> Result<(), SparkifyError> {
    let statements = plan_staging(spec, truncate)?;

    if truncate {
        info!("Clearing staging table {}", spec.table);
    }
    info!("Copying {} into {}", spec.source_location, spec.table);
    for sql in &statements {
        execute_statement(executor, sql).await?;
    }
    info!("Staging of {} completed", spec.table);
    Ok(())
}
